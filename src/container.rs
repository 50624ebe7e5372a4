//! File layout of an encoded message: the tree bit array followed by the message bit array, each
//! in the [`BitArray::write`] format. There is no header, version or checksum.

use std::io::{self, Read, Write};

use crate::{BitArray, Encoded, HuffError};

/// writes tree bits then message bits
pub fn write_container<W: Write>(encoded: &Encoded, writer: &mut W) -> Result<(), HuffError> {
    encoded.tree_bits.write(writer)?;
    encoded.message_bits.write(writer)?;
    Ok(())
}

/// reads tree bits then message bits, a short input is reported as malformed
pub fn read_container<R: Read>(reader: &mut R) -> Result<Encoded, HuffError> {
    let tree_bits = read_bit_array(reader, "tree")?;
    let message_bits = read_bit_array(reader, "message")?;
    Ok(Encoded {
        tree_bits,
        message_bits,
    })
}

fn read_bit_array<R: Read>(reader: &mut R, part: &str) -> Result<BitArray, HuffError> {
    BitArray::read(reader).map_err(|err| match err.kind() {
        io::ErrorKind::UnexpectedEof => {
            HuffError::MalformedBitstream(format!("container ends inside the {} bits", part))
        }
        _ => HuffError::Io(err),
    })
}
