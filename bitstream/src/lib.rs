/*!

Bitstream holds the bit arrays the huffman coder writes into and reads from.

A `BitArray` has a fixed length chosen at creation, all bits start as 0 and are switched on with
`set`. Bits are stored MSB first, so bit `i` lives in byte `i >> 3` under the mask `0x80 >> (i & 7)`.

Persisted layout, as written by `write` and expected by `read`:

number of bits as u64 little endian | (number of bits + 7) >> 3 bytes of payload

Padding bits in the last byte are always 0.

*/

use std::io::{self, Read, Write};

/// number of bytes required to hold `num_bits` bits
#[inline]
pub fn num_bytes(num_bits: usize) -> usize {
    (num_bits + 7) >> 3
}

#[test]
fn test_num_bytes() {
    assert_eq!(num_bytes(0), 0);
    assert_eq!(num_bytes(1), 1);
    assert_eq!(num_bytes(8), 1);
    assert_eq!(num_bytes(9), 2);
    assert_eq!(num_bytes(18), 3);
}

#[inline]
fn bit_mask(index: usize) -> u8 {
    0x80 >> (index & 7)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitArray {
    data: Vec<u8>,
    num_bits: usize,
}

impl BitArray {
    /// Creates a bit array of `num_bits` bits, all set to 0.
    pub fn new(num_bits: usize) -> Self {
        BitArray {
            data: vec![0; num_bytes(num_bits)],
            num_bits,
        }
    }

    /// Sets the bit at `index` to 1.
    ///
    /// Panics if `index >= len()`, like slice indexing does.
    #[inline]
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.num_bits,
            "bit index {} out of range for bit array of length {}",
            index,
            self.num_bits
        );
        self.data[index >> 3] |= bit_mask(index);
    }

    /// Returns true if the bit at `index` is 1.
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn test(&self, index: usize) -> bool {
        assert!(
            index < self.num_bits,
            "bit index {} out of range for bit array of length {}",
            index,
            self.num_bits
        );
        self.data[index >> 3] & bit_mask(index) != 0
    }

    /// Checked version of `test`
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        if index < self.num_bits {
            Some(self.test(index))
        } else {
            None
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.num_bits
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_bits == 0
    }

    /// the packed payload, without the length prefix
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.num_bits).map(move |index| self.test(index))
    }

    /// Writes the length prefix and the payload.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&(self.num_bits as u64).to_le_bytes())?;
        writer.write_all(&self.data)?;
        Ok(())
    }

    /// Reads a bit array previously persisted with `write`.
    ///
    /// The payload is read through `take`, so a corrupted length prefix can't trigger a huge allocation
    /// before the data runs out.
    pub fn read<R: Read>(reader: &mut R) -> io::Result<Self> {
        let mut len_bytes = [0_u8; 8];
        reader.read_exact(&mut len_bytes)?;
        let num_bits = u64::from_le_bytes(len_bytes);
        let num_payload_bytes = (num_bits >> 3) + u64::from(num_bits & 7 != 0);

        let mut data = Vec::new();
        reader.by_ref().take(num_payload_bytes).read_to_end(&mut data)?;
        if (data.len() as u64) < num_payload_bytes {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "bit array declares {} bits but only {} bytes follow",
                    num_bits,
                    data.len()
                ),
            ));
        }
        let num_bits = num_bits as usize;

        let padding = data.len() * 8 - num_bits;
        if padding > 0 {
            let padding_mask = (1_u8 << padding) - 1;
            if data[data.len() - 1] & padding_mask != 0 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "bit array has non-zero padding bits",
                ));
            }
        }

        Ok(BitArray { data, num_bits })
    }
}

impl std::iter::FromIterator<bool> for BitArray {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let bits: Vec<bool> = iter.into_iter().collect();
        let mut bit_array = BitArray::new(bits.len());
        for (index, _) in bits.iter().enumerate().filter(|(_, bit)| **bit) {
            bit_array.set(index);
        }
        bit_array
    }
}

/// prints one `0` or `1` per bit
impl std::fmt::Display for BitArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
