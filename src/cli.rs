use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Encode,
    Decode,
}

/// Only the first letter is looked at, so `e`, `enc` and `encode` all encode.
impl FromStr for Command {
    type Err = String;

    fn from_str(cmd: &str) -> Result<Self, Self::Err> {
        match cmd.chars().next() {
            Some('e') => Ok(Command::Encode),
            Some('d') => Ok(Command::Decode),
            _ => Err(format!("unknown command {:?}, expected encode or decode", cmd)),
        }
    }
}

/// Command Line Interpretation
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman coding -- encode/decode messages using Huffman coding",
    long_about = "
    Encodes a message with a Huffman code. The Huffman tree is stored next to the message bits,
    so the output file is all that is needed to decode it again.

    Message words are joined with single spaces and terminated by a newline."
)]
pub struct Options {
    /// encode or decode, only the first letter counts
    #[clap()]
    pub cmd: Command,

    /// Message to encode
    #[clap()]
    pub message: Vec<String>,

    /// Print the message, tree and message bits
    #[clap(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Encode: write tree and message bits to FILE. Decode: write the message to FILE
    #[clap(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Encode: read the message from FILE. Decode: read tree and message bits from FILE
    #[clap(short = 'i', long = "input", value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Encode: write the huffman tree in graphviz dot format to FILE
    #[clap(long = "dot", value_name = "FILE")]
    pub dot: Option<PathBuf>,
}

impl Options {
    /// Words of the command line joined by spaces, with a trailing newline. None without words.
    pub fn message_from_words(&self) -> Option<Vec<u8>> {
        if self.message.is_empty() {
            return None;
        }
        let mut message = self.message.join(" ").into_bytes();
        message.push(b'\n');
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_prefix() {
        assert_eq!("e".parse::<Command>(), Ok(Command::Encode));
        assert_eq!("encode".parse::<Command>(), Ok(Command::Encode));
        assert_eq!("dec".parse::<Command>(), Ok(Command::Decode));
        assert!("x".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_encode() {
        let options =
            Options::try_parse_from(&["huffc", "-v", "-o", "out.huf", "encode", "hello", "world"]).unwrap();
        assert_eq!(options.cmd, Command::Encode);
        assert!(options.verbose);
        assert_eq!(options.output, Some(PathBuf::from("out.huf")));
        assert_eq!(options.input, None);
        assert_eq!(options.message_from_words(), Some(b"hello world\n".to_vec()));
    }

    #[test]
    fn test_parse_decode() {
        let options = Options::try_parse_from(&["huffc", "--input", "out.huf", "d"]).unwrap();
        assert_eq!(options.cmd, Command::Decode);
        assert!(!options.verbose);
        assert_eq!(options.input, Some(PathBuf::from("out.huf")));
        assert_eq!(options.message_from_words(), None);
    }

    #[test]
    fn test_unknown_command() {
        assert!(Options::try_parse_from(&["huffc", "xyz", "hello"]).is_err());
        assert!(Options::try_parse_from(&["huffc"]).is_err());
    }
}
