use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffError {
    #[error("priority queue is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },
    #[error("input is empty")]
    EmptyInput,
    #[error("invalid tree format: {0}")]
    InvalidTreeFormat(String),
    #[error("malformed bitstream: {0}")]
    MalformedBitstream(String),
    #[error("symbol {0} has no code in the tree")]
    SymbolNotInTree(u8),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
