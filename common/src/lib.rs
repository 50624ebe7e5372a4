mod error;
pub mod heap;

use log::debug;

pub use error::HuffError;
pub use heap::{HeapKind, PriorityQueue};

pub const MAX_SYMBOL_VALUE: u32 = u8::MAX as u32;

pub type CountsTable = [usize; MAX_SYMBOL_VALUE as usize + 1];

/// creates a table with the counts of each symbol
#[inline]
pub fn count_simple(input: &[u8]) -> CountsTable {
    let mut counts = [0_usize; 256];

    for byte in input {
        counts[*byte as usize] += 1;
    }
    counts
}

/// number of distinct symbols, i.e. symbols with a count != 0
#[inline]
pub fn get_num_unique_symbols(counts: &CountsTable) -> usize {
    let num_unique = counts.iter().filter(|count| **count != 0).count();
    debug!("unique symbols: {}", num_unique);
    num_unique
}

/// iterates (symbol, count) of all symbols which occur at least once, ordered by symbol value
pub fn symbol_counts(counts: &CountsTable) -> impl Iterator<Item = (u8, usize)> + '_ {
    counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count != 0)
        .map(|(symbol, count)| (symbol as u8, *count))
}
