use bitstream::BitArray;
use common::HuffError;
use log::{debug, log_enabled, trace, Level};

use crate::tree::Tree;

/// Prefix code of a symbol, the path from the root to its leaf. `false` is a left turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl From<Vec<bool>> for Code {
    fn from(bits: Vec<bool>) -> Self {
        Code { bits }
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in &self.bits {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// symbol to code lookup, `None` for symbols which are not in the tree
#[derive(Debug, Clone)]
pub struct CodeIndex {
    codes: Vec<Option<Code>>,
}

impl CodeIndex {
    #[inline]
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// all symbols with their code, ascending by symbol
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|code| (symbol as u8, code)))
    }

    /// number of bits needed to encode `input`
    pub fn encoded_len(&self, input: &[u8]) -> Result<usize, HuffError> {
        input.iter().try_fold(0, |len, symbol| {
            self.get(*symbol)
                .map(|code| len + code.len())
                .ok_or(HuffError::SymbolNotInTree(*symbol))
        })
    }
}

/// Derives the code of every leaf by walking the tree.
///
/// A tree which is a single leaf has no path, its symbol gets the code `0`.
pub fn build_index(tree: &Tree) -> CodeIndex {
    let mut codes = vec![None; 256];
    if let Some(symbol) = tree.get_root_node().symbol() {
        codes[symbol as usize] = Some(Code::from(vec![false]));
        return CodeIndex { codes };
    }
    tree.walk_tree(&mut |node, path| {
        if let Some(symbol) = node.symbol() {
            codes[symbol as usize] = Some(Code::from(path.to_vec()));
        }
    });
    let index = CodeIndex { codes };
    if log_enabled!(Level::Trace) {
        for (symbol, code) in index.iter() {
            trace!("symbol {} code {}", symbol, code);
        }
    }
    index
}

/// Encodes `input` with the codes from `index`.
///
/// The output length is computed upfront, so the bit array is allocated once.
pub fn encode(index: &CodeIndex, input: &[u8]) -> Result<BitArray, HuffError> {
    let num_bits = index.encoded_len(input)?;
    let mut out = BitArray::new(num_bits);
    let mut pos = 0;
    for symbol in input {
        // every symbol was checked by encoded_len
        let code = index.get(*symbol).ok_or(HuffError::SymbolNotInTree(*symbol))?;
        for bit in code.bits() {
            if *bit {
                out.set(pos);
            }
            pos += 1;
        }
    }
    debug!("encoded {} bytes into {} bits", input.len(), num_bits);
    Ok(out)
}

/// will validate the index to have generated correct prefix properties for all symbols.
/// This validation is rather slow and should not be used in a regular compression execution.
pub fn test_prefix_property(index: &CodeIndex) {
    let codes: Vec<(u8, &Code)> = index.iter().collect();
    for (symbol, code) in &codes {
        assert!(!code.is_empty(), "symbol {} has an empty code", symbol);
        for (other_symbol, other_code) in &codes {
            if symbol != other_symbol && code.is_prefix_of(other_code) {
                panic!(
                    "invalid prefix detected between {} ({}) and {} ({})",
                    symbol, code, other_symbol, other_code
                );
            }
        }
    }
}
