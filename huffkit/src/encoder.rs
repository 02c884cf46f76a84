//! Text to bit-string encoding.

use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};

/// Encode `text` by concatenating each symbol's code in input order.
///
/// The table may come from a caller rather than from [`generate`], so every
/// lookup is checked.
///
/// # Errors
///
/// [`HuffmanError::UnknownSymbol`] for the first symbol of `text` missing
/// from `table`.
///
/// [`generate`]: crate::codes::generate
pub fn encode(text: &str, table: &CodeTable) -> Result<String> {
    let mut bits = String::with_capacity(text.len() * 2);

    for (position, symbol) in text.chars().enumerate() {
        let code = table
            .get(symbol)
            .ok_or_else(|| HuffmanError::unknown_symbol(symbol, position))?;
        bits.push_str(code);
    }

    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::generate;
    use crate::frequency::count;
    use crate::tree::build;

    fn table_for(text: &str) -> CodeTable {
        generate(&build(&count(text)).unwrap())
    }

    #[test]
    fn test_encode_abracadabra() {
        let text = "abracadabra";
        let bits = encode(text, &table_for(text)).unwrap();
        assert_eq!(bits, "01101110100010101101110");
        assert!(bits.len() <= 11 * 3);
    }

    #[test]
    fn test_encode_single_symbol() {
        let bits = encode("aaaa", &table_for("aaaa")).unwrap();
        assert_eq!(bits, "0000");
    }

    #[test]
    fn test_encode_empty_text() {
        assert_eq!(encode("", &table_for("ab")).unwrap(), "");
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let err = encode("abz", &table_for("ab")).unwrap_err();
        assert!(matches!(
            err,
            HuffmanError::UnknownSymbol {
                symbol: 'z',
                position: 2
            }
        ));
    }

    #[test]
    fn test_encode_position_counts_chars_not_bytes() {
        let err = encode("ééx", &table_for("é")).unwrap_err();
        assert!(matches!(
            err,
            HuffmanError::UnknownSymbol { position: 2, .. }
        ));
    }
}
