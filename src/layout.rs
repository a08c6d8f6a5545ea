//! Layout: a parsed bit-layout code, the ordered fields plus the constant
//! formed by its literal bits.

use crate::{errors::CodeSyntaxError, field::Field};

/// A parsed layout code: total width, the constant with all literal bits set
/// and the named fields in first-appearance order. Use [BitLayout::parse] to
/// build one, then hand it to a [crate::packer::Packer].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitLayout {
    width: usize,
    constant: u64,
    /// Fields in the order they first appear in the code.
    pub fields: Vec<Field>,
}

impl BitLayout {
    /// Parses a layout code. Whitespace is stripped and does not occupy a
    /// bit position. Fails if more than 64 characters remain, or if a
    /// character is neither `0`, `1` nor a letter.
    ///
    /// Each character owns one bit position, counted down from `len - 1` for
    /// the leftmost character. A run of identical letters forms one field
    /// whose offset is the lowest position of the run. A letter reappearing
    /// after a gap starts a new field under the same name; addressing such a
    /// layout by name fills every field with that name from one value.
    pub fn parse(code: &str) -> Result<Self, CodeSyntaxError> {
        let stripped: Vec<char> = code.chars().filter(|c| !c.is_whitespace()).collect();
        if stripped.len() > 64 {
            return Err(CodeSyntaxError::TooLong(stripped.len()));
        }

        let mut constant = 0u64;
        let mut fields: Vec<Field> = Vec::new();
        let mut prev = '0';

        for (i, &ch) in stripped.iter().enumerate() {
            let position = (stripped.len() - 1 - i) as u8;
            match ch {
                '0' => {}
                '1' => constant |= 1u64 << position,
                ch if ch.is_alphabetic() => match fields.last_mut() {
                    Some(field) if ch == prev => {
                        field.width += 1;
                        field.offset = position;
                    }
                    _ => fields.push(Field {
                        name: ch,
                        width: 1,
                        offset: position,
                    }),
                },
                ch => return Err(CodeSyntaxError::IllegalCharacter(ch)),
            }
            prev = ch;
        }

        Ok(BitLayout {
            width: stripped.len(),
            constant,
            fields,
        })
    }

    /// Total layout width in bits.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Constant with the code's literal bits set.
    pub fn constant(&self) -> u64 {
        self.constant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overshift_regression() {
        let layout = BitLayout::parse("1AA").unwrap();
        assert_eq!(layout.fields[0].offset, 0);
    }

    #[test]
    fn test_parse_fields_and_constant() {
        let layout = BitLayout::parse("1ABBCCCC").unwrap();
        assert_eq!(layout.width(), 8);
        assert_eq!(layout.constant(), 0b1000_0000);
        assert_eq!(
            layout.fields,
            vec![
                Field {
                    name: 'A',
                    width: 1,
                    offset: 6
                },
                Field {
                    name: 'B',
                    width: 2,
                    offset: 4
                },
                Field {
                    name: 'C',
                    width: 4,
                    offset: 0
                },
            ]
        );
    }

    #[test]
    fn test_whitespace_is_stripped() {
        let layout = BitLayout::parse(" 1 AB\tB1 ").unwrap();
        assert_eq!(layout, BitLayout::parse("1ABB1").unwrap());
        assert_eq!(layout.width(), 5);
    }

    #[test]
    fn test_empty_code() {
        let layout = BitLayout::parse("").unwrap();
        assert_eq!(layout.width(), 0);
        assert_eq!(layout.constant(), 0);
        assert!(layout.fields.is_empty());
    }

    #[test]
    fn test_field_order_is_first_appearance() {
        let layout = BitLayout::parse("ZZA").unwrap();
        assert_eq!(layout.fields[0].name, 'Z');
        assert_eq!(layout.fields[1].name, 'A');
    }

    #[test]
    fn test_gap_starts_new_field() {
        let layout = BitLayout::parse("A0A").unwrap();
        assert_eq!(
            layout.fields,
            vec![
                Field {
                    name: 'A',
                    width: 1,
                    offset: 2
                },
                Field {
                    name: 'A',
                    width: 1,
                    offset: 0
                },
            ]
        );
    }

    #[test]
    fn test_case_sensitive_runs() {
        let layout = BitLayout::parse("Aa").unwrap();
        assert_eq!(layout.fields.len(), 2);
    }

    #[test]
    fn test_code_longer_than_64_bits() {
        let code = "A".repeat(65);
        assert_eq!(
            BitLayout::parse(&code).unwrap_err(),
            CodeSyntaxError::TooLong(65)
        );
    }

    #[test]
    fn test_64_bit_code_is_accepted() {
        let layout = BitLayout::parse(&"A".repeat(64)).unwrap();
        assert_eq!(
            layout.fields,
            vec![Field {
                name: 'A',
                width: 64,
                offset: 0
            }]
        );
    }

    #[test]
    fn test_illegal_character() {
        assert_eq!(
            BitLayout::parse(";").unwrap_err(),
            CodeSyntaxError::IllegalCharacter(';')
        );
    }
}
