//! Positional packer: binds a [BitLayout] to ordered `u64` values.

use crate::{
    bits::bits_needed,
    errors::{CodeSyntaxError, PackError},
    layout::BitLayout,
};

/// A packer over an immutable [BitLayout].
///
/// Construction happens once; [Packer::pack] only reads the layout and local
/// temporaries, so a packer can be shared and invoked concurrently.
#[derive(Debug, Clone)]
pub struct Packer {
    layout: BitLayout,
}

impl Packer {
    /// Parses `code` (case-sensitive) and builds a packer over it.
    pub fn new(code: &str) -> Result<Self, CodeSyntaxError> {
        Ok(Packer::from_layout(BitLayout::parse(code)?))
    }

    /// Builds a packer over an already-parsed layout.
    pub fn from_layout(layout: BitLayout) -> Self {
        Packer { layout }
    }

    /// The layout this packer writes.
    pub fn layout(&self) -> &BitLayout {
        &self.layout
    }

    /// Packs one value per field, in field order, into a single integer.
    ///
    /// Fails if the value count does not match the field count exactly, or
    /// if any value does not fit its field's width. The result is the
    /// layout's constant ORed with every value shifted to its field offset.
    pub fn pack(&self, values: &[u64]) -> Result<u64, PackError> {
        let expected = self.layout.fields.len();
        if values.len() > expected {
            return Err(PackError::TooManyValues {
                supplied: values.len(),
                expected,
            });
        } else if values.len() < expected {
            return Err(PackError::TooFewValues {
                supplied: values.len(),
                expected,
            });
        }

        let mut result = self.layout.constant();
        for (index, (field, &value)) in self.layout.fields.iter().zip(values).enumerate() {
            if !field.fits(value) {
                return Err(PackError::Oversized {
                    index,
                    width: field.width,
                    required: bits_needed(value),
                });
            }
            result |= value << field.offset;
        }

        Ok(result)
    }
}
