//! Error types for layout parsing, positional packing and value matching.

use thiserror::Error;

use crate::value::MapKey;

/// Errors produced when parsing a layout code into a [crate::layout::BitLayout].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeSyntaxError {
    /// Character is neither `0`, `1`, a letter nor whitespace.
    #[error("illegal character {0:?} in layout code")]
    IllegalCharacter(char),
    /// More than 64 characters remain after whitespace removal.
    #[error("layout code must fit in 64 bits, got {0}")]
    TooLong(usize),
}

/// Errors produced when packing a value slice with a [crate::packer::Packer].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("too few values: got {supplied} for {expected} fields")]
    TooFewValues { supplied: usize, expected: usize },
    #[error("too many values: got {supplied} for {expected} fields")]
    TooManyValues { supplied: usize, expected: usize },
    /// Value does not fit the declared field width. `required` is the bit
    /// count the value actually needs, `ceil(log2(value))`.
    #[error("oversized value for field {index}: field is {width} bits wide but value needs {required} bits")]
    Oversized { index: usize, width: u8, required: u8 },
}

/// Errors produced when resolving heterogeneous inputs with a
/// [crate::matcher::ValueMatcher].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// A top-level scalar input is a negative signed integer.
    #[error("negative argument")]
    NegativeArgument,
    /// Positional and named inputs were mixed in one call.
    #[error("mixed positional and named arguments")]
    ClassMismatch,
    /// The call supplied no inputs at all.
    #[error("no arguments supplied")]
    NoArguments,
    /// A map key is not a character or a non-empty string.
    #[error("invalid key type {0:?}")]
    InvalidKeyType(MapKey),
    /// A map key does not name an unfilled layout field.
    #[error("invalid key {0:?}")]
    InvalidKey(char),
    /// A record field does not name an unfilled layout field.
    #[error("record field {name:?} already filled or not present")]
    FieldNotExpected { name: String },
    /// A composite record field carries no sub-layout code.
    #[error("record field {name:?} is a substructure without a corresponding layout code")]
    NestedWithoutLayout { name: String },
    /// Named inputs left layout fields unresolved; the payload lists their
    /// names in sorted order.
    #[error("missing inputs: {0:?}")]
    MissingInputs(String),
    /// A composite value survived to scalar coercion.
    #[error("internal: composite value reached scalar coercion")]
    Internal,
    #[error(transparent)]
    Code(#[from] CodeSyntaxError),
    #[error(transparent)]
    Pack(#[from] PackError),
}
