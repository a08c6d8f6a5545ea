//! # bitweave
//!
//! A library for assembling unsigned integers from declarative bit-layout
//! codes.
//!
//! A layout code is a string of literal `0`/`1` bits and letters naming
//! variable-width fields: `"1ABBCCCC"` describes an 8-bit value with a
//! literal high bit, a 1-bit field `A`, a 2-bit field `B` and a 4-bit field
//! `C`. Parse a code once, then pack values into it any number of times,
//! either positionally or by field name.
//!
//! ## Example
//!
//! ```
//! use bitweave::matcher::ValueMatcher;
//! use bitweave::packer::Packer;
//! use bitweave::value::Value;
//!
//! let packer = Packer::new("1ABBCCCC").unwrap();
//! assert_eq!(packer.pack(&[1, 3, 15]).unwrap(), 255);
//!
//! let matcher = ValueMatcher::new("1abbcccc").unwrap();
//! let inputs = [Value::Map(vec![
//!     ('A'.into(), Value::UInt(1)),
//!     ('B'.into(), Value::UInt(3)),
//!     ('C'.into(), Value::UInt(15)),
//! ])];
//! assert_eq!(matcher.pack(&inputs).unwrap(), 255);
//! ```

pub mod bits;
pub mod errors;
pub mod field;
pub mod layout;
pub mod matcher;
pub mod packer;
#[cfg(feature = "serde")]
pub mod serde;
pub mod value;
