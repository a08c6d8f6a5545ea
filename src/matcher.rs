//! Value matcher: resolves heterogeneous inputs to field order, then packs.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    errors::{CodeSyntaxError, MatchError},
    packer::Packer,
    value::{MapKey, Value},
};

/// Which way a call's inputs address the layout. All inputs of one call must
/// agree on a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputClass {
    Positional,
    Named,
}

/// A collected named value: either a borrowed scalar awaiting coercion or
/// the already-packed result of a sub-layout.
#[derive(Clone, Copy)]
enum Slot<'a> {
    Raw(&'a Value),
    Packed(u64),
}

/// A packer accepting heterogeneous inputs.
///
/// Scalar inputs are consumed positionally, in field order. Map and record
/// inputs are resolved by field name, reassembled into field order and then
/// handed to the inner [Packer]. The layout code is uppercased on
/// construction, so names match case-insensitively.
#[derive(Debug, Clone)]
pub struct ValueMatcher {
    packer: Packer,
}

impl ValueMatcher {
    /// Uppercases and parses `code`, building the inner positional packer.
    pub fn new(code: &str) -> Result<Self, CodeSyntaxError> {
        Ok(ValueMatcher {
            packer: Packer::new(&code.to_uppercase())?,
        })
    }

    /// The positional packer this matcher delegates to.
    pub fn packer(&self) -> &Packer {
        &self.packer
    }

    /// Resolves `inputs` to field order and packs them.
    pub fn pack(&self, inputs: &[Value]) -> Result<u64, MatchError> {
        let slots: Vec<Slot> = match classify(inputs)? {
            InputClass::Positional => inputs.iter().map(Slot::Raw).collect(),
            InputClass::Named => self.resolve(inputs)?,
        };

        let mut values = Vec::with_capacity(slots.len());
        for slot in slots {
            values.push(match slot {
                Slot::Raw(value) => coerce(value)?,
                Slot::Packed(packed) => packed,
            });
        }

        Ok(self.packer.pack(&values)?)
    }

    /// Resolves named inputs into one slot per layout field, in field order.
    ///
    /// Every map entry and record field consumes one name from the expected
    /// set, so supplying a name twice is reported the same way as supplying
    /// an unknown one. Composite record values are packed through the
    /// sub-layout named by their annotation before being slotted.
    fn resolve<'a>(&self, inputs: &'a [Value]) -> Result<Vec<Slot<'a>>, MatchError> {
        let fields = &self.packer.layout().fields;
        let mut expected: BTreeSet<char> = fields.iter().map(|field| field.name).collect();
        let mut collected: BTreeMap<char, Slot<'a>> = BTreeMap::new();

        for input in inputs {
            match input.follow() {
                Value::Map(entries) => {
                    for (key, value) in entries {
                        let letter = match key {
                            MapKey::Char(c) => *c,
                            MapKey::Str(s) => match s.chars().next() {
                                Some(c) => c,
                                None => return Err(MatchError::InvalidKeyType(key.clone())),
                            },
                            other => return Err(MatchError::InvalidKeyType(other.clone())),
                        };
                        if !expected.remove(&canonical(letter)) {
                            return Err(MatchError::InvalidKey(letter));
                        }
                        collected.insert(canonical(letter), Slot::Raw(value));
                    }
                }
                Value::Record(record) => {
                    for field in &record.fields {
                        let letter = match field.name.chars().next() {
                            Some(c) => c,
                            None => {
                                return Err(MatchError::FieldNotExpected {
                                    name: field.name.clone(),
                                });
                            }
                        };
                        if !expected.remove(&letter) {
                            return Err(MatchError::FieldNotExpected {
                                name: field.name.clone(),
                            });
                        }
                        let slot = match field.value.follow() {
                            Value::Map(_) | Value::Record(_) => {
                                let code = match &field.layout {
                                    Some(code) => code,
                                    None => {
                                        return Err(MatchError::NestedWithoutLayout {
                                            name: field.name.clone(),
                                        });
                                    }
                                };
                                let sub = ValueMatcher::new(code)?;
                                Slot::Packed(sub.pack(std::slice::from_ref(&field.value))?)
                            }
                            value => Slot::Raw(value),
                        };
                        collected.insert(letter, slot);
                    }
                }
                _ => return Err(MatchError::Internal),
            }
        }

        if !expected.is_empty() {
            return Err(MatchError::MissingInputs(expected.iter().collect()));
        }

        // Fields sharing one name (a letter reappearing after a gap) all
        // read the same collected value.
        let mut slots = Vec::with_capacity(fields.len());
        for field in fields {
            match collected.get(&field.name) {
                Some(slot) => slots.push(*slot),
                None => return Err(MatchError::Internal),
            }
        }

        Ok(slots)
    }
}

/// Classifies top-level inputs, failing on mixed classes, empty input lists
/// and negative signed scalars.
fn classify(inputs: &[Value]) -> Result<InputClass, MatchError> {
    let mut class = None;

    for input in inputs {
        let input_class = match input.follow() {
            Value::Int(value) => {
                if *value < 0 {
                    return Err(MatchError::NegativeArgument);
                }
                InputClass::Positional
            }
            Value::UInt(_) | Value::Bool(_) => InputClass::Positional,
            Value::Map(_) | Value::Record(_) => InputClass::Named,
            Value::Ref(_) => return Err(MatchError::Internal),
        };
        match class {
            None => class = Some(input_class),
            Some(existing) if existing != input_class => {
                return Err(MatchError::ClassMismatch);
            }
            Some(_) => {}
        }
    }

    class.ok_or(MatchError::NoArguments)
}

/// Coerces a scalar input to the packer's unsigned type: signed values cast
/// by value, booleans become 1 or 0, indirections are followed. A composite
/// here means the named-resolution step failed to reduce it.
fn coerce(value: &Value) -> Result<u64, MatchError> {
    match value.follow() {
        Value::Int(v) => Ok(*v as u64),
        Value::UInt(v) => Ok(*v),
        Value::Bool(v) => Ok(*v as u64),
        _ => Err(MatchError::Internal),
    }
}

/// Uppercases a field letter for case-insensitive matching.
fn canonical(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}
