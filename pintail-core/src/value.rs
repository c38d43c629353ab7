//! Boundary values exchanged with the script interpreter
//!
//! The interpreter boxes everything; this enum is the subset the bindings
//! care about. Anything that is not an integer fails the integer-argument
//! check, which is what drives the benign-no-op behavior on bad calls.

/// A script value at the binding boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Value<'a> {
    /// No value ("nil")
    Nil,
    /// Success with nothing to return (the interpreter sees the receiver)
    Unit,
    /// Integer
    Int(i64),
    /// Boolean
    Bool(bool),
    /// Text
    Str(&'a str),
}

impl<'a> Value<'a> {
    /// The value as an integer, if it is one
    ///
    /// Only [`Value::Int`] passes; booleans and numeric-looking strings do
    /// not coerce, matching the interpreter's fixnum check.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Whether this is the nil value
    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }
}

impl<'a> From<i64> for Value<'a> {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}
