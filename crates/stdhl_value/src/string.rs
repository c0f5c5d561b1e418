//! Text values: a `StringLayout` payload behind a non-trivial `Value`.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::AddAssign;

use crate::{Layout, Value};

/// Heap payload holding text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StringLayout {
    text: String,
}

impl StringLayout {
    pub fn new(text: impl Into<String>) -> Self {
        StringLayout { text: text.into() }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Concatenate another payload's text onto this one, in place.
    pub fn append(&mut self, other: &StringLayout) {
        self.text.push_str(&other.text);
    }
}

impl Layout for StringLayout {
    fn clone_layout(&self) -> Box<dyn Layout> {
        Box::new(self.clone())
    }

    fn kind(&self) -> &'static str {
        "string"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A string value.
///
/// Unlike [`Value`], equality and hashing look at the text, not at payload
/// identity. An undefined string equals only another undefined string.
#[derive(Clone, Debug, Default)]
pub struct StringValue(Value);

impl StringValue {
    /// A defined string holding `text`.
    pub fn new(text: impl Into<String>) -> Self {
        StringValue(Value::with_layout(StringLayout::new(text)))
    }

    /// A string without a payload.
    pub const fn undefined() -> Self {
        StringValue(Value::undefined())
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        self.0.defined()
    }

    /// The payload, `None` when undefined.
    pub fn layout(&self) -> Option<&StringLayout> {
        self.0.downcast_ref()
    }

    /// The text, `None` when undefined.
    pub fn as_str(&self) -> Option<&str> {
        self.layout().map(StringLayout::as_str)
    }

    #[inline]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    #[inline]
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Append plain text.
    ///
    /// # Panics
    ///
    /// If this string is undefined.
    #[track_caller]
    pub fn push_str(&mut self, text: &str) {
        self.layout_mut().append(&StringLayout::new(text));
    }

    #[track_caller]
    fn layout_mut(&mut self) -> &mut StringLayout {
        match self.0.downcast_mut() {
            Some(layout) => layout,
            None => panic!("cannot append to an undefined string"),
        }
    }
}

impl AddAssign<&StringValue> for StringValue {
    /// Concatenate `rhs` onto `self`.
    ///
    /// # Panics
    ///
    /// If either operand is undefined.
    #[track_caller]
    fn add_assign(&mut self, rhs: &StringValue) {
        let Some(rhs) = rhs.layout() else {
            panic!("cannot append an undefined string");
        };
        self.layout_mut().append(rhs);
    }
}

impl PartialEq for StringValue {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for StringValue {}

impl Hash for StringValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for StringValue {
    /// The text; an undefined string renders as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or_default())
    }
}

impl From<&str> for StringValue {
    fn from(text: &str) -> Self {
        StringValue::new(text)
    }
}

impl From<String> for StringValue {
    fn from(text: String) -> Self {
        StringValue::new(text)
    }
}

impl TryFrom<Value> for StringValue {
    type Error = Value;

    /// Accepts undefined values and values owning a `StringLayout`.
    fn try_from(value: Value) -> Result<Self, Value> {
        let accepted =
            !value.trivial() && value.ptr().map_or(true, |payload| payload.is::<StringLayout>());
        if accepted {
            Ok(StringValue(value))
        } else {
            Err(value)
        }
    }
}
