// ABOUTME: Presence-tracking optional value used by write parameters
// ABOUTME: Distinguishes a field the caller left out from one it supplied

use serde::{Deserialize, Deserializer};

/// An optional request or parameter value that remembers whether it was supplied.
///
/// A JSON key that is missing or `null` decodes to [`Field::Absent`]. Any other value,
/// including an empty string, decodes to [`Field::Present`]. Struct fields of this type
/// need `#[serde(default)]` so that a missing key is accepted.
///
/// When a `Field` reaches the persistence layer, `Absent` is written as SQL `NULL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    Absent,
    Present(T),
}

impl<T> Field<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Absent => Field::Absent,
            Field::Present(value) => Field::Present(value),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Absent => Field::Absent,
            Field::Present(value) => Field::Present(f(value)),
        }
    }

    /// Applies a fallible conversion to a present value; absent values pass through.
    pub fn try_map<U, E, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<Field<U>, E> {
        match self {
            Field::Absent => Ok(Field::Absent),
            Field::Present(value) => f(value).map(Field::Present),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }

    /// Borrowed view for binding as a nullable column.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Field::Absent => None,
            Field::Present(value) => Some(value),
        }
    }
}

impl Field<String> {
    pub fn as_deref(&self) -> Option<&str> {
        self.as_option().map(String::as_str)
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Absent,
        }
    }
}

impl<T> From<Field<T>> for Option<T> {
    fn from(value: Field<T>) -> Self {
        match value {
            Field::Present(value) => Some(value),
            Field::Absent => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Field<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Field::from)
    }
}
