//! Core types for ui-essentials.
//!
//! These types define the boundary with the host framework: keys for list
//! reconciliation, keyed fragments, and the deferred content producer.

use std::fmt;

// =============================================================================
// Producer
// =============================================================================

/// Deferred content producer.
///
/// A zero-argument thunk returning displayable content. Branching components
/// hold producers instead of pre-built values so that unselected branches are
/// never evaluated.
pub type Producer<R> = Box<dyn FnOnce() -> R>;

// =============================================================================
// Key
// =============================================================================

/// Rendering key for list reconciliation.
///
/// Only primitive key forms are allowed: integers and text. The host
/// framework matches fragments across passes by comparing keys, so keys
/// should be unique within one [`for_of`](crate::for_of) invocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Integer key (indices, numeric ids).
    Int(i64),
    /// Text key (string ids, item values).
    Text(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(value) => write!(f, "{value}"),
            Key::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

impl From<char> for Key {
    fn from(value: char) -> Self {
        Key::Text(value.to_string())
    }
}

// =============================================================================
// ToKey
// =============================================================================

/// Key form of a value, used when a list is keyed by its items.
///
/// Types with a primitive key form return `Some`; everything else falls back
/// to the default `None`, which keeps the fragment unkeyed. Item types
/// without a natural key opt in with an empty impl:
///
/// ```ignore
/// struct Todo { id: i32, text: String }
///
/// impl ToKey for Todo {}
/// ```
pub trait ToKey {
    /// The key form of this value, or `None` if it has no primitive key form.
    fn to_key(&self) -> Option<Key> {
        None
    }
}

impl ToKey for String {
    fn to_key(&self) -> Option<Key> {
        Some(Key::Text(self.clone()))
    }
}

impl ToKey for &str {
    fn to_key(&self) -> Option<Key> {
        Some(Key::Text(self.to_string()))
    }
}

impl ToKey for char {
    fn to_key(&self) -> Option<Key> {
        Some(Key::Text(self.to_string()))
    }
}

impl ToKey for bool {
    fn to_key(&self) -> Option<Key> {
        Some(Key::Text(self.to_string()))
    }
}

macro_rules! impl_to_key_for_int {
    ($($int:ty),+) => {
        $(
            impl ToKey for $int {
                fn to_key(&self) -> Option<Key> {
                    Some(Key::Int(*self as i64))
                }
            }
        )+
    };
}

impl_to_key_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, usize);

// =============================================================================
// KeyedFragment
// =============================================================================

/// One rendered fragment paired with its reconciliation key.
///
/// Produced by [`for_of`](crate::for_of), one per source element, in source
/// order. A `None` key means no key source was configured (or the item had no
/// key form); the host will typically warn but can still display the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedFragment<R> {
    /// Reconciliation key, if one could be derived.
    pub key: Option<Key>,
    /// The rendered fragment.
    pub fragment: R,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        assert_eq!(Key::Int(42).to_string(), "42");
        assert_eq!(Key::Text("item-a".into()).to_string(), "item-a");
    }

    #[test]
    fn test_key_from_primitives() {
        assert_eq!(Key::from(3usize), Key::Int(3));
        assert_eq!(Key::from(-7i32), Key::Int(-7));
        assert_eq!(Key::from("id"), Key::Text("id".into()));
        assert_eq!(Key::from('x'), Key::Text("x".into()));
    }

    #[test]
    fn test_to_key_primitives() {
        assert_eq!(5i32.to_key(), Some(Key::Int(5)));
        assert_eq!("apple".to_key(), Some(Key::Text("apple".into())));
        assert_eq!(true.to_key(), Some(Key::Text("true".into())));
    }

    #[test]
    fn test_to_key_defaults_to_none() {
        struct Opaque;
        impl ToKey for Opaque {}

        assert_eq!(
            Opaque.to_key(),
            None,
            "types without a key form should yield no key"
        );
    }
}
