//! List rendering - the structural `for..of`.
//!
//! [`for_of`] maps a source sequence to keyed fragments, one per element, in
//! source order. Each element gets a fresh [`Iteration`] record carrying
//! positional metadata, and a reconciliation key derived by [`KeyConfig`].
//!
//! # Key derivation
//!
//! Key sources are consulted in strict priority order; the first configured
//! source wins and later ones are never evaluated:
//! 1. [`KeyFlags::USE_INDEX_AS_KEY`] - the element index
//! 2. [`KeyFlags::USE_ITEM_AS_KEY`] - the item's own key form ([`ToKey`])
//! 3. [`KeyAttribute`] - a field accessor or a factory over the record
//! 4. Nothing configured - the key is absent and a warning is logged
//!
//! Keys are for the host's reconciliation only; this module never filters or
//! reorders, so the output length always equals the source length.

use std::collections::HashSet;

use bitflags::bitflags;
use tracing::warn;

use crate::types::{Key, KeyedFragment, ToKey};

// =============================================================================
// Iteration record
// =============================================================================

/// Per-element metadata handed to the content producer.
///
/// Built fresh for every element on every invocation and discarded
/// afterwards; it has no identity beyond the single computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Iteration<'a, T> {
    /// The element, borrowed from the source sequence.
    pub item: &'a T,
    /// Zero-based position of the element.
    pub index: usize,
    /// Source sequence length at the time of computation.
    pub length: usize,
    /// True if the index is odd.
    pub is_odd: bool,
    /// True if the index is even (zero is even).
    pub is_even: bool,
    /// True for the first element.
    pub is_first: bool,
    /// True for the last element.
    pub is_last: bool,
}

impl<'a, T> Iteration<'a, T> {
    /// Build the record for one element of a sequence of `length` elements.
    pub fn new(item: &'a T, index: usize, length: usize) -> Self {
        Self {
            item,
            index,
            length,
            is_odd: index % 2 != 0,
            is_even: index % 2 == 0,
            is_first: index == 0,
            is_last: index + 1 == length,
        }
    }
}

// =============================================================================
// Key derivation
// =============================================================================

bitflags! {
    /// Key-derivation flags.
    ///
    /// Both flags may be set at once; index takes priority over item.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct KeyFlags: u8 {
        /// Use the element index as the key.
        const USE_INDEX_AS_KEY = 1 << 0;
        /// Use the item itself as the key. Only meaningful for item types
        /// with a primitive key form (see [`ToKey`]).
        const USE_ITEM_AS_KEY = 1 << 1;
    }
}

/// Key attribute: a field accessor or a factory.
///
/// The statically typed counterpart of "a field name or a function": a
/// `Field` reads the key off the item, a `Factory` computes it from the full
/// iteration record.
pub enum KeyAttribute<T> {
    /// Factory invoked with the iteration record.
    Factory(Box<dyn Fn(&Iteration<'_, T>) -> Key>),
    /// Accessor reading the key field off the item.
    Field(Box<dyn Fn(&T) -> Key>),
}

/// Key-derivation configuration for [`for_of`].
///
/// Construct with struct literal syntax or one of the shorthand
/// constructors:
///
/// ```
/// use ui_essentials::{Key, KeyConfig, KeyFlags};
///
/// let by_index: KeyConfig<String> = KeyConfig {
///     flags: KeyFlags::USE_INDEX_AS_KEY,
///     ..Default::default()
/// };
/// let by_field: KeyConfig<(i32, String)> = KeyConfig::field(|item: &(i32, String)| Key::from(item.0));
/// ```
pub struct KeyConfig<T> {
    /// Index/item key flags.
    pub flags: KeyFlags,
    /// Key attribute, consulted only when no flag is set.
    pub key_attribute: Option<KeyAttribute<T>>,
}

impl<T> Default for KeyConfig<T> {
    fn default() -> Self {
        Self {
            flags: KeyFlags::empty(),
            key_attribute: None,
        }
    }
}

impl<T> KeyConfig<T> {
    /// No key source; fragments stay unkeyed.
    pub fn none() -> Self {
        Self::default()
    }

    /// Key by element index.
    pub fn index() -> Self {
        Self {
            flags: KeyFlags::USE_INDEX_AS_KEY,
            ..Self::default()
        }
    }

    /// Key by the item itself.
    pub fn item() -> Self {
        Self {
            flags: KeyFlags::USE_ITEM_AS_KEY,
            ..Self::default()
        }
    }

    /// Key by a field read off the item.
    pub fn field(read: impl Fn(&T) -> Key + 'static) -> Self {
        Self {
            key_attribute: Some(KeyAttribute::Field(Box::new(read))),
            ..Self::default()
        }
    }

    /// Key by a factory over the iteration record.
    pub fn factory(factory: impl for<'a> Fn(&Iteration<'a, T>) -> Key + 'static) -> Self {
        Self {
            key_attribute: Some(KeyAttribute::Factory(Box::new(factory))),
            ..Self::default()
        }
    }

    fn has_source(&self) -> bool {
        !self.flags.is_empty() || self.key_attribute.is_some()
    }
}

impl<T: ToKey> KeyConfig<T> {
    /// Derive the key for one iteration record.
    ///
    /// Exactly one source is consulted, in priority order: index flag, item
    /// flag, key attribute. Returns `None` when nothing is configured, or
    /// when the item flag is set but the item type has no key form.
    pub fn resolve(&self, iteration: &Iteration<'_, T>) -> Option<Key> {
        if self.flags.contains(KeyFlags::USE_INDEX_AS_KEY) {
            return Some(Key::Int(iteration.index as i64));
        }
        if self.flags.contains(KeyFlags::USE_ITEM_AS_KEY) {
            let key = iteration.item.to_key();
            if key.is_none() {
                warn!(
                    index = iteration.index,
                    "USE_ITEM_AS_KEY is set but the item type has no key form; fragment left unkeyed"
                );
            }
            return key;
        }
        match &self.key_attribute {
            Some(KeyAttribute::Factory(factory)) => Some(factory(iteration)),
            Some(KeyAttribute::Field(read)) => Some(read(iteration.item)),
            None => None,
        }
    }
}

// =============================================================================
// for_of
// =============================================================================

/// Render a sequence to keyed fragments, one per element, in source order.
///
/// For each element an [`Iteration`] record is built, the content producer is
/// invoked with it, and the result is paired with a key derived per
/// `key_config`. The source is only borrowed and never mutated; there is no
/// filtering, so the output length equals the source length. Duplicate
/// derived keys are reported via `tracing` but still rendered.
///
/// # Arguments
///
/// * `items` - Source sequence; `None` is treated as empty
/// * `children` - Content producer invoked with each iteration record
/// * `key_config` - Key-derivation policy (see [`KeyConfig`])
///
/// # Example
///
/// ```
/// use ui_essentials::{KeyConfig, for_of};
///
/// let fruits = ["apple", "banana", "cherry"];
/// let fragments = for_of(
///     Some(fruits.as_slice()),
///     |iteration| format!("{}. {}", iteration.index + 1, iteration.item),
///     &KeyConfig::item(),
/// );
///
/// assert_eq!(fragments.len(), 3);
/// assert_eq!(fragments[0].fragment, "1. apple");
/// ```
pub fn for_of<T, R, F>(
    items: Option<&[T]>,
    mut children: F,
    key_config: &KeyConfig<T>,
) -> Vec<KeyedFragment<R>>
where
    T: ToKey,
    F: FnMut(&Iteration<'_, T>) -> R,
{
    let items = items.unwrap_or_default();
    let length = items.len();

    if length > 0 && !key_config.has_source() {
        warn!(
            length,
            "for_of invoked without a key source; the host cannot reconcile unkeyed fragments"
        );
    }

    let mut seen_keys: HashSet<Key> = HashSet::new();
    let mut fragments = Vec::with_capacity(length);

    for (index, item) in items.iter().enumerate() {
        let iteration = Iteration::new(item, index, length);
        let key = key_config.resolve(&iteration);

        if let Some(key) = &key {
            // Reported but still rendered: output length must equal input length.
            if !seen_keys.insert(key.clone()) {
                warn!(%key, index, "duplicate key in for_of; keys should be unique");
            }
        }

        let fragment = children(&iteration);
        fragments.push(KeyedFragment { key, fragment });
    }

    fragments
}

// =============================================================================
// Tests
// =============================================================================
