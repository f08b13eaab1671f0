//! Identifier management using string interning.
//!
//! Every diagram item (shape or group) and every diagram is addressed by an
//! [`Id`]. Shapes and groups share a single key space, so an [`Id`] alone is
//! enough to resolve any item of a [`Diagram`](crate::diagram::Diagram).

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner backing every [`Id`].
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Stable identifier of a diagram item.
///
/// Ids are cheap to copy, hash and compare, which makes them suitable keys
/// for the lookup tables kept by the reconciler.
///
/// # Examples
///
/// ```
/// use draftboard_core::identifier::Id;
///
/// let button = Id::new("button-1");
/// let same: Id = "button-1".into();
///
/// assert_eq!(button, same);
/// assert_eq!(button, "button-1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from its string representation.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Creates a numbered identifier such as `shape-3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use draftboard_core::identifier::Id;
    ///
    /// assert_eq!(Id::numbered("shape", 3), "shape-3");
    /// ```
    pub fn numbered(prefix: &str, idx: usize) -> Self {
        Self::new(&format!("{prefix}-{idx}"))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = with_interner(|interner| {
            interner
                .resolve(self.0)
                .map(str::to_owned)
                .expect("Symbol should exist in interner")
        });
        f.write_str(&value)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(other))
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("rect");
        let id2 = Id::new("rect");
        let id3 = Id::new("label");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "rect");
    }

    #[test]
    fn test_numbered() {
        let id1 = Id::numbered("shape", 0);
        let id2 = Id::numbered("shape", 1);

        assert_ne!(id1, id2);
        assert_eq!(id1, Id::new("shape-0"));
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("display_test");
        assert_eq!(format!("{id}"), "display_test");
    }

    #[test]
    fn test_hash_and_eq() {
        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_partial_eq_str() {
        let id = Id::new("group-1");

        assert!(id == "group-1");
        assert!(id != "group");

        let empty = Id::new("");
        assert!(empty == "");
    }
}
