//! Pair map: the immutable mapping that defines valid matches.
//!
//! A `PairMap` is provided once by the embedding application and never
//! changes afterwards. Construction validates the uniqueness rules the
//! engine relies on; after that, every lookup is infallible.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure while building a [`PairMap`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PairMapError {
    /// The same left-hand label appeared in more than one entry.
    #[error("label '{0}' appears on the left side of more than one entry")]
    DuplicateLeft(String),

    /// The same right-hand label appeared in more than one entry.
    #[error("label '{0}' appears on the right side of more than one entry")]
    DuplicateRight(String),

    /// A label appeared on both sides of the mapping.
    #[error("label '{0}' appears on both sides of the mapping")]
    SideCollision(String),

    /// An entry paired a label with itself.
    #[error("label '{0}' is paired with itself")]
    SelfPair(String),
}

/// Immutable mapping defining which two labels form a match.
///
/// Entries are nominally country → capital, but nothing in the engine
/// depends on which side a label sits on: [`PairMap::is_match`] checks
/// both directions, so a mapping with mixed roles (a capital on the left,
/// its country on the right) plays identically.
///
/// ## Uniqueness rules
///
/// - No left-hand label repeats (map key property, checked on build)
/// - No right-hand label repeats (no two countries share a capital)
/// - No label appears on both sides
/// - No entry pairs a label with itself
///
/// ## Example
///
/// ```
/// use pairmatch::core::PairMap;
///
/// let pairs = PairMap::from_entries([
///     ("Poland", "Warsaw"),
///     ("Norway", "Oslo"),
/// ]).unwrap();
///
/// assert!(pairs.is_match("Poland", "Warsaw"));
/// assert!(pairs.is_match("Warsaw", "Poland"));
/// assert!(!pairs.is_match("Poland", "Oslo"));
/// assert_eq!(pairs.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FxHashMap<String, String>", into = "FxHashMap<String, String>")]
pub struct PairMap {
    forward: FxHashMap<String, String>,
}

impl PairMap {
    /// Build a pair map from (left, right) entries, validating uniqueness.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, PairMapError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut forward = FxHashMap::default();
        for (left, right) in entries {
            let left = left.into();
            let right = right.into();
            if left == right {
                return Err(PairMapError::SelfPair(left));
            }
            if forward.insert(left.clone(), right).is_some() {
                return Err(PairMapError::DuplicateLeft(left));
            }
        }

        let mut seen_right: FxHashSet<&str> = FxHashSet::default();
        for right in forward.values() {
            if !seen_right.insert(right) {
                return Err(PairMapError::DuplicateRight(right.clone()));
            }
        }
        for right in forward.values() {
            if forward.contains_key(right.as_str()) {
                return Err(PairMapError::SideCollision(right.clone()));
            }
        }

        Ok(Self { forward })
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True if the map holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Forward lookup: the right-hand partner of a left-hand label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.forward.get(label).map(String::as_str)
    }

    /// Check whether two labels form a valid pair, in either direction.
    #[must_use]
    pub fn is_match(&self, a: &str, b: &str) -> bool {
        self.get(a) == Some(b) || self.get(b) == Some(a)
    }

    /// Whether a label appears anywhere in the mapping.
    #[must_use]
    pub fn contains_label(&self, label: &str) -> bool {
        self.forward.contains_key(label) || self.forward.values().any(|v| v == label)
    }

    /// All labels, left-hand then right-hand per entry. Iteration order is
    /// unspecified (hash map order); callers shuffle before presenting.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.forward
            .iter()
            .flat_map(|(k, v)| [k.as_str(), v.as_str()])
    }
}

impl TryFrom<FxHashMap<String, String>> for PairMap {
    type Error = PairMapError;

    fn try_from(map: FxHashMap<String, String>) -> Result<Self, Self::Error> {
        Self::from_entries(map)
    }
}

impl From<PairMap> for FxHashMap<String, String> {
    fn from(pairs: PairMap) -> Self {
        pairs.forward
    }
}
