//! Type-safe, efficient identifiers for transit entities.
//!
//! All identifiers use Arc<str> for cheap cloning and minimal memory overhead.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

macro_rules! impl_identifier {
    ($name:ident) => {
        #[derive(Clone, Debug)]
        pub struct $name(Arc<str>);

        impl $name {
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
                String::deserialize(deserializer).map(Self::from)
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.0)
            }
        }
    };
}

impl_identifier!(StationIdentifier);
impl_identifier!(RouteIdentifier);
impl_identifier!(ShapeIdentifier);

impl ShapeIdentifier {
    /// Branch number when this id is `route` followed by a decimal suffix
    /// (`A1`, `A2` for route `A`).
    pub fn variant_of(&self, route: &RouteIdentifier) -> Option<u32> {
        let suffix = self.as_str().strip_prefix(route.as_str())?;
        if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        suffix.parse().ok()
    }
}

impl From<&RouteIdentifier> for ShapeIdentifier {
    fn from(route: &RouteIdentifier) -> Self {
        Self(route.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_equality() {
        let id1 = StationIdentifier::new("A27");
        let id2 = StationIdentifier::new("A27");
        let id3 = id1.clone();

        assert_eq!(id1, id2);
        assert_eq!(id1, id3);
        assert!(Arc::ptr_eq(&id1.0, &id3.0)); // Clone shares Arc
    }

    #[test]
    fn test_identifier_hash() {
        use std::collections::HashMap;

        let mut map = HashMap::new();
        map.insert(StationIdentifier::new("test"), 42);

        assert_eq!(map.get(&StationIdentifier::new("test")), Some(&42));
    }

    #[test]
    fn test_identifier_display() {
        let id = RouteIdentifier::new("6X");
        assert_eq!(format!("{}", id), "6X");
    }

    #[test]
    fn test_shape_variant_suffix() {
        let route = RouteIdentifier::new("A");
        assert_eq!(ShapeIdentifier::new("A1").variant_of(&route), Some(1));
        assert_eq!(ShapeIdentifier::new("A12").variant_of(&route), Some(12));
        assert_eq!(ShapeIdentifier::new("A").variant_of(&route), None);
        assert_eq!(ShapeIdentifier::new("AX").variant_of(&route), None);
        assert_eq!(ShapeIdentifier::new("B1").variant_of(&route), None);
    }

    #[test]
    fn test_shape_id_from_route() {
        let route = RouteIdentifier::new("7");
        assert_eq!(ShapeIdentifier::from(&route), ShapeIdentifier::new("7"));
    }
}
