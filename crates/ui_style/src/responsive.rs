//! Single and breakpoint-keyed prop values.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Breakpoint;

/// Breakpoint-keyed values kept in insertion (cascade) order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Responsive<T> {
    entries: Vec<(Breakpoint, T)>,
}

impl<T> Default for Responsive<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Responsive<T> {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value for `breakpoint`, replacing an existing entry in place.
    pub fn set(&mut self, breakpoint: Breakpoint, value: T) {
        match self.entries.iter_mut().find(|(bp, _)| *bp == breakpoint) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((breakpoint, value)),
        }
    }

    /// Builder form of [`Responsive::set`].
    pub fn at(mut self, breakpoint: Breakpoint, value: T) -> Self {
        self.set(breakpoint, value);
        self
    }

    /// Builder shorthand for the unprefixed entry.
    pub fn base(self, value: T) -> Self {
        self.at(Breakpoint::Base, value)
    }

    /// Value registered for `breakpoint`, if any.
    pub fn get(&self, breakpoint: Breakpoint) -> Option<&T> {
        self.entries
            .iter()
            .find(|(bp, _)| *bp == breakpoint)
            .map(|(_, value)| value)
    }

    /// Entries in cascade order.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, &T)> {
        self.entries.iter().map(|(bp, value)| (*bp, value))
    }

    /// Number of breakpoints with a value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no breakpoint has a value.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> FromIterator<(Breakpoint, T)> for Responsive<T> {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, T)>>(iter: I) -> Self {
        let mut out = Self::new();
        for (bp, value) in iter {
            out.set(bp, value);
        }
        out
    }
}

impl<T: Serialize> Serialize for Responsive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (bp, value) in &self.entries {
            map.serialize_entry(bp, value)?;
        }
        map.end()
    }
}

struct ResponsiveVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ResponsiveVisitor<T> {
    type Value = Responsive<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from breakpoint to value")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut out = Responsive::new();
        while let Some((bp, value)) = access.next_entry::<Breakpoint, T>()? {
            out.set(bp, value);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Responsive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ResponsiveVisitor(PhantomData))
    }
}

/// A prop that is either one value or a breakpoint mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue<T> {
    /// Same value at every width.
    Single(T),
    /// Value per breakpoint.
    Responsive(Responsive<T>),
}

impl<T> PropValue<T> {
    /// Maps every carried value to a class and applies breakpoint prefixes.
    ///
    /// Values for which `to_class` returns `None` are dropped.
    pub fn classes(&self, mut to_class: impl FnMut(&T) -> Option<String>) -> Vec<String> {
        match self {
            Self::Single(value) => to_class(value).into_iter().collect(),
            Self::Responsive(map) => map
                .iter()
                .filter_map(|(bp, value)| to_class(value).map(|class| bp.apply(class)))
                .collect(),
        }
    }
}

impl<T> From<Responsive<T>> for PropValue<T> {
    fn from(value: Responsive<T>) -> Self {
        Self::Responsive(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SpaceToken;

    #[test]
    fn set_replaces_existing_breakpoint_in_place() {
        let map = Responsive::new()
            .base(1)
            .at(Breakpoint::Md, 2)
            .at(Breakpoint::Base, 3);
        let entries: Vec<_> = map.iter().map(|(bp, v)| (bp, *v)).collect();
        assert_eq!(entries, vec![(Breakpoint::Base, 3), (Breakpoint::Md, 2)]);
    }

    #[test]
    fn deserialized_map_keeps_document_order() {
        let map: Responsive<SpaceToken> =
            serde_json::from_str(r#"{"lg":"xl","base":"sm","md":"lg"}"#).expect("map");
        let order: Vec<_> = map.iter().map(|(bp, _)| bp).collect();
        assert_eq!(order, vec![Breakpoint::Lg, Breakpoint::Base, Breakpoint::Md]);
    }

    #[test]
    fn prop_value_accepts_scalar_or_map() {
        let single: PropValue<SpaceToken> = serde_json::from_str(r#""md""#).expect("single");
        assert_eq!(single, PropValue::Single(SpaceToken::Md));

        let map: PropValue<SpaceToken> =
            serde_json::from_str(r#"{"base":"sm","md":"lg"}"#).expect("map");
        assert_eq!(
            map,
            PropValue::Responsive(
                Responsive::new()
                    .base(SpaceToken::Sm)
                    .at(Breakpoint::Md, SpaceToken::Lg)
            )
        );
    }

    #[test]
    fn unknown_breakpoint_is_rejected() {
        let err = serde_json::from_str::<Responsive<SpaceToken>>(r#"{"tv":"sm"}"#);
        assert!(err.is_err());
    }
}
