use std::collections::BTreeMap;

use crate::{
    animation::kind::AnimationType,
    foundation::core::{Plane, Position},
    foundation::error::{TrajectoryError, TrajectoryResult},
    foundation::math::approx_eq,
};

/// One value in a [`ParameterSet`].
///
/// Untagged on the wire so stored parameter bags round-trip as plain JSON.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean flag.
    Bool(bool),
    /// Scalar number.
    Number(f64),
    /// Enum-like string (plane tags, wave shapes, ...).
    Text(String),
    /// A single position.
    Position(Position),
    /// Ordered list of positions.
    Positions(Vec<Position>),
    /// Heterogeneous list.
    List(Vec<ParamValue>),
    /// Nested object.
    Object(BTreeMap<String, ParamValue>),
}

impl ParamValue {
    /// Structural equality with an absolute tolerance on every float.
    pub fn approx_eq(&self, other: &ParamValue, tolerance: f64) -> bool {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => approx_eq(*a, *b, tolerance),
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Position(a), Self::Position(b)) => a.approx_eq(*b, tolerance),
            (Self::Positions(a), Self::Positions(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|(pa, pb)| pa.approx_eq(*pb, tolerance))
            }
            (Self::List(a), Self::List(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|(va, vb)| va.approx_eq(vb, tolerance))
            }
            (Self::Object(a), Self::Object(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, va)| {
                        b.get(k)
                            .is_some_and(|vb| va.approx_eq(vb, tolerance))
                    })
            }
            // An empty position list deserializes as `Positions`, an empty generic list may
            // have been built by hand.
            (Self::Positions(a), Self::List(b)) | (Self::List(b), Self::Positions(a)) => {
                a.is_empty() && b.is_empty()
            }
            _ => false,
        }
    }

    /// Translate every position carried by this value by `delta`.
    ///
    /// Returns `None` for values that carry no position.
    pub fn translated(&self, delta: Position) -> Option<ParamValue> {
        match self {
            Self::Position(p) => Some(Self::Position(*p + delta)),
            Self::Positions(ps) => Some(Self::Positions(ps.iter().map(|p| *p + delta).collect())),
            _ => None,
        }
    }

    /// Representative point of a positional value: the position itself, or the first
    /// element of a position list.
    pub fn leading_position(&self) -> Option<Position> {
        match self {
            Self::Position(p) => Some(*p),
            Self::Positions(ps) => ps.first().copied(),
            _ => None,
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Position> for ParamValue {
    fn from(v: Position) -> Self {
        Self::Position(v)
    }
}

impl From<Vec<Position>> for ParamValue {
    fn from(v: Vec<Position>) -> Self {
        Self::Positions(v)
    }
}

impl From<Plane> for ParamValue {
    fn from(v: Plane) -> Self {
        Self::Text(v.as_str().to_owned())
    }
}

/// Key/value parameter bag of an animation.
///
/// Each [`AnimationType`] reads its own keys; unknown keys are kept untouched so a bag
/// survives edits and type switches without losing data.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(BTreeMap<String, ParamValue>);

impl ParameterSet {
    /// Empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Remove a key.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    /// Raw value lookup.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// True when `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Finite number stored under `key`.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            ParamValue::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Finite position stored under `key`.
    pub fn position(&self, key: &str) -> Option<Position> {
        match self.0.get(key)? {
            ParamValue::Position(p) if p.is_finite() => Some(*p),
            _ => None,
        }
    }

    /// Position list stored under `key`; every element must be finite.
    pub fn positions(&self, key: &str) -> Option<&[Position]> {
        match self.0.get(key)? {
            ParamValue::Positions(ps) if ps.iter().all(|p| p.is_finite()) => Some(ps),
            _ => None,
        }
    }

    /// String stored under `key`.
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean stored under `key`.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Plane tag stored under `key`.
    pub fn plane(&self, key: &str) -> Option<Plane> {
        self.text(key)?.parse().ok()
    }

    /// New bag with every entry of `patch` written over `self`.
    pub fn merged(&self, patch: &ParameterSet) -> ParameterSet {
        let mut out = self.clone();
        for (k, v) in &patch.0 {
            out.0.insert(k.clone(), v.clone());
        }
        out
    }

    /// New bag without engine-internal (`_`-prefixed) keys.
    pub fn without_internal(&self) -> ParameterSet {
        ParameterSet(
            self.0
                .iter()
                .filter(|(k, _)| !k.starts_with('_'))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Typed view over a [`ParameterSet`] for one animation type.
///
/// Required getters fail with [`TrajectoryError::MissingParameter`]; `_or` getters fall back
/// to the given default when the key is absent or malformed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ParamReader<'a> {
    kind: AnimationType,
    set: &'a ParameterSet,
}

impl<'a> ParamReader<'a> {
    pub(crate) fn new(kind: AnimationType, set: &'a ParameterSet) -> Self {
        Self { kind, set }
    }

    fn missing(&self, key: &str) -> TrajectoryError {
        TrajectoryError::missing(self.kind.as_str(), key)
    }

    pub(crate) fn position(&self, key: &str) -> TrajectoryResult<Position> {
        self.set.position(key).ok_or_else(|| self.missing(key))
    }

    pub(crate) fn position_or(&self, key: &str, default: Position) -> Position {
        self.set.position(key).unwrap_or(default)
    }

    pub(crate) fn number(&self, key: &str) -> TrajectoryResult<f64> {
        self.set.number(key).ok_or_else(|| self.missing(key))
    }

    pub(crate) fn number_or(&self, key: &str, default: f64) -> f64 {
        self.set.number(key).unwrap_or(default)
    }

    /// Position list with at least `min_len` elements.
    pub(crate) fn positions(&self, key: &str, min_len: usize) -> TrajectoryResult<Vec<Position>> {
        match self.set.positions(key) {
            Some(ps) if ps.len() >= min_len => Ok(ps.to_vec()),
            _ => Err(self.missing(key)),
        }
    }

    pub(crate) fn plane_or(&self, key: &str, default: Plane) -> Plane {
        self.set.plane(key).unwrap_or(default)
    }

    pub(crate) fn text_or(&self, key: &str, default: &'a str) -> &'a str {
        self.set.text(key).unwrap_or(default)
    }

    pub(crate) fn flag_or(&self, key: &str, default: bool) -> bool {
        self.set.flag(key).unwrap_or(default)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/params.rs"]
mod tests;
