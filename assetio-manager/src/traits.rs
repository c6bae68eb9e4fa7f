//! Trait sets and trait property data.
//!
//! A trait is a named schema of properties a manager can resolve for an
//! entity. `TraitsData` holds the resolved values keyed by trait id and
//! then by property key.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A set of trait ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitSet(BTreeSet<String>);

impl TraitSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, trait_id: impl Into<String>) -> bool {
        self.0.insert(trait_id.into())
    }

    #[must_use]
    pub fn contains(&self, trait_id: &str) -> bool {
        self.0.contains(trait_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TraitSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A single trait property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl PropertyValue {
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Resolved trait properties for one entity.
///
/// A trait may be present with no properties; that still counts as the
/// entity being imbued with the trait.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitsData(BTreeMap<String, BTreeMap<String, PropertyValue>>);

impl TraitsData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trait(&mut self, trait_id: impl Into<String>) {
        self.0.entry(trait_id.into()).or_default();
    }

    #[must_use]
    pub fn has_trait(&self, trait_id: &str) -> bool {
        self.0.contains_key(trait_id)
    }

    /// The ids of every trait this data is imbued with.
    #[must_use]
    pub fn trait_set(&self) -> TraitSet {
        self.0.keys().cloned().collect()
    }

    /// Sets a property, imbuing the trait if it was missing.
    pub fn set_trait_property(
        &mut self,
        trait_id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<PropertyValue>,
    ) {
        self.0
            .entry(trait_id.into())
            .or_default()
            .insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get_trait_property(&self, trait_id: &str, key: &str) -> Option<&PropertyValue> {
        self.0.get(trait_id).and_then(|props| props.get(key))
    }

    /// Applies `f` to every string property in place.
    pub fn for_each_str_mut(&mut self, mut f: impl FnMut(&mut String)) {
        for value in self.0.values_mut().flat_map(BTreeMap::values_mut) {
            if let PropertyValue::Str(s) = value {
                f(s);
            }
        }
    }

    /// Copies out only the traits named in `traits`.
    #[must_use]
    pub fn filtered(&self, traits: &TraitSet) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(id, _)| traits.contains(id))
                .map(|(id, props)| (id.clone(), props.clone()))
                .collect(),
        )
    }
}

/// View over the `content.LocatableContent` trait.
#[derive(Debug, Clone, Copy)]
pub struct LocatableContent<'a> {
    data: &'a TraitsData,
}

impl<'a> LocatableContent<'a> {
    pub const ID: &'static str = "content.LocatableContent";
    pub const LOCATION: &'static str = "location";

    #[must_use]
    pub fn new(data: &'a TraitsData) -> Self {
        Self { data }
    }

    #[must_use]
    pub fn is_imbued(&self) -> bool {
        self.data.has_trait(Self::ID)
    }

    /// The `location` URL, if set to a string.
    #[must_use]
    pub fn location(&self) -> Option<&'a str> {
        self.data
            .get_trait_property(Self::ID, Self::LOCATION)
            .and_then(PropertyValue::as_str)
    }

    #[must_use]
    pub fn trait_set() -> TraitSet {
        std::iter::once(Self::ID).collect()
    }

    pub fn set_location(data: &mut TraitsData, location: impl Into<String>) {
        data.set_trait_property(Self::ID, Self::LOCATION, location.into());
    }
}
