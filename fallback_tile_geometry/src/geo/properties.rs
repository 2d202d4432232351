use super::GeoValue;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// Feature properties keyed by name. Iteration is sorted by key, which keeps encoding
/// deterministic.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties {
	properties: BTreeMap<String, GeoValue>,
}

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties {
			properties: BTreeMap::new(),
		}
	}
	pub fn insert(&mut self, key: String, value: GeoValue) {
		self.properties.insert(key, value);
	}
	#[must_use]
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.properties.get(key)
	}
	#[must_use]
	pub fn len(&self) -> usize {
		self.properties.len()
	}
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}
	pub fn iter(&self) -> btree_map::Iter<'_, String, GeoValue> {
		self.properties.iter()
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = btree_map::IntoIter<String, GeoValue>;
	fn into_iter(self) -> Self::IntoIter {
		self.properties.into_iter()
	}
}

impl From<Vec<(&str, GeoValue)>> for GeoProperties {
	fn from(value: Vec<(&str, GeoValue)>) -> Self {
		value.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<T: IntoIterator<Item = (String, GeoValue)>>(iter: T) -> Self {
		GeoProperties {
			properties: BTreeMap::from_iter(iter),
		}
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.properties.iter()).finish()
	}
}
