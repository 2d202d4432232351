use crate::{GeoProperties, GeoValue};
use anyhow::{Context, Result, anyhow, ensure};
use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// An indexed table: entries keep the order in which they were first added.
#[derive(Clone, PartialEq)]
pub struct VTLPMap<T>
where
	T: Clone + Eq + Hash,
{
	pub list: Vec<T>,
	map: HashMap<T, u32>,
}

impl<T> VTLPMap<T>
where
	T: Clone + Debug + Eq + Hash,
{
	#[must_use]
	pub fn new() -> VTLPMap<T> {
		VTLPMap {
			list: Vec::new(),
			map: HashMap::new(),
		}
	}

	/// Returns the index of `entry`, appending it first if it is new.
	pub fn add(&mut self, entry: T) -> u32 {
		if let Some(index) = self.map.get(&entry) {
			return *index;
		}
		let index = self.list.len() as u32;
		self.map.insert(entry.clone(), index);
		self.list.push(entry);
		index
	}

	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
		self.list.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.list.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}

	pub fn get(&self, id: u32) -> Result<&T> {
		self
			.list
			.get(id as usize)
			.ok_or_else(|| anyhow!("id '{id}' not found in a table of {} entries", self.list.len()))
	}
}

impl<T: Clone + Debug + Eq + Hash> Default for VTLPMap<T> {
	fn default() -> VTLPMap<T> {
		VTLPMap::new()
	}
}

impl<T> Debug for VTLPMap<T>
where
	T: Clone + Debug + Eq + Hash,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.list).finish()
	}
}

/// The key and value tables of a layer.
///
/// Tag ids are pairs of indices into these tables. Both tables grow in first-seen order, so
/// encoding the same features twice yields identical tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyManager {
	pub key: VTLPMap<String>,
	pub val: VTLPMap<GeoValue>,
}

impl PropertyManager {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_key(&mut self, key: String) -> u32 {
		self.key.add(key)
	}

	pub fn add_val(&mut self, value: GeoValue) -> u32 {
		self.val.add(value)
	}

	pub fn iter_key(&self) -> impl Iterator<Item = &String> + '_ {
		self.key.iter()
	}

	pub fn iter_val(&self) -> impl Iterator<Item = &GeoValue> + '_ {
		self.val.iter()
	}

	pub fn encode_tag_ids(&mut self, properties: GeoProperties) -> Vec<u32> {
		let mut tag_ids: Vec<u32> = Vec::with_capacity(properties.len() * 2);

		for (key, val) in properties {
			tag_ids.push(self.key.add(key));
			tag_ids.push(self.val.add(val));
		}

		tag_ids
	}

	pub fn decode_tag_ids(&self, tag_ids: &[u32]) -> Result<GeoProperties> {
		ensure!(tag_ids.len().is_multiple_of(2), "Tag IDs must be even");
		let mut properties = GeoProperties::new();

		for pair in tag_ids.chunks_exact(2) {
			properties.insert(
				self.key.get(pair[0]).context("Failed to get property key")?.to_owned(),
				self.val.get(pair[1]).context("Failed to get property value")?.clone(),
			);
		}
		Ok(properties)
	}
}
