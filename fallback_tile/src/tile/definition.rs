//! Declarative layer descriptions.
//!
//! [`StaticLayer`] and [`StaticFeature`] hold the literal tables compiled into the binary.
//! [`LayerDefinition`] and [`FeatureDefinition`] are their owned counterparts, produced from the static
//! tables, by the stripe generator or by deserializing a YAML layer table.

use anyhow::{Context, Result};
use fallback_tile_geometry::{GeoFeature, GeoProperties, GeoValue, parse_wkt, vector_tile::VectorTileLayer};
use serde::Deserialize;
use std::{borrow::Cow, collections::BTreeMap};

/// A scalar property value as written in a layer table.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PropertyValue {
	Bool(bool),
	UInt(u64),
	Int(i64),
	Double(f64),
	String(Cow<'static, str>),
}

impl From<&PropertyValue> for GeoValue {
	fn from(value: &PropertyValue) -> Self {
		match value {
			PropertyValue::Bool(v) => GeoValue::Bool(*v),
			PropertyValue::UInt(v) => GeoValue::UInt(*v),
			PropertyValue::Int(v) => GeoValue::from(*v),
			PropertyValue::Double(v) => GeoValue::Double(*v),
			PropertyValue::String(v) => GeoValue::String(v.to_string()),
		}
	}
}

impl From<&'static str> for PropertyValue {
	fn from(value: &'static str) -> Self {
		PropertyValue::String(Cow::Borrowed(value))
	}
}

impl From<u64> for PropertyValue {
	fn from(value: u64) -> Self {
		PropertyValue::UInt(value)
	}
}

/// A layer compiled into the binary.
#[derive(Debug)]
pub struct StaticLayer {
	pub name: &'static str,
	pub features: &'static [StaticFeature],
}

#[derive(Debug)]
pub struct StaticFeature {
	pub geometry: &'static str,
	pub properties: &'static [(&'static str, PropertyValue)],
}

/// A named layer and its features, in the order they are encoded.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LayerDefinition {
	pub name: String,
	#[serde(default)]
	pub features: Vec<FeatureDefinition>,
}

/// A WKT geometry in tile coordinates plus its properties.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FeatureDefinition {
	pub geometry: String,
	#[serde(default)]
	pub properties: BTreeMap<String, PropertyValue>,
}

impl LayerDefinition {
	#[must_use]
	pub fn new(name: &str, features: Vec<FeatureDefinition>) -> Self {
		Self {
			name: name.to_string(),
			features,
		}
	}

	/// Parses every feature and encodes the layer.
	pub fn to_layer(&self, extent: u32, version: u32) -> Result<VectorTileLayer> {
		let features = self
			.features
			.iter()
			.enumerate()
			.map(|(index, feature)| {
				feature
					.to_geo_feature()
					.with_context(|| format!("Failed to parse feature #{index} of layer \"{}\"", self.name))
			})
			.collect::<Result<Vec<GeoFeature>>>()?;

		VectorTileLayer::from_features(self.name.clone(), features, extent, version)
	}
}

impl FeatureDefinition {
	#[must_use]
	pub fn new(geometry: impl Into<String>) -> Self {
		Self {
			geometry: geometry.into(),
			properties: BTreeMap::new(),
		}
	}

	#[must_use]
	pub fn with_property(mut self, key: &str, value: impl Into<PropertyValue>) -> Self {
		self.properties.insert(key.to_string(), value.into());
		self
	}

	pub fn to_geo_feature(&self) -> Result<GeoFeature> {
		let geometry = parse_wkt(&self.geometry)?;
		let mut feature = GeoFeature::new(geometry);
		feature.set_properties(
			self
				.properties
				.iter()
				.map(|(key, value)| (key.clone(), GeoValue::from(value)))
				.collect::<GeoProperties>(),
		);
		Ok(feature)
	}
}

impl From<&StaticLayer> for LayerDefinition {
	fn from(layer: &StaticLayer) -> Self {
		LayerDefinition::new(layer.name, layer.features.iter().map(FeatureDefinition::from).collect())
	}
}

impl From<&StaticFeature> for FeatureDefinition {
	fn from(feature: &StaticFeature) -> Self {
		Self {
			geometry: feature.geometry.to_string(),
			properties: feature
				.properties
				.iter()
				.map(|(key, value)| ((*key).to_string(), value.clone()))
				.collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use fallback_tile_geometry::Geometry;
	use pretty_assertions::assert_eq;

	static TABLE: StaticLayer = StaticLayer {
		name: "marks",
		features: &[StaticFeature {
			geometry: "POINT(1 2)",
			properties: &[("kind", PropertyValue::String(Cow::Borrowed("dot"))), ("rank", PropertyValue::UInt(3))],
		}],
	};

	#[test]
	fn from_static_table() {
		let layer = LayerDefinition::from(&TABLE);
		assert_eq!(
			layer,
			LayerDefinition::new(
				"marks",
				vec![FeatureDefinition::new("POINT(1 2)").with_property("kind", "dot").with_property("rank", 3u64)]
			)
		);
	}

	#[test]
	fn to_geo_feature() -> Result<()> {
		let feature = FeatureDefinition::new("POINT(1 2)")
			.with_property("kind", "dot")
			.with_property("rank", 3u64)
			.to_geo_feature()?;
		assert_eq!(feature.geometry, Geometry::new_point([1, 2]));
		assert_eq!(feature.properties.get("kind"), Some(&GeoValue::from("dot")));
		assert_eq!(feature.properties.get("rank"), Some(&GeoValue::UInt(3)));
		Ok(())
	}

	#[test]
	fn to_layer_keeps_feature_order() -> Result<()> {
		let layer = LayerDefinition::new(
			"lines",
			vec![
				FeatureDefinition::new("LINESTRING(0 0, 10 10)"),
				FeatureDefinition::new("LINESTRING(5 5, 6 6, 7 7)"),
			],
		);
		let features = layer.to_layer(4096, 2)?.to_features()?;
		assert_eq!(features[0].geometry, Geometry::new_multi_line_string(&[[[0, 0], [10, 10]]]));
		assert_eq!(features[1].geometry, Geometry::new_multi_line_string(&[[[5, 5], [6, 6], [7, 7]]]));
		Ok(())
	}

	#[test]
	fn to_layer_reports_broken_feature() {
		let layer = LayerDefinition::new(
			"broken",
			vec![FeatureDefinition::new("POINT(1 1)"), FeatureDefinition::new("POINT(1 1")],
		);
		let error = layer.to_layer(4096, 2).unwrap_err();
		assert_eq!(error.to_string(), "Failed to parse feature #1 of layer \"broken\"");
	}

	#[test]
	fn property_values_convert() {
		assert_eq!(GeoValue::from(&PropertyValue::Int(-1)), GeoValue::Int(-1));
		assert_eq!(GeoValue::from(&PropertyValue::Int(3)), GeoValue::UInt(3));
		assert_eq!(GeoValue::from(&PropertyValue::Double(0.5)), GeoValue::Double(0.5));
		assert_eq!(GeoValue::from(&PropertyValue::Bool(true)), GeoValue::Bool(true));
		assert_eq!(GeoValue::from(&PropertyValue::from("x")), GeoValue::from("x"));
	}
}
