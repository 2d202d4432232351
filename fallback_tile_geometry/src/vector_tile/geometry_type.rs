use crate::Geometry;

/// Geometry type as stored in field 3 of a feature.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum GeomType {
	#[default]
	Unknown = 0,
	MultiPoint = 1,
	MultiLineString = 2,
	MultiPolygon = 3,
}

impl GeomType {
	#[must_use]
	pub fn as_u64(&self) -> u64 {
		*self as u64
	}
}

impl From<u64> for GeomType {
	fn from(value: u64) -> Self {
		match value {
			1 => GeomType::MultiPoint,
			2 => GeomType::MultiLineString,
			3 => GeomType::MultiPolygon,
			_ => GeomType::Unknown,
		}
	}
}

impl From<&Geometry> for GeomType {
	fn from(geometry: &Geometry) -> Self {
		use Geometry::*;
		match geometry {
			Point(_) | MultiPoint(_) => GeomType::MultiPoint,
			LineString(_) | MultiLineString(_) => GeomType::MultiLineString,
			Polygon(_) | MultiPolygon(_) => GeomType::MultiPolygon,
		}
	}
}
