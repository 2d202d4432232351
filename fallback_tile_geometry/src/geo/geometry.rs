use super::*;
use anyhow::{Result, ensure};
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
		}
	}

	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_) | Geometry::MultiLineString(_) | Geometry::MultiPolygon(_) => self,
		}
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
		}
	}

	#[must_use]
	pub fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
		}
	}

	/// Fails if any coordinate lies outside the square `0..=extent`.
	pub fn check_extent(&self, extent: u32) -> Result<()> {
		if let Some([x_min, y_min, x_max, y_max]) = self.compute_bounds() {
			let max = f64::from(extent);
			ensure!(
				x_min >= 0.0 && y_min >= 0.0 && x_max <= max && y_max <= max,
				"{} bounds [{x_min}, {y_min}, {x_max}, {y_max}] exceed tile extent {extent}",
				self.type_name()
			);
		}
		Ok(())
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}
