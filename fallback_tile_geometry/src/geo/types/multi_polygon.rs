use super::{CompositeGeometryTrait, GeometryTrait, PolygonGeometry};
use anyhow::Result;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl MultiPolygonGeometry {
	#[must_use]
	pub fn with_normalized_winding(self) -> Self {
		Self(self.0.into_iter().map(PolygonGeometry::with_normalized_winding).collect())
	}
}

impl GeometryTrait for MultiPolygonGeometry {
	fn area(&self) -> f64 {
		self.0.iter().map(GeometryTrait::area).sum()
	}

	fn verify(&self) -> Result<()> {
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		super::traits::merge_bounds(self.0.iter().map(GeometryTrait::compute_bounds))
	}
}

impl CompositeGeometryTrait<PolygonGeometry> for MultiPolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<PolygonGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<PolygonGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<PolygonGeometry> {
		self.0
	}
}

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);
