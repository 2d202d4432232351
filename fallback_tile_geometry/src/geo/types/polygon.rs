use super::{CompositeGeometryTrait, GeometryTrait, MultiPolygonGeometry, RingGeometry, SingleGeometryTrait};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// An exterior ring followed by zero or more holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	/// Orients the exterior ring clockwise on screen and every hole counter-clockwise.
	#[must_use]
	pub fn with_normalized_winding(self) -> Self {
		Self(
			self
				.0
				.into_iter()
				.enumerate()
				.map(|(index, ring)| ring.with_winding(index == 0))
				.collect(),
		)
	}
}

impl GeometryTrait for PolygonGeometry {
	fn area(&self) -> f64 {
		let mut rings = self.0.iter();
		let Some(outer) = rings.next() else {
			return 0.0;
		};
		rings.fold(outer.area().abs(), |sum, hole| sum - hole.area().abs())
	}

	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		// holes lie inside the exterior ring
		self.0.first().and_then(GeometryTrait::compute_bounds)
	}
}

impl CompositeGeometryTrait<RingGeometry> for PolygonGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<RingGeometry> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<RingGeometry> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<RingGeometry> {
		self.0
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(PolygonGeometry, RingGeometry);

#[cfg(test)]
mod tests {
	use super::*;

	fn with_hole() -> PolygonGeometry {
		PolygonGeometry::from(&[
			vec![[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
			vec![[2, 2], [4, 2], [4, 4], [2, 4], [2, 2]],
		])
	}

	#[test]
	fn area_subtracts_holes() {
		assert_eq!(with_hole().area(), 200.0 - 8.0);
		assert_eq!(PolygonGeometry::new().area(), 0.0);
	}

	#[test]
	fn normalized_winding() {
		let polygon = with_hole().with_normalized_winding();
		assert!(polygon.0[0].is_clockwise());
		assert!(!polygon.0[1].is_clockwise());
		assert_eq!(polygon.area(), 192.0);
	}

	#[test]
	fn verify() {
		assert!(with_hole().verify().is_ok());
		assert!(PolygonGeometry::new().verify().is_err());
		assert!(PolygonGeometry::from(&[[[0, 0], [1, 0], [0, 0]]]).verify().is_err());
	}

	#[test]
	fn bounds_follow_exterior_ring() {
		assert_eq!(with_hole().compute_bounds(), Some([0.0, 0.0, 10.0, 10.0]));
	}
}
