use super::{CompositeGeometryTrait, Coordinates, GeometryTrait, MultiLineStringGeometry, SingleGeometryTrait};
use anyhow::{Result, ensure};
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "LineString must have at least two points");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		super::traits::merge_bounds(self.0.iter().map(|c| Some([c.x(), c.y(), c.x(), c.y()])))
	}
}

impl CompositeGeometryTrait<Coordinates> for LineStringGeometry {
	fn new() -> Self {
		Self(Vec::new())
	}
	fn as_vec(&self) -> &Vec<Coordinates> {
		&self.0
	}
	fn as_mut_vec(&mut self) -> &mut Vec<Coordinates> {
		&mut self.0
	}
	fn into_inner(self) -> Vec<Coordinates> {
		self.0
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(LineStringGeometry, Coordinates);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verify_needs_two_points() {
		assert!(LineStringGeometry::from(&[[0, 0], [4096, 4096]]).verify().is_ok());
		assert!(LineStringGeometry::from(&[[0, 0]]).verify().is_err());
		assert!(LineStringGeometry::new().verify().is_err());
	}

	#[test]
	fn bounds() {
		let line = LineStringGeometry::from(&[[128, 0], [4096, 3968], [0, 64]]);
		assert_eq!(line.compute_bounds(), Some([0.0, 0.0, 4096.0, 3968.0]));
		assert_eq!(LineStringGeometry::new().compute_bounds(), None);
	}

	#[test]
	fn composite_access() {
		let mut line = LineStringGeometry::new();
		line.push(Coordinates::new(1.0, 2.0));
		line.push(Coordinates::new(3.0, 4.0));
		assert_eq!(line.len(), 2);
		assert_eq!(line.last(), Some(&Coordinates::new(3.0, 4.0)));
		assert_eq!(format!("{line:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
	}

	#[test]
	fn into_multi() {
		let line = LineStringGeometry::from(&[[0, 0], [1, 1]]);
		assert_eq!(line.clone().into_multi().0, vec![line]);
	}
}
