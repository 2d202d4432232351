use super::{Coordinates, GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use anyhow::Result;
use std::fmt::Debug;

#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		Some([self.0.x(), self.0.y(), self.0.x(), self.0.y()])
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accessors() {
		let p = PointGeometry::from([512, 1024]);
		assert_eq!(p.x(), 512.0);
		assert_eq!(p.y(), 1024.0);
		assert_eq!(p.as_coord(), &Coordinates::new(512.0, 1024.0));
	}

	#[test]
	fn area_and_verify() {
		let p = PointGeometry::from(&[5, 10]);
		assert_eq!(p.area(), 0.0);
		assert!(p.verify().is_ok());
	}

	#[test]
	fn bounds_are_degenerate() {
		assert_eq!(PointGeometry::from([3, 4]).compute_bounds(), Some([3.0, 4.0, 3.0, 4.0]));
	}

	#[test]
	fn into_multi() {
		let multi = PointGeometry::from([1, 2]).into_multi();
		assert_eq!(multi.0, vec![PointGeometry::from([1, 2])]);
	}
}
