use super::{CompositeGeometryTrait, Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use std::fmt::Debug;

/// A closed sequence of coordinates; the first and last point are equal.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// `true` for rings that run clockwise on screen (y down), the winding of exterior rings.
	#[must_use]
	pub fn is_clockwise(&self) -> bool {
		self.area() > 0.0
	}

	/// Reverses the winding order in place.
	pub fn reverse(&mut self) {
		self.0.reverse();
	}

	/// Returns the ring with the requested winding, reversing it if necessary.
	#[must_use]
	pub fn with_winding(mut self, clockwise: bool) -> Self {
		if self.is_clockwise() != clockwise {
			self.reverse();
		}
		self
	}
}

impl GeometryTrait for RingGeometry {
	fn area(&self) -> f64 {
		let mut sum = 0f64;
		if let Some(mut p2) = self.0.last() {
			for p1 in &self.0 {
				sum += (p2.x() - p1.x()) * (p1.y() + p2.y());
				p2 = p1;
			}
		}
		sum
	}

	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 4, "Ring must have at least 4 points");
		ensure!(self.0.first() == self.0.last(), "Ring must be closed");
		Ok(())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		super::traits::merge_bounds(self.0.iter().map(|c| Some([c.x(), c.y(), c.x(), c.y()])))
	}
}

impl CompositeGeometryTrait<Coordinates> for RingGeometry {
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

impl Debug for RingGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

crate::impl_from_array!(RingGeometry, Coordinates);
