use anyhow::Result;
use std::fmt::Debug;

/// Behaviour shared by every geometry type.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Signed area in tile units.
	///
	/// Rings use the shoelace sum `(x2 - x1) * (y1 + y2)` without halving. With y pointing down,
	/// a ring that runs clockwise on screen (an exterior ring) yields a positive value.
	fn area(&self) -> f64;

	/// Checks structural validity: minimum point counts, closed rings, non-empty polygons.
	fn verify(&self) -> Result<()>;

	/// Returns `[x_min, y_min, x_max, y_max]`, or `None` when there are no coordinates.
	fn compute_bounds(&self) -> Option<[f64; 4]>;
}

pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	fn into_multi(self) -> Multi;
}

/// A geometry that is a thin wrapper around a `Vec` of its parts.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn into_iter(self) -> impl Iterator<Item = Item> {
		self.into_inner().into_iter()
	}

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}

/// Merges bounding boxes of the given parts.
pub(crate) fn merge_bounds(parts: impl Iterator<Item = Option<[f64; 4]>>) -> Option<[f64; 4]> {
	parts.flatten().reduce(|a, b| {
		[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn merge_bounds_skips_empty_parts() {
		let bounds = merge_bounds([Some([0.0, 5.0, 2.0, 6.0]), None, Some([1.0, -1.0, 3.0, 4.0])].into_iter());
		assert_eq!(bounds, Some([0.0, -1.0, 3.0, 6.0]));
	}

	#[test]
	fn merge_bounds_of_nothing() {
		assert_eq!(merge_bounds(std::iter::empty()), None);
	}
}
