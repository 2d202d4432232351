use std::fmt::Debug;

/// A position in tile space. `x` grows to the right, `y` grows downwards.
#[derive(Clone, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	/// Rounds both axes to the integer tile grid.
	#[must_use]
	#[allow(clippy::cast_possible_truncation)]
	pub fn to_grid(&self) -> [i64; 2] {
		[self.0[0].round() as i64, self.0[1].round() as i64]
	}
}

impl<T> From<[T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		value.clone()
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
