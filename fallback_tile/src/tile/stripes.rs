//! The diagonal stripe pattern.
//!
//! Starting at every multiple of `extent / divisor` below the extent, two 45° lines fan out:
//! one from the top edge towards the right edge, one from the left edge towards the bottom
//! edge. Four boundary lines close the pattern into a box.

use super::definition::{FeatureDefinition, LayerDefinition};
use anyhow::{Result, ensure};
use log::trace;

/// A step of the stripe generator. `start + end` always equals the extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stripe {
	pub start: u32,
	pub end: u32,
}

impl Stripe {
	/// Line from the top edge at `start` to the right edge.
	#[must_use]
	pub fn top_line(&self, extent: u32) -> String {
		format!("LINESTRING({} 0, {extent} {})", self.start, self.end)
	}

	/// Line from the left edge at `start` to the bottom edge.
	#[must_use]
	pub fn left_line(&self, extent: u32) -> String {
		format!("LINESTRING(0 {}, {} {extent})", self.start, self.end)
	}
}

/// Returns the stripe steps `0, step, 2 * step, ...` below `extent`, with `step = extent / divisor`.
pub fn stripes(extent: u32, divisor: u32) -> Result<Vec<Stripe>> {
	ensure!(divisor > 0, "stripe divisor must be positive");
	let step = extent / divisor;
	ensure!(step > 0, "extent {extent} is too small for {divisor} stripes");

	Ok((0..extent)
		.step_by(step as usize)
		.map(|start| Stripe {
			start,
			end: extent - start,
		})
		.collect())
}

/// The four edges of the tile, clockwise from the top.
#[must_use]
pub fn boundary_lines(extent: u32) -> [String; 4] {
	[
		format!("LINESTRING(0 0, {extent} 0)"),
		format!("LINESTRING({extent} 0, {extent} {extent})"),
		format!("LINESTRING({extent} {extent}, 0 {extent})"),
		format!("LINESTRING(0 {extent}, 0 0)"),
	]
}

/// Builds the `stripes` layer: two lines per stripe step followed by the boundary lines.
pub fn stripe_layer(extent: u32, divisor: u32) -> Result<LayerDefinition> {
	let mut features = Vec::new();
	for stripe in stripes(extent, divisor)? {
		features.push(FeatureDefinition::new(stripe.top_line(extent)));
		features.push(FeatureDefinition::new(stripe.left_line(extent)));
	}
	features.extend(boundary_lines(extent).into_iter().map(FeatureDefinition::new));
	trace!("generated {} stripe lines", features.len());
	Ok(LayerDefinition::new("stripes", features))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn thirty_two_steps_of_128() -> Result<()> {
		let list = stripes(4096, 32)?;
		assert_eq!(list.len(), 32);
		assert_eq!(list[0], Stripe { start: 0, end: 4096 });
		assert_eq!(list[1], Stripe { start: 128, end: 3968 });
		assert_eq!(list[31], Stripe { start: 3968, end: 128 });
		Ok(())
	}

	#[test]
	fn start_plus_end_is_extent() -> Result<()> {
		assert!(stripes(4096, 32)?.iter().all(|s| s.start + s.end == 4096));
		Ok(())
	}

	#[test]
	fn stripe_layer_has_68_lines() -> Result<()> {
		let layer = stripe_layer(4096, 32)?;
		assert_eq!(layer.name, "stripes");
		assert_eq!(layer.features.len(), 4 + 2 * 32);
		assert_eq!(layer.features[2].geometry, "LINESTRING(128 0, 4096 3968)");
		assert_eq!(layer.features[3].geometry, "LINESTRING(0 128, 3968 4096)");
		assert_eq!(layer.features[64].geometry, "LINESTRING(0 0, 4096 0)");
		assert_eq!(layer.features[67].geometry, "LINESTRING(0 4096, 0 0)");
		Ok(())
	}

	#[test]
	fn lines_are_diagonal() -> Result<()> {
		for stripe in stripes(4096, 32)? {
			assert_eq!(
				stripe.top_line(4096),
				format!("LINESTRING({} 0, 4096 {})", stripe.start, 4096 - stripe.start)
			);
		}
		Ok(())
	}

	#[rstest]
	#[case(4096, 0)]
	#[case(16, 32)]
	fn invalid_divisor(#[case] extent: u32, #[case] divisor: u32) {
		assert!(stripes(extent, divisor).is_err());
	}

	#[test]
	fn uneven_step() -> Result<()> {
		// 100 / 3 = 33: starts 0, 33, 66, 99
		let list = stripes(100, 3)?;
		assert_eq!(list.iter().map(|s| s.start).collect::<Vec<_>>(), vec![0, 33, 66, 99]);
		assert_eq!(list[3].end, 1);
		Ok(())
	}
}
