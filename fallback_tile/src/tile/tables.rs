use super::definition::{PropertyValue::*, StaticFeature, StaticLayer};
use std::borrow::Cow::Borrowed;

/// One polygon covering the whole tile.
pub static SQUARE: StaticLayer = StaticLayer {
	name: "square",
	features: &[StaticFeature {
		geometry: "POLYGON((0 0, 4096 0, 4096 4096, 0 4096, 0 0))",
		properties: &[],
	}],
};

pub static SAMPLE_LINES: StaticLayer = StaticLayer {
	name: "lines",
	features: &[
		StaticFeature {
			geometry: "LINESTRING(512 512, 3584 3584)",
			properties: &[
				("uid", UInt(1)),
				("foo", String(Borrowed("bar"))),
				("cat", String(Borrowed("road"))),
			],
		},
		StaticFeature {
			geometry: "LINESTRING(512 3584, 2048 2560, 3584 512)",
			properties: &[
				("uid", UInt(2)),
				("foo", String(Borrowed("baz"))),
				("cat", String(Borrowed("rail"))),
			],
		},
		StaticFeature {
			geometry: "MULTILINESTRING((0 2048, 1024 2048), (3072 2048, 4096 2048))",
			properties: &[("uid", UInt(3)), ("cat", String(Borrowed("road"))), ("dashed", Bool(true))],
		},
	],
};

pub static SAMPLE_POINTS: StaticLayer = StaticLayer {
	name: "points",
	features: &[
		StaticFeature {
			geometry: "POINT(2048 2048)",
			properties: &[("uid", UInt(10)), ("name", String(Borrowed("center"))), ("rank", Int(-1))],
		},
		StaticFeature {
			geometry: "POINT(1024 1024)",
			properties: &[("uid", UInt(11)), ("name", String(Borrowed("north-west"))), ("height", Double(12.5))],
		},
		StaticFeature {
			geometry: "MULTIPOINT((3072 1024), (1024 3072), (3072 3072))",
			properties: &[("uid", UInt(12)), ("name", String(Borrowed("corners")))],
		},
	],
};
