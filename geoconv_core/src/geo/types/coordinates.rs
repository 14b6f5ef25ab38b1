use crate::geojson::json_kind;
use crate::{GeoJsonError, Result};
use num_traits::{NumCast, ToPrimitive};
use serde_json::{Number, Value as JsonValue};
use std::fmt::Debug;

/// A numeric type usable for coordinate values.
///
/// Implemented for `f64` (the primary coordinate type used by the geometry model), `f32`, `i64`
/// and `i32`. Integer types reject JSON numbers with a fractional part or outside their range.
pub trait CoordinateNumber: Copy + Debug + PartialEq + NumCast + ToPrimitive {
	const INTEGRAL: bool;

	/// Converts a JSON number, returning `None` if it has no faithful representation in `Self`.
	fn from_json_number(number: &Number) -> Option<Self> {
		if let Some(v) = number.as_i64() {
			return <Self as NumCast>::from(v);
		}
		if let Some(v) = number.as_u64() {
			return <Self as NumCast>::from(v);
		}
		let v = number.as_f64()?;
		if Self::INTEGRAL && v.fract() != 0.0 {
			return None;
		}
		<Self as NumCast>::from(v)
	}

	fn to_json_number(self) -> JsonValue {
		if Self::INTEGRAL {
			if let Some(v) = self.to_i64() {
				return JsonValue::from(v);
			}
		}
		JsonValue::from(self.to_f64().unwrap_or(f64::NAN))
	}
}

macro_rules! impl_coordinate_number {
	($($t:ty => $integral:expr),+ $(,)?) => {$(
		impl CoordinateNumber for $t {
			const INTEGRAL: bool = $integral;
		}
	)+};
}

impl_coordinate_number!(f64 => false, f32 => false, i64 => true, i32 => true);

/// Reads a GeoJSON position `[x, y, ...]` into a pair of coordinate numbers.
///
/// The array must hold at least two numbers. Further elements, such as an elevation, are
/// ignored.
pub fn read_coordinate_pair<T: CoordinateNumber>(json: &JsonValue) -> Result<[T; 2]> {
	let array = json.as_array().ok_or_else(|| {
		GeoJsonError::MalformedGeometry(format!("a position must be an array, found {}", json_kind(json)))
	})?;

	if array.len() < 2 {
		return Err(GeoJsonError::MalformedGeometry(format!(
			"a position must have at least 2 numbers, found {}",
			array.len()
		)));
	}

	let read = |json: &JsonValue| match json {
		JsonValue::Number(n) => T::from_json_number(n).ok_or_else(|| {
			GeoJsonError::MalformedGeometry(format!("coordinate value {n} is not representable"))
		}),
		other => Err(GeoJsonError::MalformedGeometry(format!(
			"a coordinate value must be a number, found {}",
			json_kind(other)
		))),
	};

	Ok([read(&array[0])?, read(&array[1])?])
}

/// Writes a pair of coordinate numbers as a GeoJSON position `[x, y]`.
pub fn write_coordinate_pair<T: CoordinateNumber>(pair: [T; 2]) -> JsonValue {
	JsonValue::Array(vec![pair[0].to_json_number(), pair[1].to_json_number()])
}

/// A two-dimensional position.
#[derive(Clone, Copy, PartialEq)]
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

	pub fn from_json(json: &JsonValue) -> Result<Self> {
		read_coordinate_pair::<f64>(json).map(Self)
	}

	#[must_use]
	pub fn to_json(&self) -> JsonValue {
		write_coordinate_pair(self.0)
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

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
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
