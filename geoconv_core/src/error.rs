//! Defines [`GeoJsonError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors raised while reading or writing GeoJSON.
///
/// Conversion fails fast: the first problem encountered is returned and no partial result is
/// produced.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoJsonError {
	/// The text is not valid JSON. Line and column are kept by the wrapped error.
	#[error("invalid JSON: {0}")]
	Syntax(#[from] serde_json::Error),

	/// Reading the input failed.
	#[error(transparent)]
	Io(#[from] std::io::Error),

	/// A geometry node is not an object, or a coordinate array is not an array, too short or
	/// contains something other than numbers.
	#[error("malformed geometry: {0}")]
	MalformedGeometry(String),

	/// A required member is absent.
	#[error("{object} must have a '{field}' property")]
	MissingField { object: &'static str, field: &'static str },

	/// A member exists but has the wrong JSON kind.
	#[error("{context} must be {expected}, found {found}")]
	TypeMismatch {
		context: &'static str,
		expected: &'static str,
		found: String,
	},

	/// The `type` of a geometry is not one of the seven geometry kinds.
	#[error("unsupported geometry type '{0}'")]
	UnsupportedGeometryType(String),

	/// The `type` of a top-level document is neither a geometry kind nor `Feature` or
	/// `FeatureCollection`.
	#[error("unsupported GeoJSON type '{0}'")]
	UnsupportedTopLevelType(String),

	/// A feature `id` is neither a string nor a number. Carries the JSON kind that was found.
	#[error("invalid feature id: expected a string or a number, found {0}")]
	InvalidIdentifier(&'static str),

	/// A feature's `type` member is present but is not `"Feature"`.
	#[error("invalid feature type '{0}', expected 'Feature'")]
	InvalidFeatureType(String),

	/// The document nests deeper than the configured limit.
	#[error("nesting depth exceeds the limit of {0}")]
	DepthLimitExceeded(usize),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoJsonError>;

impl GeoJsonError {
	pub(crate) fn type_mismatch(context: &'static str, expected: &'static str, found: impl Into<String>) -> Self {
		GeoJsonError::TypeMismatch {
			context,
			expected,
			found: found.into(),
		}
	}

	/// Returns `true` if the error was raised by the JSON syntax stage rather than by the GeoJSON
	/// schema checks.
	pub fn is_syntax(&self) -> bool {
		matches!(self, GeoJsonError::Syntax(_))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn messages() {
		assert_eq!(
			GeoJsonError::MissingField {
				object: "Feature",
				field: "geometry"
			}
			.to_string(),
			"Feature must have a 'geometry' property"
		);
		assert_eq!(
			GeoJsonError::type_mismatch("FeatureCollection 'features'", "an array", "object").to_string(),
			"FeatureCollection 'features' must be an array, found object"
		);
		assert_eq!(
			GeoJsonError::UnsupportedGeometryType("Circle".to_string()).to_string(),
			"unsupported geometry type 'Circle'"
		);
		assert_eq!(
			GeoJsonError::InvalidIdentifier("boolean").to_string(),
			"invalid feature id: expected a string or a number, found boolean"
		);
	}

	#[test]
	fn syntax_errors_keep_position() {
		let err = GeoJsonError::from(serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err());
		assert!(err.is_syntax());
		assert!(err.to_string().contains("line 2"));
	}
}
