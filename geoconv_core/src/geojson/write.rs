use serde_json::Value as JsonValue;

/// Conversion of a model type into its GeoJSON representation.
pub trait ToGeoJson {
	/// Builds the JSON tree.
	fn to_json(&self) -> JsonValue;

	/// Serializes to compact GeoJSON text.
	fn to_json_string(&self) -> String {
		let text = self.to_json().to_string();
		log::debug!("wrote {} bytes of GeoJSON", text.len());
		text
	}

	/// Serializes to indented GeoJSON text.
	fn to_json_string_pretty(&self) -> String {
		let text = format!("{:#}", self.to_json());
		log::debug!("wrote {} bytes of pretty GeoJSON", text.len());
		text
	}
}
