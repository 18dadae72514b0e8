//! Codec for the `questions.options` column.
//!
//! Checkbox options travel as a JSON array on the wire and are stored as the
//! JSON text of that array. Anything else found in the column is a decoding
//! error.

#[derive(Debug, thiserror::Error)]
pub enum OptionsCodecError {
    #[error("stored options are not a JSON array of strings: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Encode an ordered list of options into its stored form.
pub fn encode(options: &[String]) -> String {
    serde_json::Value::from(options).to_string()
}

/// Decode the stored form back into the ordered list of options.
pub fn decode(stored: &str) -> Result<Vec<String>, OptionsCodecError> {
    Ok(serde_json::from_str::<Vec<String>>(stored)?)
}

/// Decode a nullable column value. `NULL` means the question has no options.
pub fn decode_column(stored: Option<&str>) -> Result<Option<Vec<String>>, OptionsCodecError> {
    stored.map(decode).transpose()
}
