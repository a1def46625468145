//! JSON Projection
//!
//! A buffer serialises as `{"type":"Buffer","data":[...]}`. Deserialising
//! accepts the same shape; each element of `data` is reduced to a byte the
//! way array construction does.

use crate::buffer::Buffer;
use entities_data_handling::value::number_to_uint8;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

const BUFFER_TYPE: &str = "Buffer";

/// Errors from [`Buffer::from_json`]
#[derive(Debug, Error)]
pub enum JsonError {
    #[error("invalid buffer JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected type \"Buffer\", found {0:?}")]
    NotABuffer(String),
}

#[derive(serde::Deserialize)]
struct SerializedBuffer {
    #[serde(rename = "type")]
    kind: String,
    data: Vec<f64>,
}

impl SerializedBuffer {
    fn into_buffer(self) -> Result<Buffer, String> {
        if self.kind != BUFFER_TYPE {
            return Err(self.kind);
        }
        let bytes: Vec<u8> = self.data.into_iter().map(number_to_uint8).collect();
        Ok(Buffer::from(bytes))
    }
}

impl Buffer {
    /// `{"type":"Buffer","data":[...]}`, through the [`Serialize`] impl
    ///
    /// ```rust
    /// use api_facades::Buffer;
    ///
    /// let buf = Buffer::from_bytes(&[1, 2]);
    /// assert_eq!(buf.to_json().to_string(), r#"{"type":"Buffer","data":[1,2]}"#);
    /// ```
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Parse the JSON projection back into a fresh buffer
    pub fn from_json(text: &str) -> Result<Buffer, JsonError> {
        let parsed: SerializedBuffer = serde_json::from_str(text)?;
        parsed.into_buffer().map_err(JsonError::NotABuffer)
    }
}

impl Serialize for Buffer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Buffer", 2)?;
        state.serialize_field("type", BUFFER_TYPE)?;
        state.serialize_field("data", &self.to_vec())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Buffer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        SerializedBuffer::deserialize(deserializer)?
            .into_buffer()
            .map_err(|kind| de::Error::custom(format!("expected type \"Buffer\", found {:?}", kind)))
    }
}
