/*
[INPUT]:  Raw JSON bodies returned by the backend
[OUTPUT]: Optional typed views over the backend's response envelopes
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::Result;

/// Code the backend puts in successful envelopes
pub const SUCCESS_CODE: i32 = 200;

/// Envelope of the `/list` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> TableResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Envelope of every other endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AjaxResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> AjaxResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Decode a raw response into a caller-chosen type
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}
