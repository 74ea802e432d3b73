/*
[INPUT]:  Method, path segments, query mapping, body and timeout of one call
[OUTPUT]: Plain-data request description and its rendered URL
[POS]:    HTTP layer - request shape shared by every operation
[UPDATE]: When the dispatch options or URL rendering rules change
*/

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::http::{CarApiError, Result};

/// Opaque identifier written into a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Comma-joined id list accepted by the delete endpoints
    pub fn join<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ResourceId>,
    {
        let parts: Vec<String> = ids.into_iter().map(|id| id.into().0).collect();
        Self(parts.join(","))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ResourceId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(value: &ResourceId) -> Self {
        value.clone()
    }
}

macro_rules! resource_id_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ResourceId {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

resource_id_from_int!(i32, i64, u32, u64, usize);

/// Query-string mapping. Keys are unique and rendered in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert any serializable key/value mapping.
    ///
    /// `null` values are dropped; nested objects and arrays flatten to
    /// `key[sub]` and `key[index]`.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        match serde_json::to_value(value)? {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => {
                let mut params = BTreeMap::new();
                for (key, value) in map {
                    flatten_into(&mut params, key, value);
                }
                Ok(Self(params))
            }
            other => Err(CarApiError::InvalidQuery(format!(
                "expected a key/value mapping, got {}",
                json_kind(&other)
            ))),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.0.insert(key.into(), value.to_string());
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: ToString,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::default();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

fn flatten_into(out: &mut BTreeMap<String, String>, key: String, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => {
            out.insert(key, s);
        }
        Value::Bool(b) => {
            out.insert(key, b.to_string());
        }
        Value::Number(n) => {
            out.insert(key, n.to_string());
        }
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                flatten_into(out, format!("{key}[{index}]"), item);
            }
        }
        Value::Object(map) => {
            for (sub, item) in map {
                flatten_into(out, format!("{key}[{sub}]"), item);
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A single file sent as one `multipart/form-data` part
#[derive(Clone, PartialEq, Eq)]
pub struct Upload {
    /// Form field name the backend reads the file from
    pub field: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    /// Field name used by the spreadsheet import endpoints
    pub const FILE_FIELD: &'static str = "file";

    pub fn file(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            field: Self::FILE_FIELD.to_string(),
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

impl fmt::Debug for Upload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Upload")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Request body variants understood by the dispatcher
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Value),
    Form(QueryParams),
    Multipart(Upload),
}

/// One outbound call described as plain data.
///
/// Built by the request factory and the per-endpoint helpers, executed by
/// [`CarApiClient::send`](crate::http::CarApiClient::send).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path segments appended after the base URL path, unencoded
    pub segments: Vec<String>,
    pub query: QueryParams,
    pub body: RequestBody,
    /// Per-request override of the client-wide timeout
    pub timeout: Option<Duration>,
}

impl ApiRequest {
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: QueryParams::default(),
            body: RequestBody::Empty,
            timeout: None,
        }
    }

    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    pub fn put<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PUT, segments)
    }

    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_json(mut self, body: Value) -> Self {
        self.body = RequestBody::Json(body);
        self
    }

    pub fn with_form(mut self, form: QueryParams) -> Self {
        self.body = RequestBody::Form(form);
        self
    }

    pub fn with_upload(mut self, upload: Upload) -> Self {
        self.body = RequestBody::Multipart(upload);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Unencoded path, for logs and diagnostics
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    /// Render the full URL against `base`.
    ///
    /// Segments are appended after the base path and percent-encoded one by
    /// one; the query string is form-urlencoded and omitted when empty.
    /// `.` and `..` are rejected since the URL parser would drop them.
    pub fn url(&self, base: &Url) -> Result<Url> {
        if let Some(segment) = self.segments.iter().find(|s| matches!(s.as_str(), "." | "..")) {
            return Err(CarApiError::InvalidPath(segment.clone()));
        }
        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| CarApiError::Config(format!("base URL cannot carry a path: {base}")))?
            .pop_if_empty()
            .extend(self.segments.iter());
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }
        Ok(url)
    }
}
