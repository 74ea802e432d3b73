/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and raw API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod common;
pub mod crud;
pub mod error;
pub mod extras;
pub mod request;
pub mod resource;
pub mod statistics;

pub use error::{CarApiError, Result};
pub use request::{ApiRequest, QueryParams, RequestBody, ResourceId, Upload};
pub use resource::CrudOperation;
pub use statistics::STATISTICS_TIMEOUT;

pub use client::{CarApiClient, ClientConfig, Credentials};
pub use crud::ResourceApi;
