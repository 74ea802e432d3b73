/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public car API adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ApiRequest,
    CarApiClient,
    CarApiError,
    ClientConfig,
    Credentials,
    CrudOperation,
    QueryParams,
    RequestBody,
    ResourceApi,
    ResourceId,
    Result,
    STATISTICS_TIMEOUT,
    Upload,
};

// Re-export all types
pub use types::*;
