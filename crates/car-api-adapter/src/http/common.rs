/*
[INPUT]:  Area path and region name
[OUTPUT]: GeoJSON boundary document as raw JSON
[POS]:    HTTP layer - shared /common endpoints
[UPDATE]: When adding /common endpoints
*/

use serde_json::Value;

use crate::http::{ApiRequest, CarApiClient, QueryParams, Result};
use crate::types::GeoArea;

/// GET /common/geo?area={area}&name={name}
pub fn geo_json_request(area: &GeoArea, name: &str) -> ApiRequest {
    let query = QueryParams::new().with("area", area.path()).with("name", name);
    ApiRequest::get(["common", "geo"]).with_query(query)
}

impl CarApiClient {
    /// Boundary lookup, e.g. `get_geo_json("china", "贵州省")`
    pub async fn get_geo_json(&self, area: impl Into<GeoArea>, name: &str) -> Result<Value> {
        self.send(geo_json_request(&area.into(), name)).await
    }
}
