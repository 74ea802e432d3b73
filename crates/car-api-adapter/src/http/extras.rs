/*
[INPUT]:  Series identifiers and recommendation filters
[OUTPUT]: Raw backend responses for resource-specific endpoints
[POS]:    HTTP layer - non-CRUD routes of like/series/recommend
[UPDATE]: When a resource gains an endpoint outside the CRUD table
*/

use serde_json::Value;

use crate::http::resource::CAR_PREFIX;
use crate::http::{ApiRequest, CarApiClient, QueryParams, ResourceId, Result};
use crate::types::Resource;

/// DELETE /car/like/seriesId/{seriesId}
pub fn delete_like_by_series_id_request(series_id: &ResourceId) -> ApiRequest {
    ApiRequest::delete([
        CAR_PREFIX,
        Resource::Like.segment(),
        "seriesId",
        series_id.as_str(),
    ])
}

/// GET /car/series/detail/{seriesId}
pub fn series_detail_request(series_id: &ResourceId) -> ApiRequest {
    ApiRequest::get([
        CAR_PREFIX,
        Resource::Series.segment(),
        "detail",
        series_id.as_str(),
    ])
}

/// GET /car/recommend/content?{query}
pub fn recommend_content_request(query: QueryParams) -> ApiRequest {
    ApiRequest::get([CAR_PREFIX, Resource::Recommend.segment(), "content"]).with_query(query)
}

impl CarApiClient {
    /// Remove the caller's like on a series
    pub async fn delete_like_by_series_id(&self, series_id: impl Into<ResourceId>) -> Result<Value> {
        self.send(delete_like_by_series_id_request(&series_id.into()))
            .await
    }

    /// Series detail page data
    pub async fn get_series_detail(&self, series_id: impl Into<ResourceId>) -> Result<Value> {
        self.send(series_detail_request(&series_id.into())).await
    }

    /// Personalized recommendation feed
    pub async fn get_recommend_list(&self, query: &QueryParams) -> Result<Value> {
        self.send(recommend_content_request(query.clone())).await
    }
}
