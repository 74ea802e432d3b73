/*
[INPUT]:  Statistics kind and filter parameters
[OUTPUT]: Raw aggregated analytics data
[POS]:    HTTP layer - read-only /car/statistics/<kind> endpoints
[UPDATE]: When adding analytics endpoints or changing the timeout policy
*/

use std::time::Duration;

use serde_json::Value;

use crate::http::resource::CAR_PREFIX;
use crate::http::{ApiRequest, CarApiClient, QueryParams, Result};
use crate::types::StatisticsKind;

/// Aggregations are slow server-side; every statistics call carries this
/// override regardless of the client-wide timeout.
pub const STATISTICS_TIMEOUT: Duration = Duration::from_millis(30_000);

const STATISTICS_SEGMENT: &str = "statistics";

/// GET /car/statistics/{kind}?{query}
pub fn statistics_request(kind: StatisticsKind, query: QueryParams) -> ApiRequest {
    ApiRequest::get([CAR_PREFIX, STATISTICS_SEGMENT, kind.segment()])
        .with_query(query)
        .with_timeout(STATISTICS_TIMEOUT)
}

impl CarApiClient {
    pub async fn statistics(&self, kind: StatisticsKind, query: &QueryParams) -> Result<Value> {
        self.send(statistics_request(kind, query.clone())).await
    }

    /// GET /car/statistics/map
    pub async fn sales_map_statistics(&self, query: &QueryParams) -> Result<Value> {
        self.statistics(StatisticsKind::Map, query).await
    }

    /// GET /car/statistics/price
    pub async fn price_sales_statistics(&self, query: &QueryParams) -> Result<Value> {
        self.statistics(StatisticsKind::Price, query).await
    }

    /// GET /car/statistics/energy_type
    pub async fn energy_type_sales_statistics(&self, query: &QueryParams) -> Result<Value> {
        self.statistics(StatisticsKind::EnergyType, query).await
    }

    /// GET /car/statistics/brand
    pub async fn brand_sales_statistics(&self, query: &QueryParams) -> Result<Value> {
        self.statistics(StatisticsKind::Brand, query).await
    }

    /// GET /car/statistics/country
    pub async fn country_sales_statistics(&self, query: &QueryParams) -> Result<Value> {
        self.statistics(StatisticsKind::Country, query).await
    }

    /// GET /car/statistics/model_type
    pub async fn model_type_sales_statistics(&self, query: &QueryParams) -> Result<Value> {
        self.statistics(StatisticsKind::ModelType, query).await
    }

    /// GET /car/statistics/series
    pub async fn series_sales_statistics(&self, query: &QueryParams) -> Result<Value> {
        self.statistics(StatisticsKind::Series, query).await
    }

    /// GET /car/statistics/sales_predict
    pub async fn sales_predict_statistics(&self, query: &QueryParams) -> Result<Value> {
        self.statistics(StatisticsKind::SalesPredict, query).await
    }
}
