/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed query structs that serialize to backend parameter names
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use crate::http::{QueryParams, Result};

/// Pagination and ordering shared by every list endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_asc: Option<String>,
}

impl PageQuery {
    pub fn page(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num: Some(page_num),
            page_size: Some(page_size),
            ..Self::default()
        }
    }

    pub fn to_query(&self) -> Result<QueryParams> {
        QueryParams::from_serialize(self)
    }
}

/// Filters accepted by the `/car/statistics/*` endpoints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Region name; the backend treats the whole-country name as "no filter"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl StatisticsQuery {
    pub fn to_query(&self) -> Result<QueryParams> {
        QueryParams::from_serialize(self)
    }
}
