/*
[INPUT]:  Backend route names
[OUTPUT]: Typed resource and analytics enums with path segments
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the backend adds a resource or analytics endpoint
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// CRUD resources mounted under `/car/<segment>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Resource {
    Like,
    Model,
    Recommend,
    Sales,
    Series,
    StatisticsInfo,
    View,
}

impl Resource {
    pub const ALL: [Resource; 7] = [
        Resource::Like,
        Resource::Model,
        Resource::Recommend,
        Resource::Sales,
        Resource::Series,
        Resource::StatisticsInfo,
        Resource::View,
    ];

    /// Path segment after `/car/`
    pub fn segment(self) -> &'static str {
        match self {
            Resource::Like => "like",
            Resource::Model => "model",
            Resource::Recommend => "recommend",
            Resource::Sales => "sales",
            Resource::Series => "series",
            Resource::StatisticsInfo => "statisticsInfo",
            Resource::View => "view",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .into_iter()
            .find(|r| r.segment().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown resource '{s}'"))
    }
}

/// Analytics endpoints mounted under `/car/statistics/<segment>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticsKind {
    Map,
    Price,
    EnergyType,
    Brand,
    Country,
    ModelType,
    Series,
    SalesPredict,
}

impl StatisticsKind {
    pub const ALL: [StatisticsKind; 8] = [
        StatisticsKind::Map,
        StatisticsKind::Price,
        StatisticsKind::EnergyType,
        StatisticsKind::Brand,
        StatisticsKind::Country,
        StatisticsKind::ModelType,
        StatisticsKind::Series,
        StatisticsKind::SalesPredict,
    ];

    pub fn segment(self) -> &'static str {
        match self {
            StatisticsKind::Map => "map",
            StatisticsKind::Price => "price",
            StatisticsKind::EnergyType => "energy_type",
            StatisticsKind::Brand => "brand",
            StatisticsKind::Country => "country",
            StatisticsKind::ModelType => "model_type",
            StatisticsKind::Series => "series",
            StatisticsKind::SalesPredict => "sales_predict",
        }
    }
}

impl fmt::Display for StatisticsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for StatisticsKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.replace('-', "_");
        StatisticsKind::ALL
            .into_iter()
            .find(|k| k.segment().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| format!("unknown statistics kind '{s}'"))
    }
}

/// Hierarchical area path understood by the geo endpoint.
///
/// A country alone is its name (`china`); lower levels append a fixed
/// suffix: `china/province`, `china/citys`, `china/county`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoArea {
    Country(String),
    Province(String),
    City(String),
    County(String),
    Raw(String),
}

impl GeoArea {
    pub fn path(&self) -> String {
        match self {
            GeoArea::Country(country) => country.clone(),
            GeoArea::Province(country) => format!("{country}/province"),
            GeoArea::City(country) => format!("{country}/citys"),
            GeoArea::County(country) => format!("{country}/county"),
            GeoArea::Raw(path) => path.clone(),
        }
    }
}

impl From<&str> for GeoArea {
    fn from(value: &str) -> Self {
        GeoArea::Raw(value.to_string())
    }
}

impl From<String> for GeoArea {
    fn from(value: String) -> Self {
        GeoArea::Raw(value)
    }
}
