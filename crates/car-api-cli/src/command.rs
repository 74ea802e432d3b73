/*
[INPUT]:  Parsed subcommand and a configured CarApiClient
[OUTPUT]: Raw JSON response, or the path of a saved workbook
[POS]:    Command layer - maps one CLI invocation onto one API call
[UPDATE]: When the adapter gains operations or arguments change
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use car_api_adapter::{CarApiClient, QueryParams, Resource, ResourceId, StatisticsKind};
use clap::Subcommand;
use serde_json::Value;
use tracing::info;

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// GET /car/<resource>/list
    List {
        resource: Resource,
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// GET /car/<resource>/<id>
    Get { resource: Resource, id: String },
    /// POST /car/<resource> with a JSON body (inline or @file)
    Add { resource: Resource, data: String },
    /// PUT /car/<resource> with a JSON body carrying the id
    Update { resource: Resource, data: String },
    /// DELETE /car/<resource>/<id>[,<id>...]
    Delete {
        resource: Resource,
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// POST /car/<resource>/export and save the workbook
    Export {
        resource: Resource,
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// POST /car/<resource>/importTemplate and save the blank workbook
    ImportTemplate {
        resource: Resource,
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },
    /// POST /car/<resource>/importData with a spreadsheet upload
    ImportData { resource: Resource, file: PathBuf },
    /// GET /car/series/detail/<series-id>
    SeriesDetail { series_id: String },
    /// GET /car/recommend/content
    RecommendContent {
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// DELETE /car/like/seriesId/<series-id>
    UnlikeSeries { series_id: String },
    /// GET /car/statistics/<kind>
    Statistics {
        kind: StatisticsKind,
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// GET /common/geo?area=<area>&name=<name>
    Geo { area: String, name: String },
}

/// Result of one command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Json(Value),
    Exported { path: PathBuf, bytes: usize },
}

/// Parse a `key=value` pair; the value may itself contain `=`
pub fn parse_param(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

fn query_from(params: &[(String, String)]) -> QueryParams {
    params.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}

async fn read_payload(data: &str) -> Result<Value> {
    let text = match data.strip_prefix('@') {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("read payload {path}"))?,
        None => data.to_string(),
    };
    serde_json::from_str(&text).context("payload is not valid JSON")
}

async fn save_workbook(output: &Path, bytes: &[u8]) -> Result<CommandOutput> {
    tokio::fs::write(output, bytes)
        .await
        .with_context(|| format!("write workbook to {}", output.display()))?;
    info!(path = %output.display(), bytes = bytes.len(), "workbook saved");
    Ok(CommandOutput::Exported {
        path: output.to_path_buf(),
        bytes: bytes.len(),
    })
}

/// Issue the single API call the command names
pub async fn run(client: &CarApiClient, command: &Command) -> Result<CommandOutput> {
    let value = match command {
        Command::List { resource, params } => {
            client.resource(*resource).list(&query_from(params)).await?
        }
        Command::Get { resource, id } => client.resource(*resource).get(id.as_str()).await?,
        Command::Add { resource, data } => {
            let payload = read_payload(data).await?;
            client.resource(*resource).add(&payload).await?
        }
        Command::Update { resource, data } => {
            let payload = read_payload(data).await?;
            client.resource(*resource).update(&payload).await?
        }
        Command::Delete { resource, ids } => {
            client
                .resource(*resource)
                .delete(ResourceId::join(ids.iter().map(String::as_str)))
                .await?
        }
        Command::Export {
            resource,
            output,
            params,
        } => {
            let bytes = client.resource(*resource).export(&query_from(params)).await?;
            return save_workbook(output, &bytes).await;
        }
        Command::ImportTemplate { resource, output } => {
            let bytes = client.resource(*resource).import_template().await?;
            return save_workbook(output, &bytes).await;
        }
        Command::ImportData { resource, file } => {
            let bytes = tokio::fs::read(file)
                .await
                .with_context(|| format!("read spreadsheet {}", file.display()))?;
            let file_name = file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| anyhow!("not a file path: {}", file.display()))?;
            client.resource(*resource).import_data(file_name, bytes).await?
        }
        Command::SeriesDetail { series_id } => client.get_series_detail(series_id.as_str()).await?,
        Command::RecommendContent { params } => {
            client.get_recommend_list(&query_from(params)).await?
        }
        Command::UnlikeSeries { series_id } => {
            client.delete_like_by_series_id(series_id.as_str()).await?
        }
        Command::Statistics { kind, params } => {
            client.statistics(*kind, &query_from(params)).await?
        }
        Command::Geo { area, name } => client.get_geo_json(area.as_str(), name).await?,
    };
    Ok(CommandOutput::Json(value))
}
