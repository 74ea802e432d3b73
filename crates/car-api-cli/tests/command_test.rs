/*
[INPUT]:  Parsed commands against a mock backend
[OUTPUT]: Verification that each command issues the matching API call
[POS]:    Integration test layer - command dispatch
[UPDATE]: When adding commands
*/

use car_api_adapter::{CarApiClient, Resource, StatisticsKind};
use car_api_cli::{Command, CommandOutput, run};
use clap::Parser;
use tokio_test::assert_ok;
use wiremock::matchers::{body_json, body_string, header_regex, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Parser, Debug)]
struct Harness {
    #[command(subcommand)]
    command: Command,
}

fn parse(args: &[&str]) -> Command {
    let argv = std::iter::once("car-api").chain(args.iter().copied());
    Harness::try_parse_from(argv).expect("parse").command
}

fn client_for(server: &MockServer) -> CarApiClient {
    CarApiClient::new(&server.uri()).expect("client init")
}

#[test]
fn test_parse_commands() {
    assert_eq!(
        parse(&["list", "series", "-p", "pageNum=1", "--param", "pageSize=10"]),
        Command::List {
            resource: Resource::Series,
            params: vec![
                ("pageNum".to_string(), "1".to_string()),
                ("pageSize".to_string(), "10".to_string()),
            ],
        }
    );
    assert_eq!(
        parse(&["statistics", "sales-predict"]),
        Command::Statistics {
            kind: StatisticsKind::SalesPredict,
            params: vec![],
        }
    );
    assert_eq!(
        parse(&["delete", "statisticsInfo", "1", "2"]),
        Command::Delete {
            resource: Resource::StatisticsInfo,
            ids: vec!["1".to_string(), "2".to_string()],
        }
    );

    assert_eq!(
        parse(&["import-data", "series", "series.xlsx"]),
        Command::ImportData {
            resource: Resource::Series,
            file: std::path::PathBuf::from("series.xlsx"),
        }
    );

    let argv = ["car-api", "list", "statistics"];
    assert!(Harness::try_parse_from(argv).is_err());
}

#[tokio::test]
async fn test_add_command_posts_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/car/like"))
        .and(body_json(serde_json::json!({ "seriesId": 42, "userId": 7 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "msg": "新增成功"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let command = parse(&["add", "like", r#"{"seriesId":42,"userId":7}"#]);
    let output = assert_ok!(run(&client, &command).await);
    assert_eq!(
        output,
        CommandOutput::Json(serde_json::json!({ "code": 200, "msg": "新增成功" }))
    );
}

#[tokio::test]
async fn test_delete_command_joins_ids() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/car/view/8,9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "code": 200 })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(run(&client, &parse(&["delete", "view", "8", "9"])).await);
}

#[tokio::test]
async fn test_extra_and_geo_commands() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/car/series/detail/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "code": 200 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/car/like/seriesId/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "code": 200 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/car/recommend/content"))
        .and(query_param("userId", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "code": 200 })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/common/geo"))
        .and(query_param("area", "china/citys"))
        .and(query_param("name", "贵阳市"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "type": "FeatureCollection" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_ok!(run(&client, &parse(&["series-detail", "5"])).await);
    assert_ok!(run(&client, &parse(&["unlike-series", "5"])).await);
    assert_ok!(run(&client, &parse(&["recommend-content", "-p", "userId=3"])).await);
    let geo = assert_ok!(run(&client, &parse(&["geo", "china/citys", "贵阳市"])).await);
    assert_eq!(
        geo,
        CommandOutput::Json(serde_json::json!({ "type": "FeatureCollection" }))
    );
}

#[tokio::test]
async fn test_export_command_writes_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/car/sales/export"))
        .and(body_string("country=%E4%B8%AD%E5%9B%BD"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"xlsx-bytes".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let target = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("sales-export.xlsx");
    let client = client_for(&server);
    let command = Command::Export {
        resource: Resource::Sales,
        output: target.clone(),
        params: vec![("country".to_string(), "中国".to_string())],
    };

    let output = assert_ok!(run(&client, &command).await);
    assert_eq!(
        output,
        CommandOutput::Exported {
            path: target.clone(),
            bytes: 10,
        }
    );
    assert_eq!(assert_ok!(std::fs::read(&target)), b"xlsx-bytes");
}

#[tokio::test]
async fn test_import_commands() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/car/view/importTemplate"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"template".to_vec()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/car/view/importData"))
        .and(header_regex("content-type", "^multipart/form-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "code": 200,
            "msg": "导入成功"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let tmp = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR"));
    let template = tmp.join("view-template.xlsx");
    let client = client_for(&server);

    let output = assert_ok!(
        run(
            &client,
            &Command::ImportTemplate {
                resource: Resource::View,
                output: template.clone(),
            }
        )
        .await
    );
    assert_eq!(
        output,
        CommandOutput::Exported {
            path: template.clone(),
            bytes: 8,
        }
    );

    let upload = tmp.join("view-upload.xlsx");
    assert_ok!(std::fs::write(&upload, b"view-rows"));
    let output = assert_ok!(
        run(
            &client,
            &Command::ImportData {
                resource: Resource::View,
                file: upload,
            }
        )
        .await
    );
    assert_eq!(
        output,
        CommandOutput::Json(serde_json::json!({ "code": 200, "msg": "导入成功" }))
    );

    let received = server.received_requests().await.expect("recorded requests");
    let body = String::from_utf8_lossy(&received[1].body);
    assert!(body.contains(r#"filename="view-upload.xlsx""#));
    assert!(body.contains("view-rows"));
}
