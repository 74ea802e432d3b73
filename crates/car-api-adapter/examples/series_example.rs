/*
[INPUT]:  Backend base URL (CAR_API_BASE_URL) and optional login token (CAR_API_TOKEN)
[OUTPUT]: Series page, series detail and a sales map for one province
[POS]:    Examples - read-only catalogue and analytics queries
[UPDATE]: When adding new read endpoints
*/

use car_api_adapter::*;

/// Example: browse series and pull the sales map for one province
#[tokio::main]
async fn main() {
    println!("=== Car API Series Example ===\n");

    let base_url =
        std::env::var("CAR_API_BASE_URL").unwrap_or_else(|_| "http://localhost:9099".to_string());
    let mut client = match CarApiClient::new(&base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    if let Ok(token) = std::env::var("CAR_API_TOKEN") {
        client.set_credentials(Credentials { token });
    }
    println!("✓ HTTP client created for {}\n", client.base_url());

    println!("Listing first page of series...");
    let query = PageQuery::page(1, 10).to_query().unwrap_or_default();
    match client.series().list(&query).await {
        Ok(page) => println!("✓ Series page: {}", page),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nFetching detail for series 1...");
    match client.get_series_detail(1_i64).await {
        Ok(detail) => println!("✓ Detail: {}", detail),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying sales map for 贵州省...");
    let filters = StatisticsQuery {
        address: Some("贵州省".to_string()),
        ..StatisticsQuery::default()
    };
    match filters.to_query() {
        Ok(query) => match client.sales_map_statistics(&query).await {
            Ok(map) => println!("✓ Sales map: {}", map),
            Err(e) => println!("✗ Error: {}", e),
        },
        Err(e) => println!("✗ Invalid filters: {}", e),
    }

    println!("\n✓ Series example complete");
}
