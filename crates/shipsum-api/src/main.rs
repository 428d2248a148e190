use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use shipsum_core::{Aggregator, AggregatorError, CategoryTotal, OrderRequest, OrderSummary};
use tower_http::cors::CorsLayer;
use tracing::{error, info};

const OPENAPI_SPEC: &str = include_str!("../../../openapi.yaml");
const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Shipsum API Docs</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {
            SwaggerUIBundle({
                url: '/openapi.yaml',
                dom_id: '#swagger-ui',
                presets: [SwaggerUIBundle.presets.apis],
                layout: 'BaseLayout',
            });
        };
    </script>
</body>
</html>"#;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Order Summarizer API");

    // Build application
    let app = Router::new()
        .route("/", get(serve_ui))
        .route("/api/health", get(health_check))
        .route("/api/summarize", post(summarize))
        .route("/api/report", post(report))
        .route("/openapi.yaml", get(serve_openapi_spec))
        .route("/docs", get(serve_swagger_ui))
        .layer(CorsLayer::permissive());

    // Start server
    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("Failed to bind to port 3000");

    info!("API server listening on http://0.0.0.0:3000");
    info!("Try: curl http://localhost:3000/api/health");

    axum::serve(listener, app).await.expect("Server error");
}

/// Health check endpoint
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "order-summarizer-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Main aggregation endpoint
async fn summarize(Json(request): Json<OrderRequest>) -> Result<Json<OrderSummary>, AppError> {
    info!(
        "Received order with {} line items, carrier estimate '{}'",
        request.line_items.len(),
        request.shipping_rate
    );

    let aggregator = Aggregator::new(request)?;
    let summary = aggregator.summarize()?;

    info!(
        "Order summarized: {} categories, ${:.2} shipping & handling, {:.2} lb",
        summary.totals.len(),
        summary.total_shipping_cost,
        summary.total_weight
    );

    Ok(Json(summary))
}

/// Generate a plain-text packing report
async fn report(Json(summary): Json<OrderSummary>) -> Result<Response, AppError> {
    info!(
        "Generating packing report for {} categories",
        summary.totals.len()
    );

    let text = generate_report_content(&summary)?;

    Ok((StatusCode::OK, [("Content-Type", "text/plain")], text).into_response())
}

/// Generate report text from an order summary
fn generate_report_content(summary: &OrderSummary) -> Result<String, AppError> {
    use std::fmt::Write;

    let mut report = String::new();

    writeln!(&mut report, "ORDER PACKING REPORT").unwrap();
    writeln!(&mut report, "====================").unwrap();
    writeln!(&mut report).unwrap();

    // Sort so the report is stable across runs
    let mut totals: Vec<&CategoryTotal> = summary.totals.values().collect();
    totals.sort_by(|a, b| a.category.cmp(&b.category));

    for total in totals {
        let cases = if total.remainder_units > 0 {
            format!("{} (+{})", total.case_count, total.remainder_units)
        } else {
            total.case_count.to_string()
        };

        writeln!(
            &mut report,
            "{:<14} {:>8}   ({} units, {:.2} lb)",
            total.category, cases, total.raw_units, total.weight
        )
        .unwrap();
    }

    writeln!(&mut report).unwrap();
    writeln!(&mut report, "Carrier base rate:    ${:.2}", summary.base_rate).unwrap();
    writeln!(
        &mut report,
        "Shipping & handling:  ${:.2}",
        summary.total_shipping_cost
    )
    .unwrap();
    writeln!(
        &mut report,
        "Total weight:         {:.2} lb",
        summary.total_weight
    )
    .unwrap();

    Ok(report)
}

/// Application error type
struct AppError(anyhow::Error);

impl From<AggregatorError> for AppError {
    fn from(err: AggregatorError) -> Self {
        AppError(err.into())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Request error: {}", self.0);

        let message = self.0.to_string();
        let status = if message.contains("Malformed shipping rate")
            || message.contains("Invalid quantity")
        {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (
            status,
            Json(json!({
                "error": message,
            })),
        )
            .into_response()
    }
}

async fn serve_ui() -> impl IntoResponse {
    // Read the UI file
    match std::fs::read_to_string("web/index.html") {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"
            <!DOCTYPE html>
            <html>
            <head>
                <title>Order Summarizer</title>
            </head>
            <body>
                <h1>Order Summarizer API</h1>
                <p>Web UI file not found. Please ensure web/index.html exists.</p>
                <h2>API Endpoints:</h2>
                <ul>
                    <li>GET /api/health - Health check</li>
                    <li>POST /api/summarize - Aggregate an order into a summary</li>
                    <li>POST /api/report - Render a summary as a text report</li>
                </ul>
            </body>
            </html>
        "#
            .to_string(),
        ),
    }
}

async fn serve_openapi_spec() -> impl IntoResponse {
    (
        StatusCode::OK,
        [("Content-Type", "application/yaml")],
        OPENAPI_SPEC,
    )
}

async fn serve_swagger_ui() -> impl IntoResponse {
    Html(SWAGGER_UI_HTML)
}
