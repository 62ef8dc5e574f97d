//! Shared helpers for running the `orderfill` binary against a fake orders API.

use std::path::Path;
use std::process::Output;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Deserialize)]
struct PageParams {
    page: u32,
}

/// Serve `pages` at `/orders.json` (page 1 first) and a failing `/broken.json`.
/// Returns the server base URL.
pub async fn spawn_fake_api(pages: Vec<Value>) -> String {
    let pages = Arc::new(pages);
    let app = Router::new()
        .route("/orders.json", get(serve_page))
        .route(
            "/broken.json",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream unavailable") }),
        )
        .with_state(pages);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

async fn serve_page(
    State(pages): State<Arc<Vec<Value>>>,
    Query(params): Query<PageParams>,
) -> Json<Value> {
    let index = params.page.saturating_sub(1) as usize;
    Json(pages.get(index).cloned().unwrap_or_else(|| {
        json!({
            "available_cookies": 0,
            "orders": [],
            "pagination": { "current_page": params.page, "per_page": 5, "total": 0 }
        })
    }))
}

/// Run the binary in `work_dir` with the given environment overrides.
pub async fn run_orderfill(work_dir: &Path, envs: &[(&str, &str)]) -> Output {
    let mut command = tokio::process::Command::new(env!("CARGO_BIN_EXE_orderfill"));
    command
        .current_dir(work_dir)
        .env_remove("ORDERFILL_CONFIG")
        .env("RUST_LOG", "error") // Quiet logs during tests
        .kill_on_drop(true);
    for (key, value) in envs {
        command.env(key, value);
    }
    command.output().await.expect("Failed to run orderfill")
}

/// Build an order as the API serves it.
pub fn api_order(id: u64, fulfilled: bool, products: &[(&str, i64)]) -> Value {
    json!({
        "id": id,
        "fulfilled": fulfilled,
        "customer_email": format!("customer{}@example.com", id),
        "products": products
            .iter()
            .map(|(title, amount)| json!({ "title": title, "amount": amount, "unit_price": 0.65 }))
            .collect::<Vec<_>>()
    })
}

/// Build one page of the API response.
pub fn api_page(available: u32, orders: Vec<Value>) -> Value {
    json!({
        "available_cookies": available,
        "orders": orders,
        "pagination": { "current_page": 1, "per_page": 5, "total": 15 }
    })
}
