//! In-process fake of the paginated orders API.

use std::sync::{Arc, Mutex};

use axum::extract::{Query, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Clone)]
struct FakeApi {
    pages: Arc<Vec<Value>>,
    requests: Arc<Mutex<Vec<u32>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

#[derive(Deserialize)]
struct PageParams {
    page: u32,
}

/// A running fake API.
pub struct FakeServer {
    pub base: String,
    requests: Arc<Mutex<Vec<u32>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeServer {
    /// URL of the paginated orders endpoint.
    pub fn orders_url(&self) -> String {
        format!("{}/orders.json", self.base)
    }

    /// Page numbers requested so far.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requests.lock().unwrap().clone()
    }

    /// Raw query strings received at the orders endpoint, in request order.
    pub fn raw_queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

/// Serve `pages` (page 1 first); later pages come back with no orders.
///
/// Also mounts `/broken.json` (HTTP 500) and `/garbage.json` (non-JSON body).
pub async fn spawn_fake_api(pages: Vec<Value>) -> FakeServer {
    let state = FakeApi {
        pages: Arc::new(pages),
        requests: Arc::new(Mutex::new(Vec::new())),
        queries: Arc::new(Mutex::new(Vec::new())),
    };
    let requests = Arc::clone(&state.requests);
    let queries = Arc::clone(&state.queries);

    let app = Router::new()
        .route("/orders.json", get(serve_page))
        .route(
            "/broken.json",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database on fire") }),
        )
        .route("/garbage.json", get(|| async { "<html>not json</html>" }))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeServer {
        base: format!("http://{}", addr),
        requests,
        queries,
    }
}

async fn serve_page(
    State(api): State<FakeApi>,
    Query(params): Query<PageParams>,
    RawQuery(raw): RawQuery,
) -> Json<Value> {
    api.requests.lock().unwrap().push(params.page);
    api.queries.lock().unwrap().push(raw.unwrap_or_default());

    let index = params.page.saturating_sub(1) as usize;
    match api.pages.get(index) {
        Some(page) => Json(page.clone()),
        None => Json(json!({
            "available_cookies": 0,
            "orders": [],
            "pagination": { "current_page": params.page, "per_page": 5, "total": 0 }
        })),
    }
}

/// Build one page of the API response.
pub fn api_page(available: u32, orders: Value) -> Value {
    json!({
        "available_cookies": available,
        "orders": orders,
        "pagination": { "current_page": 1, "per_page": 5, "total": 15 }
    })
}
