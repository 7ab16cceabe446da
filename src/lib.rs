//! FurryHaven: API and page server for an animal-rescue site.
//!
//! The API serves seeded animals, shop items and donation options out of an
//! in-memory store and accepts user registrations and newsletter signups.
//! Every client-side route gets the single-page shell.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, Request, StatusCode},
    response::{Html, IntoResponse, Json as AxumJson},
    routing::{get, post},
    Router,
};
use serde_json::json;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub mod cart;
pub mod config;
pub mod db;
pub mod error;
pub mod pages;
pub mod routes;
pub mod validation;

use config::Config;
use db::DbPool;
use pages::Page;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub index_template: Arc<str>,
}

impl AppState {
    pub fn new(db: DbPool, index_template: impl Into<Arc<str>>) -> Self {
        AppState {
            db,
            index_template: index_template.into(),
        }
    }
}

/// Reads `index.html` from the static directory, or falls back to the
/// built-in shell.
pub fn load_index_template(static_dir: &Path) -> String {
    let path = static_dir.join("index.html");
    match fs::read_to_string(&path) {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!("Using built-in page shell, could not read {}: {}", path.display(), e);
            pages::DEFAULT_SHELL.to_string()
        }
    }
}

pub fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid ALLOWED_ORIGINS entry: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

pub fn app(state: AppState, config: &Config) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // API Routes
        .route("/api/animals", get(routes::animals::list_animals))
        .route("/api/animals/type/{type}", get(routes::animals::list_animals_by_type))
        .route("/api/animals/{id}", get(routes::animals::get_animal))
        .route("/api/shop", get(routes::shop::list_shop_items))
        .route("/api/shop/{id}", get(routes::shop::get_shop_item))
        .route("/api/donations", get(routes::donations::list_donation_options))
        .route("/api/donations/category/{category}", get(routes::donations::list_donation_options_by_category))
        .route("/api/users/register", post(routes::users::register_user))
        .route("/api/newsletter/subscribe", post(routes::newsletter::subscribe))
        .nest_service("/assets", ServeDir::new(config.static_dir.join("assets")))
        .fallback(spa_fallback)
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn spa_fallback(State(state): State<AppState>, req: Request<Body>) -> impl IntoResponse {
    let path = req.uri().path();
    if path == "/api" || path.starts_with("/api/") {
        return (StatusCode::NOT_FOUND, AxumJson(json!({ "message": "Not found" }))).into_response();
    }

    let page = Page::from_path(path);
    let status = if page.is_found() { StatusCode::OK } else { StatusCode::NOT_FOUND };
    let html = pages::render_shell(&state.index_template, page);
    (
        status,
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"))],
        Html(html),
    )
        .into_response()
}
