use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use engine::{EngineError, Product, ProductId, RecEngine, Recommendation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

mod page;

#[derive(Deserialize)]
pub struct RecommendParams {
    #[serde(default = "default_top")]
    pub top: i64,
}
fn default_top() -> i64 { 5 }

#[derive(Deserialize)]
pub struct LikeRequest {
    pub id: ProductId,
}

#[derive(Serialize)]
pub struct LikeResponse {
    pub status: &'static str,
    pub id: ProductId,
}

#[derive(Serialize)]
pub struct ProductBody {
    pub id: ProductId,
    pub title: String,
    pub desc: String,
    pub img: Option<String>,
}

impl From<Product> for ProductBody {
    fn from(p: Product) -> Self {
        Self { id: p.id, title: p.title, desc: p.description, img: p.image_url }
    }
}

#[derive(Serialize)]
pub struct RecommendationBody {
    pub id: ProductId,
    pub title: String,
    pub desc: String,
    pub img: Option<String>,
    pub score: f32,
}

impl From<Recommendation> for RecommendationBody {
    fn from(r: Recommendation) -> Self {
        let p = r.product;
        Self {
            id: p.id,
            title: p.title,
            desc: p.description,
            img: p.image_url,
            score: r.score,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn build_app(rec: Arc<RecEngine>) -> Router {
    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(|| async { "ok" }))
        .route("/products", get(products_handler))
        .route("/like", post(like_handler))
        .route("/recommend", get(recommend_handler))
        .with_state(rec)
        .layer(cors)
}

async fn index_handler() -> Html<&'static str> {
    Html(page::INDEX_PAGE)
}

async fn products_handler(State(rec): State<Arc<RecEngine>>) -> Json<Vec<ProductBody>> {
    Json(rec.products().into_iter().map(Into::into).collect())
}

async fn like_handler(
    State(rec): State<Arc<RecEngine>>,
    Json(req): Json<LikeRequest>,
) -> Result<Json<LikeResponse>, (StatusCode, Json<ErrorBody>)> {
    match rec.like(req.id) {
        Ok(()) => Ok(Json(LikeResponse { status: "liked", id: req.id })),
        Err(err) => Err(error_response(err)),
    }
}

async fn recommend_handler(
    State(rec): State<Arc<RecEngine>>,
    Query(params): Query<RecommendParams>,
) -> Result<Json<Vec<RecommendationBody>>, (StatusCode, Json<ErrorBody>)> {
    match rec.recommend(params.top) {
        Ok(recs) => Ok(Json(recs.into_iter().map(Into::into).collect())),
        Err(err) => Err(error_response(err)),
    }
}

/// Translate engine failures into user-facing responses. Anything outside the
/// engine's taxonomy is a programming defect and is left to propagate.
fn error_response(err: EngineError) -> (StatusCode, Json<ErrorBody>) {
    let status = match err {
        EngineError::NotFound(_) => StatusCode::NOT_FOUND,
        EngineError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        EngineError::DuplicateId(_) => StatusCode::CONFLICT,
    };
    (status, Json(ErrorBody { error: err.to_string() }))
}
