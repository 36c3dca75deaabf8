use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod db;
pub mod entities;
pub mod error;
pub mod routes;
pub mod schema;
pub mod seed;
pub mod storage;

use crate::storage::ScholarshipStore;

/// State shared by every route handler.
#[derive(Clone)]
pub struct AppState {
    pub store: ScholarshipStore,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        routes::health_check,
        routes::scholarships::list_scholarships,
        routes::scholarships::get_scholarship,
        routes::scholarships::create_scholarship,
        routes::scholarships::update_scholarship,
        routes::scholarships::delete_scholarship,
    ),
    components(schemas(
        entities::scholarship::Model,
        entities::scholarship::FundingType,
        entities::scholarship::ApplicationStatus,
        entities::scholarship::RequiredDocuments,
        schema::NewScholarship,
    ))
)]
struct ApiDoc;

/// Create the application with all routes and middleware
pub fn create_app(store: ScholarshipStore) -> Router {
    let state = AppState { store };

    Router::new()
        .route(
            routes::SCHOLARSHIPS,
            get(routes::scholarships::list_scholarships)
                .post(routes::scholarships::create_scholarship),
        )
        .route(
            routes::SCHOLARSHIP,
            get(routes::scholarships::get_scholarship)
                .put(routes::scholarships::update_scholarship)
                .delete(routes::scholarships::delete_scholarship),
        )
        .route(routes::HEALTH, get(routes::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
