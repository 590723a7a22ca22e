//! Demo APIs documented by the Swagger UI mounts

pub mod v1;
pub mod v2;

use axum::Router;
use docmount_ui::DocRegistry;
use utoipa::OpenApi;

/// Routes for every API version
pub fn router() -> Router {
    Router::new()
        .nest("/v1", v1::router())
        .nest("/v2", v2::router())
}

/// Register the generated document of every API version
pub fn registry() -> docmount_ui::Result<DocRegistry> {
    let mut registry = DocRegistry::new();
    registry.register_openapi("v1", &v1::ApiDoc::openapi())?;
    registry.register_openapi("v2", &v2::ApiDoc::openapi())?;
    Ok(registry)
}
