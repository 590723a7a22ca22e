//! Docmount UI
//!
//! Serves an embedded Swagger UI and the matching `doc.json` under any
//! prefix of an axum router.
//!
//! ```no_run
//! use axum::Router;
//! use docmount_ui::{config, DocRegistry, SwaggerConfig, SwaggerUi};
//!
//! let registry = DocRegistry::new().with("v1", r#"{"openapi":"3.0.3"}"#);
//! let ui = SwaggerUi::new(
//!     SwaggerConfig::build([config::instance_name("v1"), config::deep_linking(true)]),
//!     registry,
//! );
//! let app: Router = ui.router("/swagger/v1");
//! ```

mod assets;
pub mod config;
mod dispatch;
mod error;
mod handlers;
mod registry;
mod routes;
mod templates;

pub use assets::{content_type, Asset, AssetStore, EmbeddedAssets};
pub use config::{DisablePredicate, SwaggerConfig, UiOption};
pub use dispatch::{classify, Dispatcher, Target};
pub use error::{Error, Result};
pub use handlers::{
    custom_wrap_handler, disabling_custom_wrap_handler, disabling_wrap_handler, wrap_handler,
};
pub use registry::{DocProvider, DocRegistry, DEFAULT_INSTANCE};

use axum::{http::Method, response::Response, routing::MethodRouter, Router};
use std::sync::Arc;

/// A configured Swagger UI, cheap to clone and share between routes
#[derive(Clone)]
pub struct SwaggerUi {
    dispatcher: Arc<Dispatcher>,
}

impl SwaggerUi {
    /// Serve the embedded Swagger UI bundle
    pub fn new(config: SwaggerConfig, registry: DocRegistry) -> Self {
        Self::with_store(config, registry, EmbeddedAssets)
    }

    /// Serve static files from a custom store
    pub fn with_store(
        config: SwaggerConfig,
        registry: DocRegistry,
        assets: impl AssetStore + 'static,
    ) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(config, registry, Arc::new(assets))),
        }
    }

    pub fn config(&self) -> &SwaggerConfig {
        self.dispatcher.config()
    }

    pub fn registry(&self) -> &DocRegistry {
        self.dispatcher.registry()
    }

    /// Respond to `method` on `path` below the mount
    pub fn serve(&self, method: &Method, path: &str) -> Response {
        self.dispatcher.respond(self.dispatcher.dispatch(method, path))
    }

    pub(crate) fn redirect(&self, method: &Method, location: &str) -> Response {
        self.dispatcher.respond(self.dispatcher.redirect(method, location))
    }

    pub(crate) fn not_found(&self, method: &Method, reason: &str) -> Response {
        self.dispatcher.respond(self.dispatcher.not_found(method, reason))
    }

    /// Handler for a route the host declares itself, e.g. `/docs/*path`
    ///
    /// The sub-path is the route's wildcard capture, or its only capture
    /// when it has no wildcard. A route without captures serves the index
    /// page; anything else answers `404`.
    pub fn handler<S>(&self) -> MethodRouter<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        routes::handler(self.clone())
    }

    /// Router serving `prefix`, `prefix/` and everything below it
    pub fn router<S>(self, prefix: &str) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        routes::create_router(self, prefix)
    }
}

impl std::fmt::Debug for SwaggerUi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwaggerUi")
            .field("config", self.config())
            .field("registry", self.registry())
            .finish()
    }
}
