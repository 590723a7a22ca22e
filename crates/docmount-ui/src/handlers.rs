//! Swagger UI Handlers
//!
//! Ready-made handlers for routes the host declares itself, with or
//! without an environment kill switch.
//!
//! ```no_run
//! use axum::{routing::get, Router};
//! use docmount_ui::{config, wrap_handler, DocRegistry, EmbeddedAssets};
//!
//! let registry = DocRegistry::new().with("", "{}");
//! let app: Router = Router::new().route(
//!     "/swagger/*any",
//!     wrap_handler(EmbeddedAssets, registry, [config::url("/swagger/doc.json")]),
//! );
//! ```

use crate::assets::AssetStore;
use crate::config::{self, SwaggerConfig, UiOption};
use crate::registry::DocRegistry;
use crate::SwaggerUi;
use axum::routing::MethodRouter;

/// Handler configured from options
pub fn wrap_handler<S>(
    assets: impl AssetStore + 'static,
    registry: DocRegistry,
    options: impl IntoIterator<Item = UiOption>,
) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    custom_wrap_handler(SwaggerConfig::build(options), assets, registry)
}

/// Handler configured from a prepared [`SwaggerConfig`]
pub fn custom_wrap_handler<S>(
    config: SwaggerConfig,
    assets: impl AssetStore + 'static,
    registry: DocRegistry,
) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::with_store(config, registry, assets).handler()
}

/// Like [`wrap_handler`], answering 404 everywhere while the environment
/// variable `env_key` is `true`
pub fn disabling_wrap_handler<S>(
    assets: impl AssetStore + 'static,
    registry: DocRegistry,
    env_key: &str,
    options: impl IntoIterator<Item = UiOption>,
) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    disabling_custom_wrap_handler(SwaggerConfig::build(options), assets, registry, env_key)
}

/// Like [`custom_wrap_handler`], answering 404 everywhere while the
/// environment variable `env_key` is `true`
pub fn disabling_custom_wrap_handler<S>(
    mut config: SwaggerConfig,
    assets: impl AssetStore + 'static,
    registry: DocRegistry,
    env_key: &str,
) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    config::disabled_by_env(env_key).apply(&mut config);
    custom_wrap_handler(config, assets, registry)
}
