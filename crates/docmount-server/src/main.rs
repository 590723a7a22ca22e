//! Docmount - demo server with versioned Swagger UI mounts

mod api;

use anyhow::Result;
use axum::Router;
use docmount_common::config::{Config, LoggingConfig, MountConfig};
use docmount_ui::{config as ui, DocRegistry, SwaggerConfig, SwaggerUi};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    init_logging(&config.logging);

    info!("Starting docmount server...");

    let registry = api::registry()?;
    let app = build_app(&config, &registry);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!("Listening on {}", config.server.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Docmount server shutdown complete");

    Ok(())
}

/// API routes plus one Swagger UI per configured mount
fn build_app(config: &Config, registry: &DocRegistry) -> Router {
    let mut app = api::router();

    for mount in &config.mounts {
        if !registry.contains(&mount.instance_name) {
            warn!(
                "Mount {} serves unregistered instance {:?}; doc.json will fail",
                mount.path, mount.instance_name
            );
        }

        let swagger = SwaggerUi::new(ui_config(mount), registry.clone());
        app = app.merge(swagger.router::<()>(&mount.path));
        info!(
            "Swagger UI for {:?} mounted at {}/",
            mount.instance_name, mount.path
        );
    }

    if config.server.compression {
        app = app.layer(CompressionLayer::new());
    }

    app.layer(TraceLayer::new_for_http())
}

fn ui_config(mount: &MountConfig) -> SwaggerConfig {
    let mut options = vec![
        ui::url(&mount.url),
        ui::title(&mount.title),
        ui::deep_linking(mount.deep_linking),
        ui::doc_expansion(&mount.doc_expansion),
        ui::default_models_expand_depth(mount.default_models_expand_depth),
        ui::instance_name(&mount.instance_name),
        ui::persist_authorization(mount.persist_authorization),
        ui::oauth2_default_client_id(&mount.oauth2_default_client_id),
        ui::oauth2_use_pkce(mount.oauth2_use_pkce),
        ui::query_config_enabled(mount.query_config_enabled),
        ui::layout(&mount.layout),
    ];

    if let Some(key) = &mount.disable_env {
        options.push(ui::disabled_by_env(key));
    }

    SwaggerConfig::build(options)
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},docmount=debug", config.level)));

    let (text, json) = if config.format == "json" {
        (None, Some(fmt::layer().json().with_target(true)))
    } else {
        (Some(fmt::layer().with_target(true).with_level(true)), None)
    };

    tracing_subscriber::registry()
        .with(text)
        .with(json)
        .with(filter)
        .init();
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        return;
    }
    info!("Shutdown signal received");
}
