//! Template Engine
//!
//! Renders the Swagger UI index page using minijinja.

use crate::config::SwaggerConfig;
use minijinja::{Environment, Error as MiniJinjaError};

pub(crate) const INDEX: &str = "index.html";

const DEFAULT_URL: &str = "doc.json";
const DEFAULT_TITLE: &str = "Swagger UI";
const DEFAULT_DOC_EXPANSION: &str = "list";
const DEFAULT_LAYOUT: &str = "StandaloneLayout";

/// Template manager
pub struct Templates {
    env: Environment<'static>,
}

impl Templates {
    /// Create a new template manager
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template(INDEX, include_str!("../templates/index.html"))
            .expect("Failed to add index template");

        Self { env }
    }

    /// Render a template with context
    pub fn render(
        &self,
        name: &str,
        context: &serde_json::Value,
    ) -> Result<String, MiniJinjaError> {
        let template = self.env.get_template(name)?;
        template.render(context)
    }

    /// Render the UI shell for `config`
    pub fn render_index(&self, config: &SwaggerConfig) -> Result<String, MiniJinjaError> {
        self.render(INDEX, &index_context(config))
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::new()
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

fn index_context(config: &SwaggerConfig) -> serde_json::Value {
    serde_json::json!({
        "title": or_default(&config.title, DEFAULT_TITLE),
        "url": or_default(&config.url, DEFAULT_URL),
        "deep_linking": config.deep_linking,
        "doc_expansion": or_default(&config.doc_expansion, DEFAULT_DOC_EXPANSION),
        "default_models_expand_depth": config.default_models_expand_depth,
        "persist_authorization": config.persist_authorization,
        "query_config_enabled": config.query_config_enabled,
        "layout": or_default(&config.layout, DEFAULT_LAYOUT),
        "init_oauth": !config.oauth2_default_client_id.is_empty() || config.oauth2_use_pkce,
        "oauth2_default_client_id": config.oauth2_default_client_id,
        "oauth2_use_pkce": config.oauth2_use_pkce,
    })
}
