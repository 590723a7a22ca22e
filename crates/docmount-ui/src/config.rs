//! Swagger UI configuration
//!
//! A [`SwaggerConfig`] is assembled once per mount, either field by field or
//! from an ordered list of [`UiOption`]s, and is read-only afterwards.

use std::fmt;
use std::sync::Arc;

/// Predicate evaluated on every request; `true` hides the whole mount
pub type DisablePredicate = Arc<dyn Fn() -> bool + Send + Sync>;

/// Swagger UI configuration
///
/// `Default` yields the zero value of every field. Empty strings are
/// replaced by UI defaults only when the index page is rendered.
#[derive(Clone, Default)]
pub struct SwaggerConfig {
    /// URL the UI fetches the document from
    pub url: String,
    /// Page title
    pub title: String,
    pub deep_linking: bool,
    /// `list`, `full` or `none`; other values are passed through
    pub doc_expansion: String,
    /// Negative values hide the models section
    pub default_models_expand_depth: i32,
    /// Registry entry served as `doc.json`; empty selects the default instance
    pub instance_name: String,
    pub persist_authorization: bool,
    pub oauth2_default_client_id: String,
    pub oauth2_use_pkce: bool,
    pub query_config_enabled: bool,
    pub layout: String,
    /// Kill switch checked before anything else
    pub disabled: Option<DisablePredicate>,
}

impl fmt::Debug for SwaggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwaggerConfig")
            .field("url", &self.url)
            .field("title", &self.title)
            .field("deep_linking", &self.deep_linking)
            .field("doc_expansion", &self.doc_expansion)
            .field(
                "default_models_expand_depth",
                &self.default_models_expand_depth,
            )
            .field("instance_name", &self.instance_name)
            .field("persist_authorization", &self.persist_authorization)
            .field("oauth2_default_client_id", &self.oauth2_default_client_id)
            .field("oauth2_use_pkce", &self.oauth2_use_pkce)
            .field("query_config_enabled", &self.query_config_enabled)
            .field("layout", &self.layout)
            .field("disabled", &self.disabled.is_some())
            .finish()
    }
}

impl SwaggerConfig {
    /// Start from the zero value and apply `options` in order
    pub fn build(options: impl IntoIterator<Item = UiOption>) -> Self {
        let mut config = Self::default();
        config.apply(options);
        config
    }

    /// Apply `options` in order; later options win
    pub fn apply(&mut self, options: impl IntoIterator<Item = UiOption>) {
        for option in options {
            option.apply(self);
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn deep_linking(mut self, enabled: bool) -> Self {
        self.deep_linking = enabled;
        self
    }

    pub fn doc_expansion(mut self, mode: impl Into<String>) -> Self {
        self.doc_expansion = mode.into();
        self
    }

    pub fn default_models_expand_depth(mut self, depth: i32) -> Self {
        self.default_models_expand_depth = depth;
        self
    }

    pub fn instance_name(mut self, name: impl Into<String>) -> Self {
        self.instance_name = name.into();
        self
    }

    pub fn persist_authorization(mut self, enabled: bool) -> Self {
        self.persist_authorization = enabled;
        self
    }

    pub fn oauth2_default_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.oauth2_default_client_id = client_id.into();
        self
    }

    pub fn oauth2_use_pkce(mut self, enabled: bool) -> Self {
        self.oauth2_use_pkce = enabled;
        self
    }

    pub fn query_config_enabled(mut self, enabled: bool) -> Self {
        self.query_config_enabled = enabled;
        self
    }

    pub fn layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Disable the mount whenever `predicate` returns `true`
    pub fn disabled_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.disabled = Some(Arc::new(predicate));
        self
    }

    /// Whether the kill switch is currently engaged
    pub fn is_disabled(&self) -> bool {
        self.disabled.as_ref().is_some_and(|predicate| predicate())
    }
}

/// A single named configuration option
#[derive(Clone)]
pub enum UiOption {
    Url(String),
    Title(String),
    DeepLinking(bool),
    DocExpansion(String),
    DefaultModelsExpandDepth(i32),
    InstanceName(String),
    PersistAuthorization(bool),
    Oauth2DefaultClientId(String),
    Oauth2UsePkce(bool),
    QueryConfigEnabled(bool),
    Layout(String),
    DisabledWhen(DisablePredicate),
}

impl UiOption {
    /// Write this option's field into `config`
    pub fn apply(self, config: &mut SwaggerConfig) {
        match self {
            UiOption::Url(v) => config.url = v,
            UiOption::Title(v) => config.title = v,
            UiOption::DeepLinking(v) => config.deep_linking = v,
            UiOption::DocExpansion(v) => config.doc_expansion = v,
            UiOption::DefaultModelsExpandDepth(v) => config.default_models_expand_depth = v,
            UiOption::InstanceName(v) => config.instance_name = v,
            UiOption::PersistAuthorization(v) => config.persist_authorization = v,
            UiOption::Oauth2DefaultClientId(v) => config.oauth2_default_client_id = v,
            UiOption::Oauth2UsePkce(v) => config.oauth2_use_pkce = v,
            UiOption::QueryConfigEnabled(v) => config.query_config_enabled = v,
            UiOption::Layout(v) => config.layout = v,
            UiOption::DisabledWhen(v) => config.disabled = Some(v),
        }
    }
}

impl fmt::Debug for UiOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiOption::Url(v) => f.debug_tuple("Url").field(v).finish(),
            UiOption::Title(v) => f.debug_tuple("Title").field(v).finish(),
            UiOption::DeepLinking(v) => f.debug_tuple("DeepLinking").field(v).finish(),
            UiOption::DocExpansion(v) => f.debug_tuple("DocExpansion").field(v).finish(),
            UiOption::DefaultModelsExpandDepth(v) => {
                f.debug_tuple("DefaultModelsExpandDepth").field(v).finish()
            }
            UiOption::InstanceName(v) => f.debug_tuple("InstanceName").field(v).finish(),
            UiOption::PersistAuthorization(v) => {
                f.debug_tuple("PersistAuthorization").field(v).finish()
            }
            UiOption::Oauth2DefaultClientId(v) => {
                f.debug_tuple("Oauth2DefaultClientId").field(v).finish()
            }
            UiOption::Oauth2UsePkce(v) => f.debug_tuple("Oauth2UsePkce").field(v).finish(),
            UiOption::QueryConfigEnabled(v) => {
                f.debug_tuple("QueryConfigEnabled").field(v).finish()
            }
            UiOption::Layout(v) => f.debug_tuple("Layout").field(v).finish(),
            UiOption::DisabledWhen(_) => f.write_str("DisabledWhen(..)"),
        }
    }
}

/// URL the UI fetches the document from
pub fn url(url: impl Into<String>) -> UiOption {
    UiOption::Url(url.into())
}

pub fn title(title: impl Into<String>) -> UiOption {
    UiOption::Title(title.into())
}

pub fn deep_linking(enabled: bool) -> UiOption {
    UiOption::DeepLinking(enabled)
}

/// Initial expansion of the operation tree: `list`, `full` or `none`
pub fn doc_expansion(mode: impl Into<String>) -> UiOption {
    UiOption::DocExpansion(mode.into())
}

/// Model tree depth; `-1` hides the models section entirely
pub fn default_models_expand_depth(depth: i32) -> UiOption {
    UiOption::DefaultModelsExpandDepth(depth)
}

/// Registry entry to serve; empty selects the default instance
pub fn instance_name(name: impl Into<String>) -> UiOption {
    UiOption::InstanceName(name.into())
}

pub fn persist_authorization(enabled: bool) -> UiOption {
    UiOption::PersistAuthorization(enabled)
}

pub fn oauth2_default_client_id(client_id: impl Into<String>) -> UiOption {
    UiOption::Oauth2DefaultClientId(client_id.into())
}

pub fn oauth2_use_pkce(enabled: bool) -> UiOption {
    UiOption::Oauth2UsePkce(enabled)
}

pub fn query_config_enabled(enabled: bool) -> UiOption {
    UiOption::QueryConfigEnabled(enabled)
}

pub fn layout(layout: impl Into<String>) -> UiOption {
    UiOption::Layout(layout.into())
}

pub fn disabled_when<F>(predicate: F) -> UiOption
where
    F: Fn() -> bool + Send + Sync + 'static,
{
    UiOption::DisabledWhen(Arc::new(predicate))
}

/// Disable when the environment variable `key` is exactly `true`
///
/// The variable is read on every call, so flipping it takes effect
/// without a restart.
pub fn disabled_by_env(key: impl Into<String>) -> UiOption {
    let key = key.into();
    disabled_when(move || std::env::var(&key).is_ok_and(|value| value == "true"))
}
