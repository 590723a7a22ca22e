//! Documentation registry
//!
//! Maps instance names to documentation providers. A registry is handed to
//! each mount when it is built; the mount keeps a snapshot, so registering
//! more documents later does not affect mounts that already exist.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Name used when a mount does not select an instance
pub const DEFAULT_INSTANCE: &str = "swagger";

/// Source of a documentation JSON document
pub trait DocProvider: Send + Sync {
    /// The document, served byte-for-byte
    fn read_doc(&self) -> String;
}

impl DocProvider for String {
    fn read_doc(&self) -> String {
        self.clone()
    }
}

impl DocProvider for &'static str {
    fn read_doc(&self) -> String {
        (*self).to_string()
    }
}

/// Name-keyed documentation registry
#[derive(Clone, Default)]
pub struct DocRegistry {
    docs: Arc<HashMap<String, Arc<dyn DocProvider>>>,
}

fn resolve(name: &str) -> &str {
    if name.is_empty() {
        DEFAULT_INSTANCE
    } else {
        name
    }
}

impl DocRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `provider` under `name`, replacing any previous entry
    ///
    /// An empty name registers the default instance.
    pub fn register(&mut self, name: impl Into<String>, provider: impl DocProvider + 'static) {
        let name = name.into();
        let key = resolve(&name).to_string();
        Arc::make_mut(&mut self.docs).insert(key, Arc::new(provider));
    }

    /// Chaining form of [`register`](Self::register)
    pub fn with(mut self, name: impl Into<String>, provider: impl DocProvider + 'static) -> Self {
        self.register(name, provider);
        self
    }

    /// Serialize a generated OpenAPI document once and register the result
    pub fn register_openapi(
        &mut self,
        name: impl Into<String>,
        openapi: &utoipa::openapi::OpenApi,
    ) -> crate::Result<()> {
        let json = openapi.to_pretty_json()?;
        self.register(name, json);
        Ok(())
    }

    /// Look up an instance; an empty name selects [`DEFAULT_INSTANCE`]
    pub fn get(&self, name: &str) -> Option<Arc<dyn DocProvider>> {
        self.docs.get(resolve(name)).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.docs.contains_key(resolve(name))
    }

    /// Registered instance names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.docs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl fmt::Debug for DocRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocRegistry")
            .field("instances", &self.names())
            .finish()
    }
}
