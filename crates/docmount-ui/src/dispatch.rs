//! Request dispatch
//!
//! Decides what a path under a mount resolves to and builds the response.
//! Checks run in a fixed order: kill switch, method, then path.

use crate::assets::AssetStore;
use crate::config::SwaggerConfig;
use crate::registry::DocRegistry;
use crate::templates::{Templates, INDEX};
use crate::{Error, Result};
use axum::{
    body::Body,
    http::{header, Method, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, error};

pub(crate) const DOC_JSON: &str = "doc.json";

/// What a sub-path resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    /// The rendered UI shell
    Index,
    /// The registered documentation JSON
    Doc,
    /// Anything else, looked up in the asset store
    Asset(&'a str),
}

/// Classify the path captured below a mount
///
/// A leading `/` is ignored. `<instance>/doc.json` is accepted as an alias
/// for `doc.json` when the mount has an instance name.
pub fn classify<'a>(path: &'a str, instance_name: &str) -> Target<'a> {
    let path = path.strip_prefix('/').unwrap_or(path);

    if path.is_empty() || path == INDEX {
        return Target::Index;
    }
    if path == DOC_JSON {
        return Target::Doc;
    }
    if !instance_name.is_empty()
        && path
            .strip_prefix(instance_name)
            .and_then(|rest| rest.strip_prefix('/'))
            == Some(DOC_JSON)
    {
        return Target::Doc;
    }

    Target::Asset(path)
}

/// Per-mount request handler state
pub struct Dispatcher {
    config: SwaggerConfig,
    registry: DocRegistry,
    assets: Arc<dyn AssetStore>,
    templates: Templates,
}

impl Dispatcher {
    pub fn new(config: SwaggerConfig, registry: DocRegistry, assets: Arc<dyn AssetStore>) -> Self {
        Self {
            config,
            registry,
            assets,
            templates: Templates::new(),
        }
    }

    pub fn config(&self) -> &SwaggerConfig {
        &self.config
    }

    pub fn registry(&self) -> &DocRegistry {
        &self.registry
    }

    /// Handle a request for `path` below the mount
    pub fn dispatch(&self, method: &Method, path: &str) -> Result<Response> {
        self.check_enabled()?;
        let head = check_method(method)?;

        let response = match classify(path, &self.config.instance_name) {
            Target::Index => self.index()?,
            Target::Doc => self.doc()?,
            Target::Asset(path) => self.asset(path)?,
        };

        Ok(if head { strip_body(response) } else { response })
    }

    /// Handle a request for the bare mount prefix
    ///
    /// Relative asset URLs in the index page only resolve below a trailing
    /// slash, so the prefix itself redirects there.
    pub fn redirect(&self, method: &Method, location: &str) -> Result<Response> {
        self.check_enabled()?;
        check_method(method)?;
        Ok(Redirect::permanent(location).into_response())
    }

    /// Handle a request whose sub-path could not be taken from the route
    ///
    /// The kill switch and method checks still come first.
    pub fn not_found(&self, method: &Method, reason: &str) -> Result<Response> {
        self.check_enabled()?;
        check_method(method)?;
        Err(Error::AssetNotFound(reason.to_string()))
    }

    /// Turn a dispatch result into a response, logging failures
    pub fn respond(&self, result: Result<Response>) -> Response {
        match result {
            Ok(response) => response,
            Err(e) => {
                match &e {
                    Error::DocNotRegistered(_) | Error::Template(_) | Error::Serialize(_) => {
                        error!(instance = %self.config.instance_name, "Swagger UI error: {}", e);
                    }
                    _ => {
                        debug!(instance = %self.config.instance_name, "Swagger UI: {}", e);
                    }
                }
                e.into_response()
            }
        }
    }

    fn check_enabled(&self) -> Result<()> {
        if self.config.is_disabled() {
            return Err(Error::Disabled);
        }
        Ok(())
    }

    fn index(&self) -> Result<Response> {
        let html = self.templates.render_index(&self.config)?;
        Ok(Html(html).into_response())
    }

    fn doc(&self) -> Result<Response> {
        let name = &self.config.instance_name;
        let provider = self
            .registry
            .get(name)
            .ok_or_else(|| Error::DocNotRegistered(name.clone()))?;

        Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            provider.read_doc(),
        )
            .into_response())
    }

    fn asset(&self, path: &str) -> Result<Response> {
        let asset = self
            .assets
            .get(path)
            .ok_or_else(|| Error::AssetNotFound(path.to_string()))?;

        let body = match asset.data {
            Cow::Borrowed(bytes) => Body::from(bytes),
            Cow::Owned(bytes) => Body::from(bytes),
        };

        Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, asset.content_type.into_owned())],
            body,
        )
            .into_response())
    }
}

/// `Ok(true)` for HEAD, `Ok(false)` for GET
fn check_method(method: &Method) -> Result<bool> {
    match *method {
        Method::GET => Ok(false),
        Method::HEAD => Ok(true),
        _ => Err(Error::MethodNotAllowed(method.clone())),
    }
}

fn strip_body(response: Response) -> Response {
    let (parts, _) = response.into_parts();
    Response::from_parts(parts, Body::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::EmbeddedAssets;
    use crate::config;
    use pretty_assertions::assert_eq;

    fn dispatcher(options: impl IntoIterator<Item = config::UiOption>) -> Dispatcher {
        Dispatcher::new(
            SwaggerConfig::build(options),
            DocRegistry::new().with("", "{\n}"),
            Arc::new(EmbeddedAssets),
        )
    }

    fn content_type(response: &Response) -> &str {
        response.headers()[header::CONTENT_TYPE].to_str().unwrap()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("", ""), Target::Index);
        assert_eq!(classify("/", ""), Target::Index);
        assert_eq!(classify("index.html", ""), Target::Index);
        assert_eq!(classify("/index.html", ""), Target::Index);
        assert_eq!(classify("doc.json", ""), Target::Doc);
        assert_eq!(classify("/doc.json", "v1"), Target::Doc);
        assert_eq!(classify("v1/doc.json", "v1"), Target::Doc);
        assert_eq!(classify("v2/doc.json", "v1"), Target::Asset("v2/doc.json"));
        assert_eq!(classify("v1doc.json", "v1"), Target::Asset("v1doc.json"));
        assert_eq!(classify("/swagger-ui.css", ""), Target::Asset("swagger-ui.css"));
        assert_eq!(classify("INDEX.HTML", ""), Target::Asset("INDEX.HTML"));
        assert_eq!(classify("notfound", ""), Target::Asset("notfound"));
    }

    #[test]
    fn test_index() {
        let response = dispatcher([]).dispatch(&Method::GET, "index.html").unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "text/html; charset=utf-8");
    }

    #[test]
    fn test_doc() {
        let response = dispatcher([]).dispatch(&Method::GET, "doc.json").unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(content_type(&response), "application/json; charset=utf-8");
    }

    #[test]
    fn test_doc_not_registered() {
        let err = dispatcher([config::instance_name("missing")])
            .dispatch(&Method::GET, "doc.json")
            .unwrap_err();
        assert!(matches!(err, Error::DocNotRegistered(ref name) if name == "missing"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_assets() {
        let d = dispatcher([]);
        let response = d.dispatch(&Method::GET, "swagger-ui.css").unwrap();
        assert_eq!(content_type(&response), "text/css; charset=utf-8");

        let err = d.dispatch(&Method::GET, "notfound").unwrap_err();
        assert!(matches!(err, Error::AssetNotFound(_)));
    }

    #[test]
    fn test_methods() {
        let d = dispatcher([]);
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let err = d.dispatch(&method, "index.html").unwrap_err();
            assert_eq!(err.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        }

        let head = d.dispatch(&Method::HEAD, "doc.json").unwrap();
        assert_eq!(head.status(), StatusCode::OK);
        assert_eq!(content_type(&head), "application/json; charset=utf-8");
    }

    #[test]
    fn test_disabled_wins_over_everything() {
        let d = dispatcher([config::disabled_when(|| true)]);
        for (method, path) in [
            (Method::GET, "index.html"),
            (Method::GET, "doc.json"),
            (Method::GET, "favicon-16x16.png"),
            (Method::GET, "notfound"),
            (Method::POST, "index.html"),
        ] {
            let err = d.dispatch(&method, path).unwrap_err();
            assert!(matches!(err, Error::Disabled), "{} {}", method, path);
        }
        assert!(matches!(
            d.redirect(&Method::GET, "/swagger/"),
            Err(Error::Disabled)
        ));
    }

    #[test]
    fn test_redirect() {
        let response = dispatcher([]).redirect(&Method::GET, "/swagger/").unwrap();
        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()[header::LOCATION], "/swagger/");
    }
}
