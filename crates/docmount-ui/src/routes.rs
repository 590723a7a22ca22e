//! Swagger UI Routes
//!
//! Binds a [`SwaggerUi`] to axum routes.

use crate::SwaggerUi;
use axum::{
    extract::{rejection::RawPathParamsRejection, MatchedPath, RawPathParams},
    http::Method,
    routing::{any, MethodRouter},
    Router,
};

type Params = Result<RawPathParams, RawPathParamsRejection>;

/// Catch-all handler; method checks happen in the dispatcher
pub(crate) fn handler<S>(ui: SwaggerUi) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    any(move |method: Method, route: Option<MatchedPath>, params: Params| {
        let ui = ui.clone();
        async move {
            let params = match params {
                Ok(params) => params,
                Err(rejection) => return ui.not_found(&method, &rejection.to_string()),
            };

            let route = route.as_ref().map(MatchedPath::as_str);
            match sub_path(route, params.iter()) {
                Some(path) => ui.serve(&method, path),
                None => ui.not_found(&method, route.unwrap_or_default()),
            }
        }
    })
}

/// Pick the sub-path out of the captures of `route`
///
/// No captures means the index. Otherwise the capture named by the route's
/// `*wildcard` wins, falling back to a lone `:param`.
fn sub_path<'a>(
    route: Option<&str>,
    params: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Option<&'a str> {
    let params: Vec<_> = params.into_iter().collect();
    if params.is_empty() {
        return Some("");
    }

    let wildcard =
        route.and_then(|route| route.split('/').find_map(|segment| segment.strip_prefix('*')));

    match (wildcard, params.as_slice()) {
        (Some(name), _) => params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value),
        (None, [(_, value)]) => Some(*value),
        (None, _) => None,
    }
}

/// Create the router for a mount at `prefix`
pub(crate) fn create_router<S>(ui: SwaggerUi, prefix: &str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let prefix = prefix.trim_end_matches('/');
    let index = format!("{}/", prefix);

    let router = Router::new()
        // Index page and assets
        .route(&index, handler(ui.clone()))
        .route(&format!("{}/*path", prefix), handler(ui.clone()));

    if prefix.is_empty() {
        return router;
    }

    // Bare prefix redirects so relative asset URLs resolve
    let redirect = any(move |method: Method| {
        let ui = ui.clone();
        let location = index.clone();
        async move { ui.redirect(&method, &location) }
    });

    router.route(prefix, redirect)
}
