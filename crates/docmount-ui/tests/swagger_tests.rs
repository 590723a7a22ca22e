use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use axum_test::TestServer;
use docmount_ui::{
    config, custom_wrap_handler, disabling_custom_wrap_handler, disabling_wrap_handler,
    wrap_handler, DocProvider, DocRegistry, EmbeddedAssets, SwaggerConfig, SwaggerUi,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use tower_http::compression::CompressionLayer;

struct MockedDoc;

impl DocProvider for MockedDoc {
    fn read_doc(&self) -> String {
        "{\n}".to_string()
    }
}

fn registry() -> DocRegistry {
    DocRegistry::new().with("", MockedDoc)
}

fn server(app: Router) -> TestServer {
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_wrap_handler() {
    let app = Router::new().route(
        "/*any",
        wrap_handler(
            EmbeddedAssets,
            registry(),
            [config::url("https://example.com/swagger/doc.json")],
        ),
    );
    let server = server(app);

    let response = server.get("/index.html").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .text()
        .contains(r#"url: "https://example.com/swagger/doc.json","#));
}

#[tokio::test]
async fn test_custom_wrap_handler() {
    let app = Router::new().route(
        "/*any",
        custom_wrap_handler(SwaggerConfig::default(), EmbeddedAssets, registry()),
    );
    let server = server(app);

    let index = server.get("/index.html").await;
    assert_eq!(index.status_code(), StatusCode::OK);
    assert_eq!(index.header(header::CONTENT_TYPE), "text/html; charset=utf-8");

    let doc = server.get("/doc.json").await;
    assert_eq!(doc.status_code(), StatusCode::OK);
    assert_eq!(
        doc.header(header::CONTENT_TYPE),
        "application/json; charset=utf-8"
    );
    assert_eq!(doc.text(), MockedDoc.read_doc());

    let favicon = server.get("/favicon-16x16.png").await;
    assert_eq!(favicon.status_code(), StatusCode::OK);
    assert_eq!(favicon.header(header::CONTENT_TYPE), "image/png");

    let css = server.get("/swagger-ui.css").await;
    assert_eq!(css.status_code(), StatusCode::OK);
    assert_eq!(css.header(header::CONTENT_TYPE), "text/css; charset=utf-8");

    let js = server.get("/swagger-ui-bundle.js").await;
    assert_eq!(js.status_code(), StatusCode::OK);
    assert_eq!(js.header(header::CONTENT_TYPE), "application/javascript");

    assert_eq!(
        server.get("/notfound").await.status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        server.post("/index.html").await.status_code(),
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        server.put("/index.html").await.status_code(),
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn test_doc_is_passed_through_verbatim() {
    let raw = "{ \"openapi\" :\"3.0.3\",\n\t\"paths\":{} }";
    let ui = SwaggerUi::new(SwaggerConfig::default(), DocRegistry::new().with("", raw));
    let server = server(ui.router("/docs"));

    let doc = server.get("/docs/doc.json").await;
    assert_eq!(doc.status_code(), StatusCode::OK);
    assert_eq!(doc.as_bytes().as_ref(), raw.as_bytes());
}

#[tokio::test]
async fn test_missing_instance_is_internal_error() {
    let ui = SwaggerUi::new(
        SwaggerConfig::build([config::instance_name("v9")]),
        registry(),
    );
    let server = server(ui.router("/docs"));

    let doc = server.get("/docs/doc.json").await;
    assert_eq!(doc.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(doc.text().contains("v9"));

    // The rest of the mount keeps working
    assert_eq!(
        server.get("/docs/index.html").await.status_code(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_disabling_wrap_handler() {
    let key = "DOCMOUNT_SWAGGER_DISABLE";
    std::env::remove_var(key);

    let app = Router::new().route(
        "/simple/*any",
        disabling_wrap_handler(EmbeddedAssets, registry(), key, []),
    );
    let server = server(app);

    assert_eq!(
        server.get("/simple/index.html").await.status_code(),
        StatusCode::OK
    );
    assert_eq!(
        server.get("/simple/doc.json").await.status_code(),
        StatusCode::OK
    );
    assert_eq!(
        server.get("/simple/favicon-16x16.png").await.status_code(),
        StatusCode::OK
    );
    assert_eq!(
        server.get("/simple/notfound").await.status_code(),
        StatusCode::NOT_FOUND
    );

    // Read per request, no restart needed
    std::env::set_var(key, "true");

    for path in [
        "/simple/index.html",
        "/simple/doc.json",
        "/simple/oauth2-redirect.html",
        "/simple/notfound",
    ] {
        assert_eq!(
            server.get(path).await.status_code(),
            StatusCode::NOT_FOUND,
            "{}",
            path
        );
    }
    assert_eq!(
        server.post("/simple/index.html").await.status_code(),
        StatusCode::NOT_FOUND
    );

    std::env::remove_var(key);
}

#[tokio::test]
async fn test_disabling_custom_wrap_handler() {
    let key = "DOCMOUNT_SWAGGER_DISABLE2";
    std::env::remove_var(key);

    let app = Router::new().route(
        "/simple/*any",
        disabling_custom_wrap_handler(SwaggerConfig::default(), EmbeddedAssets, registry(), key),
    );
    let server = server(app);

    assert_eq!(
        server.get("/simple/index.html").await.status_code(),
        StatusCode::OK
    );

    std::env::set_var(key, "true");
    assert_eq!(
        server.get("/simple/index.html").await.status_code(),
        StatusCode::NOT_FOUND
    );

    // Only the exact lowercase literal disables
    std::env::set_var(key, "True");
    assert_eq!(
        server.get("/simple/index.html").await.status_code(),
        StatusCode::OK
    );

    std::env::remove_var(key);
}

#[tokio::test]
async fn test_disabled_predicate_applies_to_every_route() {
    let disabled = Arc::new(AtomicBool::new(true));
    let probe = disabled.clone();
    let ui = SwaggerUi::new(
        SwaggerConfig::default().disabled_when(move || probe.load(Ordering::SeqCst)),
        registry(),
    );
    let server = server(ui.router("/swagger"));

    for path in [
        "/swagger",
        "/swagger/",
        "/swagger/index.html",
        "/swagger/doc.json",
        "/swagger/swagger-ui.css",
        "/swagger/notfound",
    ] {
        assert_eq!(
            server.get(path).await.status_code(),
            StatusCode::NOT_FOUND,
            "{}",
            path
        );
        assert_eq!(
            server.delete(path).await.status_code(),
            StatusCode::NOT_FOUND,
            "{}",
            path
        );
    }

    disabled.store(false, Ordering::SeqCst);
    assert_eq!(server.get("/swagger/").await.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_router_index_and_redirect() {
    let ui = SwaggerUi::new(SwaggerConfig::default(), registry());
    let server = server(ui.router("/swagger"));

    let index = server.get("/swagger/").await;
    assert_eq!(index.status_code(), StatusCode::OK);
    assert_eq!(index.header(header::CONTENT_TYPE), "text/html; charset=utf-8");
    assert_eq!(index.text(), server.get("/swagger/index.html").await.text());

    let redirect = server.get("/swagger").await;
    assert_eq!(redirect.status_code(), StatusCode::PERMANENT_REDIRECT);
    assert_eq!(redirect.header(header::LOCATION), "/swagger/");

    assert_eq!(
        server.post("/swagger").await.status_code(),
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn test_undecodable_path_is_not_found() {
    let ui = SwaggerUi::new(SwaggerConfig::default(), registry());
    let server = server(ui.router("/swagger"));

    for path in ["/swagger/%FF", "/swagger/%FF/doc.json"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{}", path);
        assert!(response.text().is_empty(), "{}", path);
    }

    assert_eq!(
        server.post("/swagger/%FF").await.status_code(),
        StatusCode::METHOD_NOT_ALLOWED
    );
}

#[tokio::test]
async fn test_host_route_with_several_captures() {
    let ui = SwaggerUi::new(SwaggerConfig::default(), registry());
    let server = server(
        Router::new()
            .route("/docs/:ver/*rest", ui.handler())
            .route("/pair/:a/:b", ui.handler()),
    );

    let doc = server.get("/docs/v1/doc.json").await;
    assert_eq!(doc.status_code(), StatusCode::OK);
    assert_eq!(
        doc.header(header::CONTENT_TYPE),
        "application/json; charset=utf-8"
    );
    assert_eq!(doc.text(), MockedDoc.read_doc());

    let css = server.get("/docs/v1/swagger-ui.css").await;
    assert_eq!(css.header(header::CONTENT_TYPE), "text/css; charset=utf-8");

    assert_eq!(
        server.get("/docs/v1/index.html").await.header(header::CONTENT_TYPE),
        "text/html; charset=utf-8"
    );
    assert_eq!(
        server.get("/pair/doc.json/x").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_head_has_no_body() {
    let ui = SwaggerUi::new(SwaggerConfig::default(), registry());
    let app: Router = ui.router("/swagger");

    let request = Request::builder()
        .method(Method::HEAD)
        .uri("/swagger/swagger-ui.css")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/css; charset=utf-8"
    );
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_multiple_instances() {
    let registry = DocRegistry::new()
        .with("v1", r#"{"info":{"version":"1"}}"#)
        .with("v2", r#"{"info":{"version":"2"}}"#);

    let v1 = SwaggerUi::new(
        SwaggerConfig::build([config::instance_name("v1")]),
        registry.clone(),
    );
    let v2 = SwaggerUi::new(
        SwaggerConfig::build([config::instance_name("v2")]),
        registry,
    );
    let app: Router = v1.router("/swagger/v1").merge(v2.router("/swagger/v2"));
    let server = server(app);

    assert_eq!(
        server.get("/swagger/v1/doc.json").await.text(),
        r#"{"info":{"version":"1"}}"#
    );
    assert_eq!(
        server.get("/swagger/v2/doc.json").await.text(),
        r#"{"info":{"version":"2"}}"#
    );
    assert_eq!(
        server.get("/swagger/v1/v1/doc.json").await.text(),
        r#"{"info":{"version":"1"}}"#
    );
    assert_eq!(
        server.get("/swagger/v1/v2/doc.json").await.status_code(),
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_with_gzip_middleware() {
    let app = Router::new()
        .route("/*any", wrap_handler(EmbeddedAssets, registry(), []))
        .layer(CompressionLayer::new());
    let server = server(app);

    let cases = [
        ("/index.html", "text/html; charset=utf-8"),
        ("/swagger-ui.css", "text/css; charset=utf-8"),
        ("/swagger-ui-bundle.js", "application/javascript"),
        ("/doc.json", "application/json; charset=utf-8"),
    ];
    for (path, content_type) in cases {
        let response = server
            .get(path)
            .add_header(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip"))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK, "{}", path);
        assert_eq!(response.header(header::CONTENT_TYPE), content_type, "{}", path);
    }

    let css = server
        .get("/swagger-ui.css")
        .add_header(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip"))
        .await;
    assert_eq!(css.header(header::CONTENT_ENCODING), "gzip");
}
