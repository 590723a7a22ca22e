//! Static UI assets
//!
//! The Swagger UI distribution bundled with `utoipa-swagger-ui` is embedded
//! into the binary; any other [`AssetStore`] can be swapped in per mount.

use std::borrow::Cow;
use std::path::Path;
use std::sync::Arc;

/// Dist files answered by the mount's own index page
const RENDERED: [&str; 2] = ["index.html", "swagger-initializer.js"];

/// A static file ready to be served
#[derive(Debug, Clone)]
pub struct Asset {
    pub data: Cow<'static, [u8]>,
    pub content_type: Cow<'static, str>,
}

/// Path-keyed store of static files
pub trait AssetStore: Send + Sync {
    /// Look up a file by its path relative to the mount
    fn get(&self, path: &str) -> Option<Asset>;
}

/// The embedded Swagger UI bundle
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedAssets;

impl AssetStore for EmbeddedAssets {
    fn get(&self, path: &str) -> Option<Asset> {
        if path.is_empty() || RENDERED.contains(&path) {
            return None;
        }

        // The config only feeds swagger-initializer.js, which is never served
        let config = Arc::new(utoipa_swagger_ui::Config::default());
        match utoipa_swagger_ui::serve(path, config) {
            Ok(file) => file.map(|file| Asset {
                data: file.bytes,
                content_type: content_type(path),
            }),
            Err(e) => {
                tracing::warn!("Failed to read embedded asset {}: {}", path, e);
                None
            }
        }
    }
}

/// Response Content-Type for a file, chosen by extension
pub fn content_type(path: &str) -> Cow<'static, str> {
    let ext = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("html" | "htm") => Cow::Borrowed("text/html; charset=utf-8"),
        Some("css") => Cow::Borrowed("text/css; charset=utf-8"),
        Some("js") => Cow::Borrowed("application/javascript"),
        Some("json" | "map") => Cow::Borrowed("application/json; charset=utf-8"),
        Some("png") => Cow::Borrowed("image/png"),
        _ => Cow::Owned(
            mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string(),
        ),
    }
}
