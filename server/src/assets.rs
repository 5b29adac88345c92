//! Serves the compiled frontend bundle embedded at build time.
//!
//! Unknown paths fall back to `index.html` so the single page app can be
//! reloaded on any URL. Without an embedded bundle every request is a 404.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use log::warn;
use mime_guess::{from_path, Mime};

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

pub struct Asset<'a> {
    pub file: &'a File<'a>,
    pub mime: Mime,
}

/// Finds the file answering `request_path`, falling back to the index page.
pub fn resolve<'a>(dir: &'a Dir<'a>, request_path: &str) -> Option<Asset<'a>> {
    let path = request_path.trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };

    let (file, name) = match dir.get_file(path) {
        Some(file) => (file, path),
        None => (dir.get_file(INDEX)?, INDEX),
    };
    Some(Asset {
        file,
        mime: from_path(name).first_or_octet_stream(),
    })
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve(&STATIC_DIR, req.path()) {
        Some(asset) => HttpResponse::Ok()
            .content_type(asset.mime.as_ref())
            .body(asset.file.contents().to_vec()),
        None => {
            warn!("No frontend bundle embedded; build the frontend before the server");
            HttpResponse::NotFound().body("Not Found")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    static SITE: Dir = include_dir!("$CARGO_MANIFEST_DIR/fixtures/site");
    static EMPTY: Dir = Dir::new("", &[]);

    #[test]
    fn root_serves_index() {
        let asset = resolve(&SITE, "/").unwrap();
        assert_eq!(asset.file.path(), Path::new("index.html"));
        assert_eq!(asset.mime.type_(), "text");
        assert_eq!(asset.mime.subtype(), "html");
    }

    #[test]
    fn existing_asset_is_served_with_its_type() {
        let asset = resolve(&SITE, "/app.js").unwrap();
        assert_eq!(asset.file.path(), Path::new("app.js"));
        assert_eq!(asset.mime.subtype(), "javascript");
    }

    #[test]
    fn unknown_route_falls_back_to_index() {
        let asset = resolve(&SITE, "/resources/42").unwrap();
        assert_eq!(asset.file.path(), Path::new("index.html"));
        assert_eq!(asset.mime.subtype(), "html");
    }

    #[test]
    fn nothing_to_serve_without_bundle() {
        assert!(resolve(&EMPTY, "/").is_none());
        assert!(resolve(&EMPTY, "/app.js").is_none());
    }
}
