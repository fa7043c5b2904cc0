use actix_web::{http::header::ContentType, web, HttpResponse, Result};
use std::path::PathBuf;

use crate::models::common::ApiResponse;

/// Location of the HTML page served on `/`, relative to the working directory.
#[derive(Debug, Clone)]
pub struct IndexPage {
    path: PathBuf,
}

impl IndexPage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// The file is read on every request so edits show up without a restart.
pub async fn serve_index(index_page: web::Data<IndexPage>) -> Result<HttpResponse> {
    match tokio::fs::read_to_string(&index_page.path).await {
        Ok(html) => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(html)),
        Err(e) => {
            tracing::warn!("Cannot read index page {}: {}", index_page.path.display(), e);
            Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Index page not found")))
        }
    }
}
