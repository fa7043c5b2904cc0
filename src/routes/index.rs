use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::index_handler::{serve_index, IndexPage};

#[get("/")]
pub async fn index(index_page: web::Data<IndexPage>) -> Result<HttpResponse> {
    serve_index(index_page).await
}
