mod about;
mod archive;
mod health_check;
mod home;
mod issue;
pub mod layout;

pub use about::about;
pub use archive::{archive, ArchiveParams};
pub use health_check::health_check;
pub use home::home;
pub use issue::issue_page;

use crate::utils::error_chain_fmt;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

#[derive(thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::html())
            .body(layout::page(
                "Something went wrong",
                r#"<section class="error">
    <h1>Something went wrong.</h1>
    <p>We couldn't load this page right now. Please try again in a moment.</p>
    <p><a href="/">← Back to the latest breakdowns</a></p>
</section>"#,
            ))
    }
}
