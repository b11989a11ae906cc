//! Viewer error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors a viewer request can end in
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Bank {0} not found")]
    BankNotFound(usize),
    #[error("Wave {wave} not found in bank {bank}")]
    WaveNotFound { bank: usize, wave: usize },
    #[error("Rendering failed: {0}")]
    Render(#[from] shapeshifter::ShapeshifterError),
    #[error("Encoding task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl ViewerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BankNotFound(_) | Self::WaveNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Render(_) | Self::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ViewerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, self.to_string()).into_response()
    }
}
