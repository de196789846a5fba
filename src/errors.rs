use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::services::validation::FieldError;
use crate::services::weight::WeightError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("dados do formulário inválidos")]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Weight(#[from] WeightError),

    #[error("erro ao processar agendamento")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::Json(serde_json::json!({ "errors": errors })),
            )
                .into_response(),
            AppError::Weight(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response(),
            AppError::Internal(e) => {
                tracing::error!(error = %e, "unexpected failure while composing appointment");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(serde_json::json!({
                        "error": "Erro ao processar agendamento. Tente novamente."
                    })),
                )
                    .into_response()
            }
        }
    }
}
