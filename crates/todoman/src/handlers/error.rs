use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use todoman_core::storage::{storage_error_to_status_code, StorageError};
use todoman_core::todo::ValidationError;

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(storage_error) = self.0.downcast_ref::<StorageError>() {
            let code = storage_error_to_status_code(storage_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else if self.0.downcast_ref::<ValidationError>().is_some() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
