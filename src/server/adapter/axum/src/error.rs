/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quire_server::QuireError;

/// Newtype wrapper to implement `IntoResponse` for `QuireError`.
pub(crate) struct AxumError(pub QuireError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.message(),
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<QuireError> for AxumError {
  fn from(err: QuireError) -> Self {
    Self(err)
  }
}
