use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use devmock_core::GenerationError;
use log::warn;
use serde::Serialize;
use thiserror::Error;

/// Failure of a request, rendered as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error(transparent)]
	Generation(#[from] GenerationError),
	#[error("malformed request body: {0}")]
	MalformedBody(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorBody {
	error: String,
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Generation(GenerationError::Render { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
			_ => StatusCode::BAD_REQUEST,
		}
	}

	fn error_response(&self) -> HttpResponse {
		warn!("rejecting request: {self}");
		HttpResponse::build(self.status_code()).json(ErrorBody { error: self.to_string() })
	}
}

#[cfg(test)]
mod tests {
	use actix_web::body::to_bytes;

	use super::*;

	#[actix_web::test]
	async fn empty_input_is_bad_request_with_message() {
		let error = ApiError::from(GenerationError::EmptyInput { field: "text" });
		let response = error.error_response();
		assert_eq!(response.status(), StatusCode::BAD_REQUEST);
		let body = to_bytes(response.into_body()).await.expect("body");
		let value: serde_json::Value = serde_json::from_slice(&body).expect("json");
		assert_eq!(value["error"], error.to_string());
	}

	#[test]
	fn render_failure_is_server_error() {
		let error = ApiError::from(GenerationError::Render { reason: "encoder failed".to_owned() });
		assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn malformed_body_names_the_cause() {
		let cause = serde_json::from_str::<serde_json::Value>("{").expect_err("invalid json");
		let error = ApiError::from(cause);
		assert!(error.to_string().starts_with("malformed request body"));
		assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
	}
}
