use std::borrow::Cow;

use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::envelope::{Args, ResponseEnvelope};

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// An operation a concrete panel is required to provide was called on a panel that did not provide it.
	#[error("{0} must be overridden by the panel")]
	NotImplemented(&'static str),
	#[error("serializing JSON: {0}")]
	Json(#[from] serde_json::Error),
	#[error("rendering template: {0}")]
	Render(#[from] askama::Error),
}

impl Error {
	fn status_code(&self) -> StatusCode {
		match self {
			Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
			Self::Json(_) | Self::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response {
		error_response(&self, self.status_code())
	}
}

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct BadRequest(pub Cow<'static, str>);

/// Reports `error` to the client script as an envelope, so that it fires its error event.
pub fn error_response(error: &dyn std::error::Error, status_code: StatusCode) -> Response {
	if status_code.is_server_error() {
		tracing::error!(%error, %status_code, "panel request failed");
	} else {
		tracing::debug!(%error, %status_code, "panel request rejected");
	}

	let envelope = ResponseEnvelope::success(
		error.to_string().into(),
		Args::new(),
		status_code.as_u16(),
		Args::new(),
	);
	(status_code, axum::Json(envelope)).into_response()
}

macro_rules! impl_response {
	($struct_name:ident, $status:ident) => {
		impl axum::response::IntoResponse for $struct_name {
			fn into_response(self) -> axum::response::Response {
				crate::error::error_response(&self, http::StatusCode::$status)
			}
		}
	};
}

impl_response!(BadRequest, BAD_REQUEST);
