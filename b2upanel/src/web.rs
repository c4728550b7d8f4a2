//! Running panels behind axum.

use std::borrow::Cow;

use axum::async_trait;
use axum::body::Body;
use axum::extract::{self, FromRequest, RequestParts};
use axum::response::{IntoResponse, Response};
use headers::HeaderMapExt as _;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};

use crate::action::{Panel, PanelAction, ResponseSink};
use crate::error::{BadRequest, Error};
use crate::params::{form, reconcile_args, Parameters};

/// A response sink that becomes an HTTP response.
#[derive(Debug, Default)]
pub struct HttpResponse {
	headers: HeaderMap,
	content: String,
}

impl ResponseSink for HttpResponse {
	fn set_header(&mut self, name: HeaderName, value: HeaderValue) -> &mut Self {
		self.headers.insert(name, value);
		self
	}

	fn set_content(&mut self, content: String) -> &mut Self {
		self.content = content;
		self
	}
}

impl IntoResponse for HttpResponse {
	fn into_response(self) -> Response {
		(self.headers, self.content).into_response()
	}
}

/// The parameters of a panel request: the query string, overridden by the body, with the panel args already lifted to the top level.
///
/// Bodies may be urlencoded forms, with bracketed keys for nesting, or JSON objects.
#[derive(Debug)]
pub struct PanelRequest(pub Parameters);

#[derive(Clone, Copy, PartialEq, Eq)]
enum BodyKind {
	Json,
	Form,
	None,
}

fn body_kind(req: &RequestParts<Body>) -> BodyKind {
	if matches!(*req.method(), Method::GET | Method::HEAD) {
		return BodyKind::None;
	}
	let mime = match req.headers().typed_get::<headers::ContentType>() {
		Some(content_type) => mime::Mime::from(content_type),
		None => return BodyKind::None,
	};
	let is_json = mime.subtype() == mime::JSON || mime.suffix() == Some(mime::JSON);
	if mime.type_() == mime::APPLICATION && is_json {
		BodyKind::Json
	} else if mime.essence_str() == mime::APPLICATION_WWW_FORM_URLENCODED.essence_str() {
		BodyKind::Form
	} else {
		BodyKind::None
	}
}

fn str_param<'a>(params: &'a Parameters, key: &str) -> Option<&'a str> {
	params.get(key).and_then(|value| value.as_str())
}

fn rejection(rejection: impl std::fmt::Display) -> BadRequest {
	BadRequest(Cow::Owned(rejection.to_string()))
}

#[async_trait]
impl FromRequest<Body> for PanelRequest {
	type Rejection = BadRequest;

	async fn from_request(req: &mut RequestParts<Body>) -> Result<Self, Self::Rejection> {
		let extract::Query(query) = extract::Query::<Vec<(String, String)>>::from_request(req)
			.await
			.map_err(rejection)?;
		let mut params = form::decode(query);

		let body = match body_kind(req) {
			BodyKind::Json => {
				extract::Json::<Parameters>::from_request(req)
					.await
					.map_err(rejection)?
					.0
			}
			BodyKind::Form => {
				let extract::Form(pairs) = extract::Form::<Vec<(String, String)>>::from_request(req)
					.await
					.map_err(rejection)?;
				form::decode(pairs)
			}
			BodyKind::None => Parameters::new(),
		};
		params.extend(body);

		let params = reconcile_args(params);
		tracing::debug!(
			panel = str_param(&params, crate::params::ID),
			endpoint = str_param(&params, crate::params::ENDPOINT),
			has_options = params.contains_key(crate::params::OPTIONS),
			num_params = params.len(),
			"panel request"
		);
		Ok(Self(params))
	}
}

/// Runs `action` against the request parameters and returns what it wrote.
pub fn dispatch<A: PanelAction>(
	action: &A,
	params: Parameters,
	loading_label: impl Into<Cow<'static, str>>,
) -> Result<HttpResponse, Error> {
	let mut panel = Panel::new(HttpResponse::default(), params).with_loading_label(loading_label);
	action.submit(&mut panel)?;
	Ok(panel.into_response())
}

#[cfg(test)]
mod test;
