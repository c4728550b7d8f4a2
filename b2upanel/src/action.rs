use std::borrow::Cow;

use http::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::envelope::{merge_args, Args, ResponseEnvelope};
use crate::error::Error;
use crate::pagination::{self, widget};
use crate::params::{self, Parameters};

/// Where a panel writes its outgoing response.
pub trait ResponseSink {
	fn set_header(&mut self, name: HeaderName, value: HeaderValue) -> &mut Self;
	fn set_content(&mut self, content: String) -> &mut Self;
}

/// Where a panel reads the parameters of the request it is handling.
pub trait ParameterSource {
	fn parameters(&self) -> &Parameters;
}

impl ParameterSource for Parameters {
	fn parameters(&self) -> &Parameters {
		self
	}
}

/// An endpoint that a panel posts to.
pub trait PanelAction {
	/// Handles a submission from the panel, such as a form post or a page change.
	///
	/// Every concrete panel has to provide this; the default always fails.
	fn submit<S: ResponseSink, P: ParameterSource>(
		&self,
		_panel: &mut Panel<S, P>,
	) -> Result<(), Error> {
		Err(Error::NotImplemented("submit"))
	}
}

pub const DEFAULT_LOADING_LABEL: &str = "Loading...";

/// The base controller for a single panel request.
pub struct Panel<S, P> {
	response: S,
	parameters: P,
	loading_label: Cow<'static, str>,
}

impl<S: ResponseSink, P: ParameterSource> Panel<S, P> {
	pub fn new(response: S, parameters: P) -> Self {
		Self {
			response,
			parameters,
			loading_label: Cow::Borrowed(DEFAULT_LOADING_LABEL),
		}
	}

	/// Sets the text shown in place of the pagination widget while its numbers are unavailable.
	pub fn with_loading_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
		self.loading_label = label.into();
		self
	}

	#[inline]
	pub fn parameters(&self) -> &Parameters {
		self.parameters.parameters()
	}

	#[inline]
	pub fn response(&self) -> &S {
		&self.response
	}

	pub fn into_response(self) -> S {
		self.response
	}

	/// Writes a regular envelope.
	///
	/// A `status_code` other than 200 makes the client fire its error event instead of applying `content`.
	/// `args` are merged under the args the request came with, which take precedence.
	pub fn build_response(
		&mut self,
		content: impl Into<Value>,
		args: Args,
		status_code: u16,
		options: Args,
	) -> Result<(), Error> {
		let args = merge_args(params::args(self.parameters()), args);
		let envelope = ResponseEnvelope::success(content.into(), args, status_code, options);
		self.send(&envelope)
	}

	/// Shorthand for a 200 response without option overrides.
	pub fn success(&mut self, content: impl Into<Value>, args: Args) -> Result<(), Error> {
		self.build_response(content, args, 200, Args::new())
	}

	/// Makes the client leave the panel page for `url`.
	pub fn redirect(
		&mut self,
		url: impl Into<String>,
		args: Args,
		options: Args,
	) -> Result<(), Error> {
		let args = merge_args(params::args(self.parameters()), args);
		let envelope = ResponseEnvelope::redirect(url.into(), args, options);
		self.send(&envelope)
	}

	/// The request parameters with the panel args lifted to the top level.
	pub fn modify_request(&self) -> Parameters {
		params::reconcile_args(self.parameters().clone())
	}

	/// Renders the pagination widget for the panel `id`.
	///
	/// Yields the loading label when any of the numbers is unusable, and nothing at all when everything fits on one page.
	pub fn add_pagination(
		&self,
		id: &str,
		offset: &Value,
		limit: &Value,
		total: &Value,
		per_page: &Value,
		args: Option<&Args>,
	) -> Result<String, Error> {
		match pagination::compute_window(offset, limit, total, per_page) {
			Ok(Some(window)) => widget::render(id, &window, args),
			Ok(None) => Ok(String::new()),
			Err(error) => {
				tracing::debug!(%error, panel = id, "showing loading label instead of pagination");
				Ok(self.loading_label.clone().into_owned())
			}
		}
	}

	fn send(&mut self, envelope: &ResponseEnvelope) -> Result<(), Error> {
		let content = envelope.to_json()?;
		self
			.response
			.set_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
			.set_content(content);
		Ok(())
	}
}
