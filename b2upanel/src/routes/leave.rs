//! A panel that sends the browser elsewhere.

use axum::response::IntoResponse;
use axum::Router;
use b2upanel::web::{dispatch, PanelRequest};
use b2upanel::{Args, Error, Panel, PanelAction, ParameterSource, ResponseSink};

struct Leave;

impl PanelAction for Leave {
	fn submit<S: ResponseSink, P: ParameterSource>(
		&self,
		panel: &mut Panel<S, P>,
	) -> Result<(), Error> {
		// only same-site paths, so the panel can't be used as an open redirect
		let to = match panel.parameters().get("to").and_then(|to| to.as_str()) {
			Some(to) if to.starts_with('/') && !to.starts_with("//") => to.to_owned(),
			_ => "/".to_owned(),
		};
		panel.redirect(to, Args::new(), Args::new())
	}
}

pub async fn handler(PanelRequest(params): PanelRequest) -> Result<impl IntoResponse, Error> {
	dispatch(&Leave, params, b2upanel::action::DEFAULT_LOADING_LABEL)
}

pub fn configure() -> Router {
	super::panel_route!(handler)
}
