//! A panel whose endpoint was registered before its `submit` was written.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::{extract, Router};
use b2upanel::web::{dispatch, PanelRequest};
use b2upanel::{Error, PanelAction};

use crate::config::Config;

struct Unfinished;

impl PanelAction for Unfinished {}

pub async fn handler(
	PanelRequest(params): PanelRequest,
	extract::Extension(config): extract::Extension<Arc<Config>>,
) -> Result<impl IntoResponse, Error> {
	dispatch(&Unfinished, params, config.loading_label.clone())
}

pub fn configure() -> Router {
	super::panel_route!(handler)
}
