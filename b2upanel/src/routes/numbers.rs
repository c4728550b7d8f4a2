//! A panel listing the numbers up to [`TOTAL`], a page at a time.

use std::sync::Arc;

use axum::response::IntoResponse;
use axum::{extract, Router};
use b2upanel::pagination::whole_number;
use b2upanel::web::{dispatch, PanelRequest};
use b2upanel::{Args, Error, Panel, PanelAction, ParameterSource, ResponseSink};
use serde_json::Value;

use crate::config::Config;

const ID: &str = "numbers";
const TOTAL: u64 = 237;
const DEFAULT_LIMIT: u64 = 10;

#[derive(askama::Template)]
#[template(path = "numbers.html")]
struct Template<'a> {
	numbers: Vec<u64>,
	pagination: &'a str,
}

struct Numbers {
	per_page: u64,
}

impl PanelAction for Numbers {
	fn submit<S: ResponseSink, P: ParameterSource>(
		&self,
		panel: &mut Panel<S, P>,
	) -> Result<(), Error> {
		let params = panel.parameters();
		let limit = params
			.get("numbers-limit")
			.cloned()
			.unwrap_or(Value::from(DEFAULT_LIMIT));
		let count = whole_number(&limit).filter(|count| *count >= 1);
		// changing the limit resets the page but leaves the offset stale, so the page wins
		let page = params.get("numbers-page").and_then(whole_number);
		let offset = match (page, count) {
			(Some(page), Some(count)) => Value::from(page.saturating_mul(count)),
			_ => params
				.get("numbers-offset")
				.cloned()
				.unwrap_or(Value::from(0)),
		};

		let pagination = panel.add_pagination(
			ID,
			&offset,
			&limit,
			&Value::from(TOTAL),
			&Value::from(self.per_page),
			None,
		)?;

		// garbage offsets and limits still get a listing, only pagination is withheld
		let start = whole_number(&offset).unwrap_or(0).min(TOTAL);
		let count = count.unwrap_or(DEFAULT_LIMIT);
		let template = Template {
			numbers: (start..start.saturating_add(count).min(TOTAL)).collect(),
			pagination: &pagination,
		};
		let content = askama::Template::render(&template)?;

		let mut args = Args::new();
		args.insert("total".to_owned(), Value::from(TOTAL));
		panel.success(content, args)
	}
}

pub async fn handler(
	PanelRequest(params): PanelRequest,
	extract::Extension(config): extract::Extension<Arc<Config>>,
) -> Result<impl IntoResponse, Error> {
	let action = Numbers {
		per_page: config.per_page,
	};
	dispatch(&action, params, config.loading_label.clone())
}

pub fn configure() -> Router {
	super::panel_route!(handler)
}
