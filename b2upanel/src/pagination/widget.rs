use serde::Serialize;

use super::{Control, LimitChoice, PageButton, PageNum, PageWindow};
use crate::envelope::Args;
use crate::error::Error;

/// The pagination markup and the script that binds it to the panel with the given id.
#[derive(askama::Template)]
#[template(path = "pagination.html")]
pub struct Widget<'a> {
	id: &'a str,
	id_json: String,
	args_json: String,
	page_count: PageNum,
	current_page: PageNum,
	limit: PageNum,
	offset: PageNum,
	first: Control,
	previous: Control,
	pages: Vec<PageButton>,
	next: Control,
	last: Control,
	limit_choices: Vec<LimitChoice>,
}

impl<'a> Widget<'a> {
	/// `args`, when given, is attached to the panel before page changes are submitted.
	pub fn new(id: &'a str, window: &PageWindow, args: Option<&Args>) -> serde_json::Result<Self> {
		Ok(Self {
			id,
			id_json: script_json(&id)?,
			args_json: script_json(&args)?,
			page_count: window.page_count,
			current_page: window.current_page,
			limit: window.query.limit,
			offset: window.query.offset,
			first: window.first(),
			previous: window.previous(),
			pages: window.pages(),
			next: window.next(),
			last: window.last(),
			limit_choices: window.limit_choices(),
		})
	}
}

pub fn render(id: &str, window: &PageWindow, args: Option<&Args>) -> Result<String, Error> {
	let widget = Widget::new(id, window, args)?;
	Ok(askama::Template::render(&widget)?)
}

/// Serializes `value` as a literal that is safe to place inside a `<script>` element.
fn script_json(value: &impl Serialize) -> serde_json::Result<String> {
	serde_json::to_string(value).map(|json| json.replace('<', "\\u003c"))
}
