//! Page-button windowing for the pagination widget.
//!
//! Pages are grouped into fixed blocks of `per_page` buttons. The block holding the current page is the window shown to the user, flanked by First/Previous and Next/Last controls.

use serde_json::Value;

pub mod widget;

pub type PageNum = u64;

/// Page sizes offered by the limit selector.
pub const LIMIT_CHOICES: [PageNum; 7] = [5, 10, 25, 50, 100, 500, 1000];

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("pagination {0} is not a usable number")]
pub struct InvalidInput(pub &'static str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
	pub offset: PageNum,
	pub limit: PageNum,
	pub total: PageNum,
	pub per_page: PageNum,
}

impl PageQuery {
	pub fn new(
		offset: PageNum,
		limit: PageNum,
		total: PageNum,
		per_page: PageNum,
	) -> Result<Self, InvalidInput> {
		if limit == 0 {
			return Err(InvalidInput("limit"));
		}
		if per_page == 0 {
			return Err(InvalidInput("per_page"));
		}
		Ok(Self {
			offset,
			limit,
			total,
			per_page,
		})
	}

	/// Reads the four numbers from loosely typed request values.
	pub fn from_values(
		offset: &Value,
		limit: &Value,
		total: &Value,
		per_page: &Value,
	) -> Result<Self, InvalidInput> {
		Self::new(
			whole(offset, "offset")?,
			whole(limit, "limit")?,
			whole(total, "total")?,
			whole(per_page, "per_page")?,
		)
	}
}

/// Returns the value of a JSON number or of a string holding a decimal number.
///
/// Surrounding whitespace is accepted. Infinities and NaN are not numbers here.
pub fn numeric(value: &Value) -> Option<f64> {
	let number = match value {
		Value::Number(number) => number.as_f64()?,
		Value::String(string) => {
			let trimmed = string.trim();
			// `f64::from_str` also accepts "inf" and "nan"
			if !trimmed.bytes().any(|byte| byte.is_ascii_digit()) {
				return None;
			}
			trimmed.parse().ok()?
		}
		_ => return None,
	};
	number.is_finite().then(|| number)
}

/// Returns a non-negative [`numeric`] value truncated toward zero.
///
/// Plain integers are read exactly; only fractions and exponents go through `f64`.
pub fn whole_number(value: &Value) -> Option<PageNum> {
	let exact = match value {
		Value::Number(number) => number.as_u64(),
		Value::String(string) => string.trim().parse().ok(),
		_ => None,
	};
	exact.or_else(|| {
		numeric(value)
			.map(f64::trunc)
			.filter(|number| *number >= 0.0)
			.map(|number| number as PageNum)
	})
}

fn whole(value: &Value, field: &'static str) -> Result<PageNum, InvalidInput> {
	whole_number(value).ok_or(InvalidInput(field))
}

/// A target for one of the First/Previous/Next/Last controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
	pub page: PageNum,
	pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButton {
	pub page: PageNum,
	pub active: bool,
}

impl PageButton {
	/// One-based number shown on the button.
	pub fn label(&self) -> PageNum {
		self.page + 1
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitChoice {
	pub value: PageNum,
	pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
	pub query: PageQuery,
	pub page_count: PageNum,
	pub current_page: PageNum,
	pub window_start: PageNum,
	pub visible_pages: Vec<PageNum>,
	pub is_first_window: bool,
	pub is_last_window: bool,
}

impl PageWindow {
	/// Returns `None` when everything fits on a single page, in which case no controls are shown.
	pub fn compute(query: PageQuery) -> Option<Self> {
		let PageQuery {
			offset,
			limit,
			total,
			per_page,
		} = query;

		let page_count = total / limit + PageNum::from(total % limit != 0);
		if page_count <= 1 {
			return None;
		}

		let current_page = offset / limit;
		let window_start = current_page / per_page * per_page;
		let visible_pages: Vec<PageNum> = (window_start..page_count)
			.take(usize::try_from(per_page).unwrap_or(usize::MAX))
			.collect();
		let window_end = window_start + visible_pages.len() as PageNum;

		Some(Self {
			query,
			page_count,
			current_page,
			window_start,
			visible_pages,
			is_first_window: window_start == 0,
			is_last_window: window_end >= page_count,
		})
	}

	pub fn first(&self) -> Control {
		Control {
			page: 0,
			disabled: self.is_first_window,
		}
	}

	/// The last page of the preceding window.
	pub fn previous(&self) -> Control {
		Control {
			page: self.window_start.saturating_sub(1),
			disabled: self.is_first_window,
		}
	}

	/// The first page of the following window.
	pub fn next(&self) -> Control {
		Control {
			page: self.window_start + self.visible_pages.len() as PageNum,
			disabled: self.is_last_window,
		}
	}

	pub fn last(&self) -> Control {
		Control {
			page: self.page_count - 1,
			disabled: self.is_last_window,
		}
	}

	pub fn pages(&self) -> Vec<PageButton> {
		self
			.visible_pages
			.iter()
			.map(|&page| PageButton {
				page,
				active: page == self.current_page,
			})
			.collect()
	}

	pub fn limit_choices(&self) -> Vec<LimitChoice> {
		LIMIT_CHOICES
			.iter()
			.map(|&value| LimitChoice {
				value,
				selected: value == self.query.limit,
			})
			.collect()
	}
}

/// Parses the four request values and computes the window for them.
///
/// `Ok(None)` means there is nothing to paginate.
pub fn compute_window(
	offset: &Value,
	limit: &Value,
	total: &Value,
	per_page: &Value,
) -> Result<Option<PageWindow>, InvalidInput> {
	PageQuery::from_values(offset, limit, total, per_page).map(PageWindow::compute)
}
