use serde_json::Value;

pub mod form;

/// Request parameters as seen by a panel action, in the order they were received.
pub type Parameters = serde_json::Map<String, Value>;

/// The id of the panel that posted the request.
pub const ID: &str = "_b2upanel_id";
/// The endpoint the client script posted to.
pub const ENDPOINT: &str = "_b2upanel_endpoint";
/// Client-side options of the posting panel.
pub const OPTIONS: &str = "_b2upanel_options";
/// Form or refresh data, plus the `args` the panel was set up with.
pub const ARGS: &str = "_b2upanel_args";

/// Returns the nested argument payload, if the request carried one as a mapping.
pub fn args(params: &Parameters) -> Option<&Parameters> {
	params.get(ARGS).and_then(Value::as_object)
}

/// Lifts the nested argument payload onto the top level of `params` so that actions can bind it like any other parameter.
///
/// The payload wins on collisions at every depth. The payload key itself stays in the result.
pub fn reconcile_args(params: Parameters) -> Parameters {
	let nested = match params.get(ARGS) {
		Some(Value::Object(nested)) => nested.clone(),
		Some(other) => {
			tracing::debug!(kind = kind_of(other), "ignoring non-mapping panel args");
			return params;
		}
		None => return params,
	};

	let mut merged = params;
	replace_recursive(&mut merged, &nested);
	merged
}

/// Recursively replaces the entries of `base` with those of `replacement`.
///
/// Mappings replace into mappings and lists into lists element by element; any other pairing is overwritten.
pub fn replace_recursive(base: &mut Parameters, replacement: &Parameters) {
	for (key, new) in replacement {
		match base.get_mut(key) {
			Some(existing) => replace_value(existing, new),
			None => {
				base.insert(key.clone(), new.clone());
			}
		}
	}
}

fn replace_value(existing: &mut Value, new: &Value) {
	match (existing, new) {
		(Value::Object(old), Value::Object(new)) => replace_recursive(old, new),
		(Value::Array(old), Value::Array(new)) => {
			for (idx, item) in new.iter().enumerate() {
				match old.get_mut(idx) {
					Some(slot) => replace_value(slot, item),
					None => old.push(item.clone()),
				}
			}
		}
		(slot, new) => *slot = new.clone(),
	}
}

fn kind_of(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "bool",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "list",
		Value::Object(_) => "mapping",
	}
}

#[cfg(test)]
mod test;
