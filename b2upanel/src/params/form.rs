//! Decoding of urlencoded forms that use bracketed keys, such as `_b2upanel_args[filter][name]=x` or `ids[]=1`.

use serde_json::Value;

use super::Parameters;

/// Builds nested parameters out of flat key/value pairs.
///
/// Later pairs overwrite earlier ones. A key that opens a bracket without closing it keeps only its leading name.
/// Mappings whose keys are exactly `0..n` in order become lists.
pub fn decode(pairs: impl IntoIterator<Item = (String, String)>) -> Parameters {
	let mut params = Parameters::new();
	for (key, value) in pairs {
		let path = split_key(&key);
		insert(&mut params, &path, Value::String(value));
	}
	for value in params.values_mut() {
		listify(value);
	}
	params
}

fn split_key(key: &str) -> Vec<&str> {
	let (head, mut rest) = match key.find('[') {
		Some(0) | None => return vec![key],
		Some(idx) => key.split_at(idx),
	};

	let mut path = vec![head];
	while let Some(stripped) = rest.strip_prefix('[') {
		let end = match stripped.find(']') {
			Some(end) => end,
			None => break,
		};
		path.push(&stripped[..end]);
		rest = &stripped[end + 1..];
	}
	path
}

fn insert(map: &mut Parameters, path: &[&str], value: Value) {
	let (&first, rest) = match path.split_first() {
		Some(split) => split,
		None => return,
	};

	// `[]` appends
	let key = if first.is_empty() {
		next_index(map).to_string()
	} else {
		first.to_owned()
	};

	if rest.is_empty() {
		map.insert(key, value);
		return;
	}

	let slot = map
		.entry(key)
		.or_insert_with(|| Value::Object(Parameters::new()));
	if !slot.is_object() {
		*slot = Value::Object(Parameters::new());
	}
	if let Value::Object(inner) = slot {
		insert(inner, rest, value);
	}
}

fn next_index(map: &Parameters) -> u64 {
	map
		.keys()
		.filter_map(|key| key.parse::<u64>().ok())
		.max()
		.map_or(0, |max| max + 1)
}

fn listify(value: &mut Value) {
	let map = match value {
		Value::Object(map) => map,
		_ => return,
	};
	for inner in map.values_mut() {
		listify(inner);
	}

	let sequential = map
		.keys()
		.enumerate()
		.all(|(idx, key)| key.parse::<usize>() == Ok(idx));
	if sequential && !map.is_empty() {
		let items = std::mem::take(map).into_iter().map(|(_, item)| item).collect();
		*value = Value::Array(items);
	}
}
