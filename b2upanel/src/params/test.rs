use serde_json::{json, Value};

use super::form::decode;
use super::{args, reconcile_args, replace_recursive, Parameters};

fn params(value: Value) -> Parameters {
	match value {
		Value::Object(map) => map,
		other => panic!("expected an object, got {other}"),
	}
}

fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
	raw
		.iter()
		.map(|&(key, value)| (key.to_owned(), value.to_owned()))
		.collect()
}

#[test]
fn nested_args_win_and_key_is_kept() {
	let merged = reconcile_args(params(json!({"a": 1, "_b2upanel_args": {"a": 2, "b": 3}})));
	assert_eq!(
		Value::Object(merged),
		json!({"a": 2, "_b2upanel_args": {"a": 2, "b": 3}, "b": 3})
	);
}

#[test]
fn reconcile_is_idempotent() {
	let once = reconcile_args(params(json!({"a": 1, "_b2upanel_args": {"a": 2, "b": {"c": 3}}})));
	let twice = reconcile_args(once.clone());
	assert_eq!(once, twice);
}

#[test]
fn without_args_nothing_changes() {
	let original = params(json!({"a": 1, "_b2upanel_id": "panel"}));
	assert_eq!(reconcile_args(original.clone()), original);
}

#[test]
fn non_mapping_args_are_ignored() {
	let original = params(json!({"a": 1, "_b2upanel_args": "oops"}));
	assert_eq!(reconcile_args(original.clone()), original);
}

#[test]
fn merge_recurses_into_mappings() {
	let merged = reconcile_args(params(json!({
		"filter": {"name": "x", "sort": "asc"},
		"_b2upanel_args": {"filter": {"name": "y"}},
	})));
	assert_eq!(merged["filter"], json!({"name": "y", "sort": "asc"}));
}

#[test]
fn merge_replaces_lists_by_index() {
	let mut base = params(json!({"ids": [1, 2, 3], "scalar": [1]}));
	replace_recursive(&mut base, &params(json!({"ids": [9], "scalar": 5})));
	assert_eq!(Value::Object(base), json!({"ids": [9, 2, 3], "scalar": 5}));
}

#[test]
fn args_accessor() {
	let with = params(json!({"_b2upanel_args": {"y": 2}}));
	assert_eq!(args(&with), Some(&params(json!({"y": 2}))));
	assert_eq!(args(&params(json!({"_b2upanel_args": [1]}))), None);
}

#[test]
fn decode_flat() {
	let decoded = decode(pairs(&[("a", "1"), ("b", "two"), ("a", "3")]));
	assert_eq!(Value::Object(decoded), json!({"a": "3", "b": "two"}));
}

#[test]
fn decode_brackets() {
	let decoded = decode(pairs(&[
		("_b2upanel_id", "list"),
		("_b2upanel_args[list-page]", "2"),
		("_b2upanel_args[filter][name]", "x"),
	]));
	assert_eq!(
		Value::Object(decoded),
		json!({
			"_b2upanel_id": "list",
			"_b2upanel_args": {"list-page": "2", "filter": {"name": "x"}},
		})
	);
}

#[test]
fn decode_appends_into_lists() {
	let decoded = decode(pairs(&[
		("ids[]", "4"),
		("ids[]", "5"),
		("named[0]", "a"),
		("named[2]", "b"),
	]));
	assert_eq!(decoded["ids"], json!(["4", "5"]));
	assert_eq!(decoded["named"], json!({"0": "a", "2": "b"}));
}

#[test]
fn decode_unclosed_bracket() {
	let decoded = decode(pairs(&[("a[b", "1"), ("[c]", "2")]));
	assert_eq!(Value::Object(decoded), json!({"a": "1", "[c]": "2"}));
}
