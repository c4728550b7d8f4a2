use serde_json::Value;

/// Key/value payload handed to the client script alongside a response, available there as `e.response.args`.
pub type Args = serde_json::Map<String, Value>;

/// The JSON body `b2u.panel.js` expects from every panel endpoint.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ResponseEnvelope {
	#[serde(skip_serializing_if = "std::ops::Not::not")]
	pub redirect: bool,
	/// Anything other than 200 fires `error.b2upanel` on the client.
	pub status_code: u16,
	pub content: Value,
	pub args: Args,
	/// Overrides for the panel's client configuration (binding, modes, effects).
	pub options: Args,
}

impl ResponseEnvelope {
	pub fn success(content: Value, args: Args, status_code: u16, options: Args) -> Self {
		Self {
			redirect: false,
			status_code,
			content,
			args,
			options,
		}
	}

	/// Sends the client to `url`, away from the panel page entirely.
	pub fn redirect(url: String, args: Args, options: Args) -> Self {
		Self {
			redirect: true,
			status_code: 200,
			content: Value::String(url),
			args,
			options,
		}
	}

	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(self)
	}
}

/// Combines the args the request came with and the args an action passes explicitly.
///
/// Request args come first and keep their values; explicit args only contribute keys the request did not have.
pub fn merge_args(request: Option<&Args>, explicit: Args) -> Args {
	let mut merged = request.cloned().unwrap_or_default();
	for (key, value) in explicit {
		merged.entry(key).or_insert(value);
	}
	merged
}
