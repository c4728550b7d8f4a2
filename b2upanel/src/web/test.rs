use axum::body::Body;
use axum::response::IntoResponse;
use axum::Router;
use http::{header, Request, Response, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt as _;

use super::{dispatch, PanelRequest};
use crate::action::{Panel, PanelAction, ParameterSource, ResponseSink};
use crate::envelope::Args;
use crate::error::Error;
use crate::params::Parameters;

async fn echo(PanelRequest(params): PanelRequest) -> axum::Json<Parameters> {
	axum::Json(params)
}

fn app() -> Router {
	Router::new().route("/", axum::routing::get(echo).post(echo))
}

async fn body_json(response: Response<impl axum::body::HttpBody>) -> Value {
	let bytes = match hyper::body::to_bytes(response.into_body()).await {
		Ok(bytes) => bytes,
		Err(_) => panic!("could not read body"),
	};
	serde_json::from_slice(&bytes).unwrap()
}

async fn call(request: Request<Body>) -> (StatusCode, Value) {
	let response = app().oneshot(request).await.unwrap();
	let status = response.status();
	(status, body_json(response).await)
}

#[tokio::test]
async fn form_body_is_decoded_and_reconciled() {
	let request = Request::post("/")
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(Body::from(
			"_b2upanel_id=list&a=1&_b2upanel_args%5Blist-page%5D=2&_b2upanel_args%5Ba%5D=3",
		))
		.unwrap();
	let (status, params) = call(request).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(
		params,
		json!({
			"_b2upanel_id": "list",
			"a": "3",
			"_b2upanel_args": {"list-page": "2", "a": "3"},
			"list-page": "2",
		})
	);
}

#[tokio::test]
async fn json_body_overrides_query() {
	let request = Request::post("/?a=query&b=query")
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(r#"{"a": "body", "_b2upanel_args": {"c": 1}}"#))
		.unwrap();
	let (status, params) = call(request).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(
		params,
		json!({"a": "body", "b": "query", "c": 1, "_b2upanel_args": {"c": 1}})
	);
}

#[tokio::test]
async fn get_reads_query_only() {
	let request = Request::get("/?_b2upanel_args%5Bx%5D=1")
		.body(Body::empty())
		.unwrap();
	let (_, params) = call(request).await;
	assert_eq!(params, json!({"_b2upanel_args": {"x": "1"}, "x": "1"}));
}

#[tokio::test]
async fn unknown_body_is_ignored() {
	let request = Request::post("/?a=1")
		.header(header::CONTENT_TYPE, "text/plain")
		.body(Body::from("a=2"))
		.unwrap();
	let (_, params) = call(request).await;
	assert_eq!(params, json!({"a": "1"}));
}

#[tokio::test]
async fn json_needs_an_application_type() {
	let request = Request::post("/?a=1")
		.header(header::CONTENT_TYPE, "text/json")
		.body(Body::from(r#"{"a": "body"}"#))
		.unwrap();
	let (status, params) = call(request).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(params, json!({"a": "1"}));

	let request = Request::post("/?a=1")
		.header(header::CONTENT_TYPE, "application/vnd.panel+json")
		.body(Body::from(r#"{"a": "body"}"#))
		.unwrap();
	let (status, params) = call(request).await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(params, json!({"a": "body"}));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
	let request = Request::post("/")
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from("[1, 2"))
		.unwrap();
	let (status, envelope) = call(request).await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(envelope["status_code"], json!(400));
	assert_eq!(envelope["args"], json!({}));
}

struct Unfinished;
impl PanelAction for Unfinished {}

struct Greeting;
impl PanelAction for Greeting {
	fn submit<S: ResponseSink, P: ParameterSource>(
		&self,
		panel: &mut Panel<S, P>,
	) -> Result<(), Error> {
		panel.success("hello", Args::new())
	}
}

#[tokio::test]
async fn dispatch_writes_json() {
	let response = dispatch(&Greeting, Parameters::new(), "Loading")
		.unwrap()
		.into_response();
	assert_eq!(response.status(), StatusCode::OK);
	assert_eq!(
		response.headers()[header::CONTENT_TYPE],
		"application/json"
	);
	assert_eq!(
		body_json(response).await,
		json!({"status_code": 200, "content": "hello", "args": {}, "options": {}})
	);
}

#[tokio::test]
async fn missing_submit_is_reported() {
	let error = match dispatch(&Unfinished, Parameters::new(), "Loading") {
		Ok(_) => panic!("submit should have failed"),
		Err(error) => error,
	};
	assert!(matches!(error, Error::NotImplemented("submit")));

	let response = error.into_response();
	assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
	let envelope = body_json(response).await;
	assert_eq!(envelope["status_code"], json!(501));
	assert_eq!(envelope["content"], json!("submit must be overridden by the panel"));
}
