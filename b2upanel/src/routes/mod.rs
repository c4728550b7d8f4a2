use axum::Router;

mod leave;
mod numbers;
mod unfinished;

macro_rules! sub {
	($app:ident, $name:ident) => {
		$app = $app.nest(concat!("/", stringify!($name)), $name::configure())
	};
	($app:ident; $($name:ident),+) => {
		$(sub!($app, $name));+
	};
}

pub fn configure() -> Router {
	let mut panels = Router::new();
	sub!(panels; leave, numbers, unfinished);

	Router::new().nest("/panels", panels)
}

/// Builds the route for a panel endpoint, which the client script may reach with either method.
macro_rules! panel_route {
	($handler:path) => {
		axum::Router::new().route("/", axum::routing::get($handler).post($handler))
	};
}
pub(crate) use panel_route;
