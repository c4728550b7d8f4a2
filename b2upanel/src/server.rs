use axum::Router;
use bindable::BindableAddr;
use tokio::net::UnixListener;

use super::Error;

/// Serves the panels on a TCP or Unix socket until interrupted.
pub async fn run(app: Router, addr: &BindableAddr) -> Result<(), Error> {
	match addr {
		BindableAddr::Tcp(socket_addr) => {
			axum::Server::bind(socket_addr)
				.serve(app.into_make_service())
				.with_graceful_shutdown(shutdown_signal())
				.await
		}
		BindableAddr::Unix(path) => {
			let listener = UnixListener::bind(path).map_err(|err| Error::BindUnix(err, path.clone()))?;
			let incoming = futures::stream::poll_fn(move |cx| {
				listener
					.poll_accept(cx)
					.map(|accepted| Some(accepted.map(|(stream, _addr)| stream)))
			});
			axum::Server::builder(hyper::server::accept::from_stream(incoming))
				.serve(app.into_make_service())
				.with_graceful_shutdown(shutdown_signal())
				.await
		}
	}
	.map_err(Error::RunServer)
}

async fn shutdown_signal() {
	match tokio::signal::ctrl_c().await {
		Ok(()) => tracing::info!("shutting down"),
		// without a signal handler the server runs until killed
		Err(error) => {
			tracing::warn!(%error, "could not listen for ctrl-c");
			futures::future::pending::<()>().await;
		}
	}
}
