mod config;
mod error;
mod routes;

use std::io;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;
use log::{error, info};

use crate::config::{ServerArgs, load_defaults};
use crate::routes::AppState;

/// Main entry point for the server.
///
/// Reads the command line, loads the generator defaults, and serves the
/// generation routes. Generators are stateless, so the shared state is
/// read-only and needs no lock.
///
/// # Notes
/// - Binds to 127.0.0.1:5000 unless `--host`/`--port` (or `DEVMOCK_HOST`/`PORT`) say otherwise.
/// - Log level is taken from `RUST_LOG`, `info` by default.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = ServerArgs::parse();
	let defaults = load_defaults(args.defaults.as_deref()).map_err(|e| {
		error!("{e}");
		io::Error::new(io::ErrorKind::InvalidInput, e)
	})?;
	let state = web::Data::new(AppState::new(defaults));

	info!("listening on {}:{}", args.host, args.port);
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.wrap(middleware::Logger::default())
			.app_data(state.clone())
			.configure(routes::configure)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}
