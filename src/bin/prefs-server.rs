use clap::clap_app;
use prefs::server::SettingsServer;
use prefs::{SettingsEngine, SettingsStore};
use slog::{info, o, Drain};
use std::net::TcpListener;

fn main() -> Result<(), failure::Error> {
    let matches = clap_app!(prefs_server =>
        (version: env!("CARGO_PKG_VERSION"))
        (about: "A user settings store server")
        (@arg ADDR: --addr +takes_value "addr")
    )
    .get_matches();

    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let log = slog::Logger::root(drain, o!());

    let addr = matches.value_of("ADDR").unwrap_or("127.0.0.1:4000");

    info!(log, "{} initializing", env!("CARGO_PKG_NAME");
        "addr" => addr,
        "version" => env!("CARGO_PKG_VERSION"));

    let engine: Box<dyn SettingsEngine> = Box::new(SettingsStore::new());

    let listener = TcpListener::bind(addr)?;

    SettingsServer::new(listener, engine).serve(&log)?;

    Ok(())
}
