use std::net::SocketAddr;

use app::{AppState, create_app};
use clap::Parser;
use config::{Args, Config};

mod app;
mod config;
mod history;
mod routes;
mod weather;

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Args::parse();
    let config = Config::from_args(args);

    let state = AppState::from_config(&config);
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    log::info!("listening on {}", addr);
    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
