use std::{env, net::SocketAddr, sync::Arc};

#[macro_use]
extern crate lazy_static;

use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use crate::{
    app::env::Envy,
    auth::models::access_gate::AccessGate,
    generations::{
        apis::fal::{config::FalConfig, service::FalClient},
        generator::ImageGenerator,
    },
    panes::models::pane_collection::PaneCollection,
};

mod app;
mod auth;
mod generations;
mod panes;
mod params;
mod sketches;

#[derive(Clone)]
pub struct AppState {
    pub panes: Arc<RwLock<PaneCollection>>,
    pub gate: Arc<AccessGate>,
    pub generator: Arc<dyn ImageGenerator>,
}

impl AppState {
    pub fn new(envy: &Envy, generator: Arc<dyn ImageGenerator>) -> Self {
        Self {
            panes: Arc::new(RwLock::new(PaneCollection::new(
                envy.canvas_width,
                envy.canvas_height,
            ))),
            gate: Arc::new(AccessGate::new(envy.access_password.to_owned())),
            generator,
        }
    }
}

#[tokio::main]
async fn main() {
    // tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("sketch_api=debug,tower_http=info")),
        )
        .init();

    // environment
    let app_env = env::var("APP_ENV").unwrap_or("development".to_string());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));
    let envy = match envy::from_env::<Envy>() {
        Ok(config) => config,
        Err(e) => panic!("{:#?}", e),
    };

    // properties
    let port = envy.port.to_owned().unwrap_or(3000);

    let generator = Arc::new(FalClient::new(FalConfig::from_envy(&envy)));
    let state = AppState::new(&envy, generator);

    if state.gate.is_open() {
        tracing::info!("access gate disabled");
    }

    // app
    let app = app::router::build_app(state, &envy);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("listening on {}", addr);

    if let Err(e) = axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
    {
        tracing::error!("main (1): {:?}", e);
    }
}
