mod config;
mod console;
mod db;
mod errors;
mod models;
mod routes;
mod services;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::routes::build_router;
use crate::services::{JobService, PersonService};
use crate::state::AppState;
use crate::store::{PgJobStore, PgPersonStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting personnel API v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.database_url).await?;

    // Stores and services are built once here and handed down explicitly.
    let person_store = Arc::new(PgPersonStore::new(db.clone()));
    let job_store = Arc::new(PgJobStore::new(db));
    let persons = PersonService::new(person_store, job_store.clone());
    let jobs = JobService::new(job_store);

    // `api console person` / `api console job` run the interactive console
    // against the same services instead of serving HTTP.
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("console") {
        let mut input = console::stdin_lines();
        match args.get(1).map(String::as_str) {
            Some("job") => console::run_job_console(&jobs, &mut input).await,
            _ => console::run_person_console(&persons, &jobs, &mut input).await,
        }
        return Ok(());
    }

    let state = AppState { persons, jobs };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
