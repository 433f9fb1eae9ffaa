//! Backend entry-point: wires the REST endpoints and OpenAPI document.

use std::env;

use actix_web::cookie::Key;
use actix_web::web;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

use mosaic_backend::inbound::http::health::HealthState;
use mosaic_backend::server::{run, AppConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = session_key()?;
    let config = AppConfig::from_env();

    let health_state = web::Data::new(HealthState::new());
    let server = run(&config, key, health_state.clone())?;
    health_state.mark_ready();
    server.await
}

fn session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}
