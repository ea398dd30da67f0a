//! Binary entry-point: runs one login against a seeded in-memory directory
//! and writes the outcome to stdout as a JSON line.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io;
use std::sync::Arc;

use auth_gateway::GatewaySettings;
use auth_gateway::domain::AuthenticationGateway;
use auth_gateway::domain::ports::{LoginResponse, ResponseSink};
use auth_gateway::outbound::{InMemoryUserDirectory, JsonLinesSink};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> io::Result<()> {
    let settings = GatewaySettings::load()
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    init_tracing(settings.json_logs);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(run(&settings));
    Ok(())
}

fn init_tracing(json: bool) {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

async fn run(settings: &GatewaySettings) {
    let directory = InMemoryUserDirectory::new([settings.directory_record()]);
    let gateway = AuthenticationGateway::new(Arc::new(directory));
    let request = settings.login_request();
    let sink = JsonLinesSink::new(io::stdout());

    if settings.callback {
        info!(user_id = %request.user_id(), "logging in with continuation");
        let response = gateway
            .login_with_callback(&request, &sink, |outcome| match outcome {
                Ok(record) => LoginResponse::User(record),
                Err(error) => LoginResponse::Message(error.message()),
            })
            .await;
        sink.send(response);
    } else {
        info!(user_id = %request.user_id(), "logging in with response sink");
        gateway.login(&request, &sink).await;
    }
}
