use eventos_backend::{State, StateTrait};
use std::{
    net::{Ipv4Addr, SocketAddr},
    process::ExitCode,
};
use tokio::net::TcpListener;
use tracing::{error, level_filters::LevelFilter};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_line_number(true).with_filter(env_filter))
        .init();

    if run().await.is_err() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run() -> anyhow::Result<()> {
    let state = State::new().await;

    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, state.config().port));
    let listener = TcpListener::bind(addr)
        .await
        .inspect_err(|err| error!("failed to bind listener: {:?}", err))?;

    eventos_backend::run(listener, state).await
}
