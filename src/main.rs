use anyhow::Result;
use fibseq::{app, config};

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so stdout carries only terms
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    app::run(&config).await
}
