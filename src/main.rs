use anyhow::Result;
use mock_result_emitter::{backend::MockBackend, emitter};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_result_emitter=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let backend = MockBackend::new();
    let mut stdout = std::io::stdout().lock();

    if let Err(e) = emitter::emit(&backend, &mut stdout) {
        error!("Failed to emit result: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
