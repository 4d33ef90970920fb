//! Guardrail demo - composition root binary
//!
//! Loads configuration, installs logging, and walks each guarded entity
//! through its sample scenario.

mod config;
mod demo;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guardrail_domain=debug,guardrail_runner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Guardrail demo");

    let config = config::DemoConfig::from_env()?;
    for section in config.sections() {
        tracing::info!(section = %section, "running demo section");
        demo::run(*section)?;
    }

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
