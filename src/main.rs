use anyhow::{Context, Result};
use bikeshare::{config::Config, prompt::Console, session};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    // stdout belongs to the prompts, so logs go to stderr and stay quiet by default.
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    std::panic::set_hook(Box::new(|info| {
        eprintln!("panic: {:?}", info);
    }));

    // ─── 2) configuration ────────────────────────────────────────────
    let config = Config::load().context("loading configuration")?;
    info!(data_dir = %config.data_dir.display(), "startup");

    // ─── 3) interactive loop ─────────────────────────────────────────
    let mut console = Console::stdio();
    session::run(&mut console, &config)?;

    info!("bye");
    Ok(())
}
