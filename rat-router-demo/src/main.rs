//! Terminal demo of nested view-model routers built on rat-router.

mod app;
mod application;
mod pages;
mod shell;
mod view;

use crate::app::App;
use crate::application::Application;
use crate::shell::Shell;
use anyhow::Context as _;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "rat-router-demo")]
#[command(about = "Stack-based view-model navigation in the terminal", long_about = None)]
struct Cli {
    /// Number of routes kept in the root navigation stack.
    #[arg(short, long, default_value_t = rat_router::DEFAULT_STACK_CAPACITY)]
    stack_capacity: usize,

    /// Write logs to this file (stdout belongs to the UI). Filter with RUST_LOG.
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "rat_router=debug,rat_router_demo=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
            .init();
    }

    tracing::info!(stack_capacity = cli.stack_capacity, "rat-router-demo starting");

    let shell = Shell::new(cli.stack_capacity)?;
    let app = App::new(shell);
    Application::new().run(app).await
}
