use clap::Parser;
use tracing::{error, info};

use pantrybook_lib::bootstrap::config::default_data_dir;
use pantrybook_lib::bootstrap::tracing::init_tracing_subscriber;
use pantrybook_lib::bootstrap::{resolve_config, wire_dependencies, AppRuntime};
use pantrybook_lib::cli::{run, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let mut config = resolve_config(cli.config.clone(), &data_dir)?;
    if let Some(database) = cli.database.clone() {
        config.database_path = database;
    }

    if let Err(e) = init_tracing_subscriber(&config.logs_dir, cli.verbose) {
        eprintln!("Failed to initialize tracing: {e}");
    }
    info!(database = %config.database_path.display(), "Starting pantrybook");

    let deps = wire_dependencies(&config)?;
    let runtime = AppRuntime::new(deps, config);

    let mut stdout = std::io::stdout();
    if let Err(e) = run(&runtime, cli.command, &mut stdout).await {
        error!("Command failed: {e:#}");
        return Err(e);
    }
    Ok(())
}
