use clap::Parser;

use confview_rs::cli::{self, Cli, Commands};
use confview_rs::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configuration binding failures abort startup before the listener
    // opens; the logger does not exist yet, so these surface on stderr.
    let settings = cli::load_and_merge_config(&cli);

    cli::init_logger_from_settings(&settings);

    if let Err(e) = cli::execute_command(&cli, settings.clone()).await {
        tracing::error!(error = %e, "Command execution failed");
        std::process::exit(1);
    }

    let should_serve = matches!(
        cli.command,
        None | Some(Commands::Serve { dry_run: false, .. })
    );

    if should_serve {
        if let Err(e) = Server::new(settings).run().await {
            tracing::error!(error = %e, "Server terminated with error");
            std::process::exit(1);
        }
    }

    Ok(())
}
