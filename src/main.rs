use anyhow::Context;
use clap::Parser;
use localstore_engine::config::cli::run_command;
use localstore_engine::utils::{logger, validation::Validate};
use localstore_engine::{CliConfig, FileHost, LocalStorageEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = cli.resolve().context("failed to load configuration")?;

    if config.json_logs() {
        logger::init_json_logger(config.log_level());
    } else {
        logger::init_cli_logger(config.log_level(), cli.verbose);
    }

    tracing::debug!("Resolved config: {:?}", config);

    config
        .validate()
        .inspect_err(|e| tracing::error!("❌ Configuration validation failed: {}", e))
        .context("invalid configuration")?;

    let result = async {
        let host = FileHost::open(&config.store.path, config.store.quota_bytes)?;
        let engine = LocalStorageEngine::new(host, config.engine.clone());
        run_command(&engine, &cli.command).await
    }
    .await;

    match result {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(e) => {
            tracing::error!("❌ {:?} failed: {}", cli.command, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
