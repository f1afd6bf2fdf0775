//! RelayScribe CLI entry point

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use relay_scribe::application::JobSettings;
use relay_scribe::cli::{
    app::{get_api_key, load_merged_config, run_transcribe, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    TranscribeOptions,
};
use relay_scribe::domain::config::AppConfig;
use relay_scribe::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        base_url: cli.base_url.clone(),
        initial_delay: cli.initial_delay.clone(),
        poll_interval: cli.poll_interval.clone(),
        deadline: cli.deadline.clone(),
        retry_attempts: None,
        retry_backoff: None,
    };

    let config = load_merged_config(cli_config).await;

    let settings = match JobSettings::from_config(&config) {
        Ok(settings) => settings,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    let Some(file) = cli.file else {
        presenter.error("No audio file given");
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    let api_key = match get_api_key(&config) {
        Ok(key) => key,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    tracing::debug!(?settings, base_url = config.base_url_or_default(), "starting job");

    let options = TranscribeOptions {
        file,
        content_type: cli.content_type,
        output: cli.output,
        base_url: config.base_url_or_default().to_string(),
        settings,
    };

    run_transcribe(options, api_key).await
}
