use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use lexis_audio::RodioPlayer;
use lexis_config::Config;
use lexis_core::audio::{AudioPlayer, NullPlayer};
use lexis_core::preferences::FilePreferenceStore;
use lexis_core::state::AppState;
use lexis_dictionary::FreeDictionaryClient;

mod cli;
mod controller;
mod events;
mod logging;
mod print;
mod profile;
mod ui;


use cli::Cli;
use controller::AppController;
use events::Services;
use logging::{LogTarget, init_logging};
use profile::AppDirs;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    let dirs = AppDirs::resolve();

    init_logging(if cli.print {
        LogTarget::Stderr
    } else {
        LogTarget::File(dirs.log_file())
    })?;

    if let Some(name) = &cli.new_profile {
        profile::init_user_config(&dirs)?;
        let file = profile::add_profile_from_main(&dirs, name)?;
        println!("{}", file.display());
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli, &dirs)?;

    let dictionary = Arc::new(FreeDictionaryClient::new(&config.network)?);

    if cli.print {
        let mut stdout = std::io::stdout().lock();
        let found = print::print_lookup(&config, dictionary.as_ref(), &mut stdout).await?;
        return Ok(if found {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let player: Arc<dyn AudioPlayer> = if cli.no_audio || !config.audio.enabled {
        tracing::info!("[AUDIO] Disabled");
        Arc::new(NullPlayer)
    } else {
        Arc::new(RodioPlayer::default())
    };
    let services = Services { dictionary, player };
    let store = Box::new(FilePreferenceStore::new(dirs.preferences_file()));

    let controller = AppController::new(Arc::new(AppState::new(config)));
    let mut tasks = controller.spawn_tasks(services, store);

    // The first task to finish is normally the UI; take the rest down with it
    let mut failure = None;
    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::error!("task exited with error: {e:#}");
                failure.get_or_insert(e);
            }
            Err(e) => tracing::error!("task panicked: {e}"),
        }
        controller.shutdown();
    }

    tracing::info!("Shutdown complete");
    match failure {
        Some(e) => Err(e),
        None => Ok(ExitCode::SUCCESS),
    }
}

/// `--config` file or named profile, then environment overrides, then the
/// command line term
fn load_config(cli: &Cli, dirs: &AppDirs) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => profile::load_config_file(path)?,
        None => {
            if let Err(e) = profile::init_user_config(dirs) {
                tracing::warn!("Could not create user config folder: {e}");
            }
            profile::load_user_profile(dirs, &cli.profile)?
        }
    };

    config.apply_env();
    if let Some(term) = cli.term.as_deref().filter(|t| !t.trim().is_empty()) {
        config.ui.default_term = term.to_string();
    }

    Ok(config)
}
