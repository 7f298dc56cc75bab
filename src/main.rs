//! Wiring & DI. Entry point: bootstrap adapters, inject into the lookup service, run UI.
//! No business logic here.

use clap::Parser;
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordlens::adapters::ai::{GeminiAdapter, MockLanguageAdapter};
use wordlens::adapters::persistence::JsonFileStore;
use wordlens::adapters::speech::{CommandSpeech, NoSpeech};
use wordlens::adapters::ui::surface::TerminalSurface;
use wordlens::adapters::ui::tui::TuiInputPort;
use wordlens::domain::LookupMode;
use wordlens::ports::{InputPort, KeyValueStorePort, LanguageServicePort, SpeechPort};
use wordlens::shared::config::AppConfig;
use wordlens::usecases::{LookupOutcome, LookupService, RecencyStore, WordOfTheDay};

/// Dictionary lookups from the terminal.
#[derive(Parser, Debug)]
#[command(name = "wordlens", version, about)]
struct Cli {
    /// Look up this word once and exit instead of starting the interactive menu.
    word: Option<String>,

    /// Override the configured lookup mode (grounded | structured).
    #[arg(long)]
    mode: Option<LookupMode>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    // stdout is the UI; logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config load failed, using defaults");
        AppConfig::default()
    });
    let mode = cli.mode.unwrap_or_else(|| cfg.mode_or_default());

    // --- Language service ---
    let llm: Arc<dyn LanguageServicePort> = match cfg.api_key() {
        Some(key) => {
            info!(
                model = %cfg.model_or_default(),
                url = %cfg.api_url_or_default(),
                "language service enabled with Gemini adapter"
            );
            Arc::new(
                GeminiAdapter::new(
                    cfg.api_url_or_default(),
                    key,
                    cfg.model_or_default(),
                    Duration::from_secs(cfg.request_timeout_secs_or_default()),
                )
                .map_err(|e| anyhow::anyhow!("{}", e))?,
            )
        }
        None => {
            warn!("WORDLENS_API_KEY / GEMINI_API_KEY not set, using mock language adapter");
            Arc::new(MockLanguageAdapter::new())
        }
    };

    // --- History store ---
    let store_path = cfg.store_path();
    info!(path = %store_path.display(), "history store");
    let store = JsonFileStore::new(&store_path);
    store.load().await.map_err(|e| anyhow::anyhow!("{}", e))?;
    let store: Arc<dyn KeyValueStorePort> = Arc::new(store);

    // --- Speech ---
    let speech: Arc<dyn SpeechPort> = if cfg.is_speech_enabled() {
        Arc::new(CommandSpeech::new(cfg.speech_command()))
    } else {
        Arc::new(NoSpeech)
    };

    // --- Service ---
    let surface = TerminalSurface::stdout();
    let word_of_day_visible = surface.word_of_day_flag();
    let service = Arc::new(
        LookupService::new(llm, speech, RecencyStore::new(store), Box::new(surface), mode)
            .with_word_of_the_day(WordOfTheDay::with_candidates(cfg.word_list())),
    );

    if let Some(word) = cli.word {
        service.init().await;
        return match service.lookup(&word).await {
            LookupOutcome::Completed(_) => Ok(()),
            other => anyhow::bail!("lookup did not complete: {:?}", other),
        };
    }

    wordlens::adapters::ui::init_ui(&mode.to_string());
    service.init().await;

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(
        Arc::clone(&service),
        word_of_day_visible,
    ));

    // --- Run (menu loop until Quit / Esc) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
