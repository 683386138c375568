//! CLI entrypoint for psalter
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use psalter_application::{
    AnalyzeLyricsUseCase, AnalyzeSongUseCase, RetrieveLyricsError, RetrieveLyricsUseCase,
    RunAssistantError, RunAssistantUseCase, SearchProvider,
};
use psalter_domain::{OutputFormat, Song};
use psalter_infrastructure::{
    ConfigLoader, DuckDuckGoSearch, FileConfig, GeniusSearch, HtmlLyricExtractor, OllamaGateway,
    ReqwestPageFetcher, SampleLyricsCatalog, build_http_client,
};
use psalter_presentation::{Cli, ConsoleFormatter, ProgressMode, output};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };
    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!("\nEffective configuration:\n{}", config.to_toml()?);
        return Ok(());
    }
    output::configure_color(config.output.color);

    let Some(title) = cli.title.as_deref() else {
        bail!("Song title is required");
    };
    let song = Song::try_new(title, cli.artist.as_deref())?;
    info!("Starting psalter for {}", song);

    // === Dependency Injection ===
    // One HTTP client per invocation; dropped on every exit path.
    let client = build_http_client(&config.retrieval.user_agent, config.fetch_timeout())?;

    let mut retrieve = RetrieveLyricsUseCase::new(
        Arc::new(ReqwestPageFetcher::new(client.clone())),
        Arc::new(HtmlLyricExtractor::new(config.extraction.clone())),
        Arc::new(SampleLyricsCatalog::default()),
    )
    .with_params(config.retrieval_params());

    if config.search.dedicated {
        let genius: Arc<dyn SearchProvider> = Arc::new(GeniusSearch::new(client.clone()));
        retrieve = retrieve.with_dedicated_search(genius);
    }
    if config.search.general {
        let ddg: Arc<dyn SearchProvider> = Arc::new(DuckDuckGoSearch::new(client.clone()));
        retrieve = retrieve.with_web_search(ddg);
    }
    let retrieve = Arc::new(retrieve);

    let gateway = Arc::new(OllamaGateway::new(config.ollama.base_url.clone()));

    // Assistant mode
    if cli.assistant {
        let use_case =
            RunAssistantUseCase::new(gateway, retrieve).with_params(config.assistant_params());
        let answer = match use_case.execute(&song).await {
            Ok(answer) => answer,
            Err(RunAssistantError::Retrieval(RetrieveLyricsError::LyricsNotFound { title })) => {
                bail!("No lyrics found for '{}' and --no-fallback is set", title)
            }
            Err(e) => return Err(e.into()),
        };
        println!("{}", ConsoleFormatter::format_assistant(&answer));
        return Ok(());
    }

    let use_case = AnalyzeSongUseCase::new(
        retrieve,
        AnalyzeLyricsUseCase::new(gateway).with_params(config.analysis_params()),
    );

    // Execute with or without progress reporting
    let reporter = ProgressMode::select(cli.quiet, std::io::stderr().is_terminal()).notifier();
    let result = match use_case.execute_with_progress(&song, reporter.as_ref()).await {
        Ok(result) => result,
        Err(RetrieveLyricsError::LyricsNotFound { title }) => {
            bail!("No lyrics found for '{}' and --no-fallback is set", title)
        }
    };

    // Output results
    let rendered = match config.output.format {
        OutputFormat::Report => ConsoleFormatter::format(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result.analysis),
    };

    println!("{}", rendered);

    Ok(())
}

/// Command-line flags take precedence over every config source.
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(model) = &cli.model {
        config.ollama.model = model.clone();
    }
    if let Some(url) = &cli.ollama_url {
        config.ollama.base_url = url.clone();
    }
    if let Some(format) = cli.output_format() {
        config.output.format = format;
    }
    if cli.no_fallback {
        config.retrieval.allow_fallback = false;
    }
}
