use clap::Parser;
use vacancy_stats::utils::{logger, validation::Validate};
use vacancy_stats::{collect_reports, render_reports, CliConfig, Credentials, VacancyError};

fn fail(e: &VacancyError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() {
    let dotenv_loaded = dotenvy::dotenv().is_ok();
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting vacancy-stats");
    if dotenv_loaded {
        tracing::debug!("Loaded environment from .env");
    }
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => fail(&e),
    };

    let output = collect_reports(&settings, &credentials)
        .await
        .and_then(|reports| render_reports(&reports, config.json));

    match output {
        Ok(output) => {
            tracing::info!("✅ Reports collected");
            println!("{}", output);
        }
        Err(e) => fail(&e),
    }
}
