use clap::Parser;
use site_utils::core::reading_time::ReadingTimeEstimator;
use site_utils::utils::error::ErrorSeverity;
use site_utils::utils::{logger, validation::Validate};
use site_utils::{format_date_lossy, format_date_str, CliConfig, Command, Result, Settings};
use std::io::Read;
use std::path::Path;

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config.command) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::ReadingTime {
            file,
            wpm,
            config,
            json,
        } => {
            let estimator = match (wpm, config) {
                (Some(wpm), _) => ReadingTimeEstimator::new(wpm)?,
                (None, Some(path)) => load_settings(&path)?.reading_estimator()?,
                (None, None) => ReadingTimeEstimator::default(),
            };

            let text = read_input(&file)?;
            let estimate = estimator.estimate(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&estimate)?);
            } else {
                println!("{}", estimate);
            }
        }
        Command::FormatDate { date, lossy } => {
            let formatted = if lossy {
                format_date_lossy(&date)
            } else {
                format_date_str(&date)?
            };
            println!("{}", formatted);
        }
        Command::CheckConfig { config } => {
            let settings = load_settings(&config)?;
            tracing::info!("✅ Settings in {} are valid", config.display());
            println!("{} ({})", settings.site.name, settings.site.url);
            println!("  posts per page: {}", settings.site.posts_per_page);
            println!("  reading speed:  {} wpm", settings.reading.words_per_minute);
            println!("  integrations:   {}", settings.build.integrations.join(", "));
        }
    }

    Ok(())
}

fn load_settings(path: &Path) -> Result<Settings> {
    tracing::info!("📁 Loading settings from: {}", path.display());
    let settings = Settings::from_file(path)?;
    settings.validate()?;
    Ok(settings)
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(std::fs::read_to_string(path)?)
}
