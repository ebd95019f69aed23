use clap::Parser;
use employee_export::config::resolve_formats;
use employee_export::config::toml_config::{OutputFilenames, TomlConfig};
use employee_export::utils::{logger, validation::Validate};
use employee_export::{CliConfig, ExportEngine, ExportError, ExportOptions, ExportService, LocalStorage};

fn run(config: &CliConfig) -> employee_export::Result<Vec<String>> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            tracing::debug!("Loading configuration from {}", path);
            Some(TomlConfig::from_file(path)?)
        }
        None => None,
    };

    let mut options = match &file_config {
        Some(file_config) => file_config.export_options()?,
        None => ExportOptions::default(),
    };
    // CLI 參數優先於設定檔
    if let Some(locale) = config.header_locale {
        options.header_locale = locale;
    }

    let filenames = file_config
        .as_ref()
        .map(TomlConfig::filenames)
        .unwrap_or_else(OutputFilenames::default);
    let output_path = file_config
        .as_ref()
        .and_then(TomlConfig::output_path)
        .unwrap_or(&config.output_path)
        .to_string();

    let formats = resolve_formats(
        config.formats.as_deref(),
        file_config.as_ref().and_then(TomlConfig::formats),
    );

    let input = std::fs::read(&config.input)?;
    let storage = LocalStorage::new(output_path);
    let engine = ExportEngine::new(storage, ExportService::new(options)?, filenames);

    engine.run(&input, &formats)
}

fn main() {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose, config.log_format);

    tracing::debug!("CLI config: {:?}", config);

    match run(&config) {
        Ok(paths) => {
            for path in &paths {
                println!("📁 {}", path);
            }
            tracing::info!("✅ Export completed, {} file(s) written", paths.len());
        }
        Err(e) => {
            report_error(&e);
            std::process::exit(exit_code(&e));
        }
    }
}

fn report_error(e: &ExportError) {
    tracing::error!("❌ Export failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
}

fn exit_code(e: &ExportError) -> i32 {
    use employee_export::utils::error::ErrorCategory;

    match e.category() {
        ErrorCategory::InvalidInput => 2,
        ErrorCategory::Configuration => 3,
        ErrorCategory::Serialization => 1,
        ErrorCategory::Io => 4,
    }
}
