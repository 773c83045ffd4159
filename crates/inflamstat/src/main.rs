mod bootstrap;

use std::path::Path;

use anyhow::{bail, Result};
use inflamstat_core::models::DataFormat;
use inflamstat_core::settings::Settings;
use inflamstat_data::analysis::{analyse_data, AnalysisResult};
use inflamstat_data::loader::RecordLoader;
use inflamstat_data::source::DataSource;
use inflamstat_ui::app::{App, ViewMode};

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("inflamstat v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Format: {}, View: {}, Theme: {}",
        settings.format,
        settings.view,
        settings.theme
    );

    let Some(data_dir) = settings
        .data_dir
        .clone()
        .or_else(bootstrap::discover_data_path)
    else {
        bail!("No data directory given and no default location exists (pass --data-dir)");
    };

    // The CLI restricts --format to known names, but the persisted
    // config file is hand-editable.
    let Some(format) = DataFormat::from_name(&settings.format) else {
        bail!("Unknown dataset format: {}", settings.format);
    };

    let result = match format {
        DataFormat::Csv => run_pipeline(DataSource::csv(&data_dir), settings.pattern.as_deref())?,
        DataFormat::Json => run_pipeline(DataSource::json(&data_dir), settings.pattern.as_deref())?,
    };

    if let Some(path) = &settings.export {
        export_result(&result, path)?;
        tracing::info!("Wrote analysis result to {}", path.display());
    }

    let app = App::new(&settings.theme, ViewMode::from_name(&settings.view));
    app.run(&result.series)?;

    Ok(())
}

/// Apply the optional pattern override and run the analysis pipeline.
fn run_pipeline<L: RecordLoader>(
    source: DataSource<L>,
    pattern: Option<&str>,
) -> inflamstat_core::Result<AnalysisResult> {
    let source = match pattern {
        Some(p) => source.with_pattern(p),
        None => source,
    };
    analyse_data(&source)
}

/// Write the full analysis result (series plus metadata) as pretty JSON.
fn export_result(result: &AnalysisResult, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(path, json)?;
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
