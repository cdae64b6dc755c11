use anyhow::Result;

use stratus_app::App;
use stratus_core::Config;

fn main() -> Result<()> {
    // Initialize core
    stratus_core::init()?;

    let config = Config::load()?;
    let validation = config.validate();
    for warning in &validation.warnings {
        tracing::warn!("Config warning - {}", warning);
    }
    if !validation.is_valid() {
        anyhow::bail!("Invalid configuration: {}", validation.error_summary());
    }

    let app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            // The alert boundary: users see the friendly message, the
            // log keeps the full error.
            eprintln!("{}", e.user_message());
            tracing::error!(error = %e, "Failed to start");
            return Err(e.into());
        }
    };

    tracing::info!("Stratus application started");

    println!("Stratus - Weather Lookup");
    println!("\nConfiguration:");
    println!("  Config directory: {}", app.config().config_dir.display());
    println!("  City source: {}", app.config().cities.base_url);
    println!("  Weather source: {}", app.config().weather.base_url);
    println!(
        "  Weather lookups: {}",
        if app.weather().is_some() { "enabled" } else { "disabled (no API key)" }
    );
    println!("  Pinned cities: {}", app.dashboard().len());

    Ok(())
}
