//! Config command - inspect configuration

use resolution_solver::config::AppConfig;
use resolution_solver::output::OutputMode;

use crate::cli::ConfigAction;

/// Show the effective configuration or its location
pub fn config_cmd(action: ConfigAction, config: &AppConfig, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            if mode == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                print!("{}", config.to_toml()?);
            }
        },
        ConfigAction::Path => {
            let path = AppConfig::config_path();
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "path": path,
                        "exists": path.exists()
                    })
                );
            } else {
                println!("{}", path.display());
            }
        },
    }
    Ok(())
}
