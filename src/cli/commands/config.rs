use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            println!("{}", cfg.to_yaml());
            return Ok(());
        }

        if *check {
            let mut problems = 0;
            if cfg.technicians.is_empty() {
                warning("Technician roster is empty; every add will be rejected while enforce_roster is on.");
                problems += 1;
            }
            if cfg.reset_code.trim().is_empty() {
                warning("reset_code is empty; `reset` would accept an empty token.");
                problems += 1;
            }
            if problems == 0 {
                success("Configuration looks good.");
            }
            return Ok(());
        }

        return Err(AppError::Config(
            "Nothing to do: pass --print or --check".to_string(),
        ));
    }
    Ok(())
}
