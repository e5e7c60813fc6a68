use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cfg: &Config) -> AppResult<()> {
    if cfg.technicians.is_empty() {
        warning("No technicians configured.");
        return Ok(());
    }
    for name in &cfg.technicians {
        println!("{name}");
    }
    Ok(())
}
