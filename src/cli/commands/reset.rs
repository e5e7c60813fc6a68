use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::Controller;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Guarded delete-all. The store is only touched when the confirmation
/// code matches the configured one.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { code } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;
        let mut ctl = Controller::new(&mut store, cfg.validation_policy(), cfg.reset_code.clone());

        ctl.delete_all(code)?;

        success("All records have been deleted.");
    }
    Ok(())
}
