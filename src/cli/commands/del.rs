use crate::cli::commands::resolve_technician;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::controller::Controller;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Delete one record by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, technician } = cmd {
        let name = resolve_technician(technician)?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let mut ctl = Controller::new(&mut store, cfg.validation_policy(), cfg.reset_code.clone());
        ctl.select_technician(&name)?;
        ctl.delete_one(*id)?;

        success(format!("Record {id} deleted."));
        println!("Total hours for {}: {}", name, ctl.total().hhmm());
    }
    Ok(())
}
