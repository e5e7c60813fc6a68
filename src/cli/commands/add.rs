use crate::cli::commands::resolve_technician;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config::prefs::Preferences;
use crate::core::controller::Controller;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::RecordDraft;
use crate::ui::messages::success;
use crate::utils::time;

/// Record a new overtime session, or overwrite an existing one with
/// `--edit ID`. Editing never changes the record's technician.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        technician,
        start,
        end,
        desc,
        edit,
    } = cmd
    {
        let name = resolve_technician(technician)?;
        let offset = cfg.display_utc_offset_minutes;

        // Timestamps parse in the display zone, persist in UTC
        let start_utc = time::parse_local(start, offset)?;
        let end_utc = time::parse_local(end, offset)?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let mut ctl = Controller::new(&mut store, cfg.validation_policy(), cfg.reset_code.clone());
        ctl.select_technician(&name)?;

        if let Some(id) = edit {
            ctl.begin_edit(*id)?;
        }

        ctl.set_pending(RecordDraft {
            technician: name.clone(),
            start: Some(start_utc),
            end: Some(end_utc),
            description: desc.clone().unwrap_or_default(),
        });

        let id = ctl.submit()?;

        if !cli.test {
            Preferences::remember(&name);
        }

        match edit {
            Some(_) => success(format!("Record {id} updated.")),
            None => success(format!("Record {id} saved.")),
        }
        println!("Total hours for {}: {}", name, ctl.total().hhmm());
    }
    Ok(())
}
