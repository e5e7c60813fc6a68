use crate::cli::commands::resolve_technician;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config::prefs::Preferences;
use crate::core::controller::Controller;
use crate::core::duration::WorkDuration;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::time::format_local;

/// Select a technician, list their records (most recent first) and print
/// the aggregate total.
pub fn handle(cli: &Cli, cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { technician } = cmd {
        let name = resolve_technician(technician)?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let mut ctl = Controller::new(&mut store, cfg.validation_policy(), cfg.reset_code.clone());
        ctl.select_technician(&name)?;

        if !cli.test {
            Preferences::remember(&name);
        }

        println!("Records for {name}");

        if ctl.records().is_empty() {
            warning("No records.");
        }

        let offset = cfg.display_utc_offset_minutes;
        for r in ctl.records() {
            let hours = WorkDuration::between(r.start, r.end);
            let desc = if r.description.is_empty() {
                "-"
            } else {
                r.description.as_str()
            };
            println!(
                "[{:>4}] {} → {}  {}  {}",
                r.id,
                format_local(r.start, offset),
                format_local(r.end, offset),
                hours.hhmm(),
                desc
            );
        }

        println!("Total hours: {}", ctl.total().hhmm());
    }
    Ok(())
}
