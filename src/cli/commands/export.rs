use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use std::io;
use std::path::Path;

/// Export the full dataset (all technicians) to a spreadsheet file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        let mut store = SqliteStore::open(&cfg.database)?;
        ExportLogic::export(
            &mut store,
            format.clone(),
            path,
            *force,
            cfg.display_utc_offset_minutes,
        )?;
    }
    Ok(())
}
