pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod reset;
pub mod roster;

use crate::config::prefs::Preferences;
use crate::errors::{AppError, AppResult};

/// Resolves the technician for commands where the name may be omitted:
/// explicit argument first, then the remembered selection.
pub(crate) fn resolve_technician(arg: &Option<String>) -> AppResult<String> {
    if let Some(name) = arg {
        return Ok(name.clone());
    }
    Preferences::load()
        .last_technician()
        .map(String::from)
        .ok_or(AppError::NoTechnician)
}
