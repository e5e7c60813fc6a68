use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Create the config directory, config file and database schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    // Opening the store runs the schema migrations
    SqliteStore::open(&cfg.database)?;

    success(format!("Database initialized at {}", cfg.database));
    if !cli.test {
        success(format!(
            "Configuration written to {}",
            Config::config_file().display()
        ));
    }
    Ok(())
}
