//! otlogger main entrypoint.

use otlogger::run;

fn main() {
    if let Err(e) = run() {
        otlogger::ui::messages::error(e);
        std::process::exit(1);
    }
}
