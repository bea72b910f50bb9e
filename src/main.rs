//! sofreport main entrypoint.

use sofreport::run;
use sofreport::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
