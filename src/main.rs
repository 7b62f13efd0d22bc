//! rTimegrid main entrypoint.

use rtimegrid::run;
use rtimegrid::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
