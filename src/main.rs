//! scanqr main entrypoint.

use scanqr::run;
use scanqr::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
