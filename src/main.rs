//! duonotes main entrypoint.

use duonotes::run;
use duonotes::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
