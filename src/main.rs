//! abgleich main entrypoint.

use abgleich::run;
use abgleich::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(&e);
        std::process::exit(1);
    }
}
