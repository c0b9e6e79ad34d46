//! Terminal demo: select a unit, send it across the board, watch it walk.
//!
//! Run: cargo run --bin skirmish [scenario.json]

use std::io;

use tacgrid_demos::{Scenario, run};

fn main() {
    let scenario = match std::env::args().nth(1) {
        Some(path) => match Scenario::load(&path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
        None => Scenario::default(),
    };

    let stdout = io::stdout();
    if let Err(e) = run(&scenario, &mut stdout.lock()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
