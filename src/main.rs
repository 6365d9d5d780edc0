use std::env;
use std::io::{self, Read};
use std::process;

use tempodb_models::{logging, normalize::Entity};
use tracing::error;

fn main() {
    if let Err(e) = logging::init_logger("tempo_fmt") {
        eprintln!("{}", e);
    }

    let name = env::args().nth(1).unwrap_or_else(|| "datapoint".to_string());
    let entity = match Entity::from_name(&name) {
        Some(entity) => entity,
        None => {
            eprintln!("Invalid entity. Must be one of {}", Entity::NAMES.join(", "));
            process::exit(2);
        }
    };

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read stdin: {}", e);
        process::exit(1);
    }

    match entity.normalize(&input) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to normalize {}: {}", name, e);
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}
