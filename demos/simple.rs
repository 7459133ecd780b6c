//! Basic INI serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use serde_ini_ext::{from_str, to_string};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Config {
    name: String,
    debug: bool,
    server: Server,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Server {
    host: String,
    port: u16,
    allowed_origins: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "my-app".to_string(),
        debug: false,
        server: Server {
            host: "0.0.0.0".to_string(),
            port: 8080,
            allowed_origins: vec![
                "https://example.com".to_string(),
                "https://admin.example.com".to_string(),
            ],
        },
    };

    // Serialize to INI
    let ini = to_string(&config)?;
    println!("INI output:\n{}", ini);

    // Deserialize back to struct
    let config_back: Config = from_str(&ini)?;
    assert_eq!(config, config_back);
    println!("✓ Round-trip successful");

    Ok(())
}
