//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::Serialize;
use serde_ini_ext::{decode, encode, ini, to_value, IniMap, Value};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

const CONFIG: &str = "
; global settings
host = localhost
port = 8080
debug

[features]
enabled[] = auth
enabled[] = logging

[database.primary]
url = \"postgres://db/app\"
";

fn main() -> Result<(), Box<dyn Error>> {
    // Decode text into a tree
    let mut config = decode(CONFIG);

    if let Some(Value::String(host)) = config.get("host") {
        println!("Accessing field 'host': {}", host);
    }
    if let Some(debug) = config.get("debug").and_then(Value::as_bool) {
        println!("Accessing field 'debug': {}", debug);
    }
    if let Some(Value::Array(enabled)) = config
        .get("features")
        .and_then(Value::as_object)
        .and_then(|f| f.get("enabled"))
    {
        println!("Accessing field 'features.enabled': {} items", enabled.len());
    }

    // Edit it in place and encode it again
    if let Some(database) = config.get_mut("database").and_then(Value::as_object_mut) {
        database.insert(
            "replica".to_string(),
            ini!({ "url": "postgres://replica/app", "read_only": true }),
        );
    }
    config.remove("debug");
    println!("\nEdited config:\n{}", encode(&config));

    // Convert an existing struct to Value
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };
    let user_value = to_value(&user)?;
    let user_map = IniMap::try_from(user_value.clone())?;
    println!("User as INI:\n{}", encode(&user_map));

    // Runtime type checking
    println!("Type checks:");
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  is_string: {}", user_value.is_string());

    Ok(())
}
