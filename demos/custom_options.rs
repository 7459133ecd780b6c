//! Customizing INI output with EncodeOptions and DecodeOptions.
//!
//! Run with: cargo run --example custom_options

use serde::{Deserialize, Serialize};
use serde_ini_ext::{
    decode_with_options, encode_with_options, to_string, to_string_with_options, DecodeOptions,
    EncodeOptions, Platform,
};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct Config {
    name: String,
    version: String,
    debug: bool,
    include: Vec<String>,
}

const UNREAL: &str = r#"[/Script/Engine.RendererSettings]
r.DefaultFeature.AutoExposure=False
+ActiveClassRedirects=(OldClassName="A",NewClassName="B")
+ActiveClassRedirects=(OldClassName="C",NewClassName="D")
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        debug: true,
        include: vec!["conf.d/*.ini".to_string(), "local.ini".to_string()],
    };

    println!("Default:");
    println!("{}", to_string(&config)?);

    println!("Aligned and sorted:");
    let aligned = EncodeOptions::new().with_align(true).with_sort(true);
    println!("{}", to_string_with_options(&config, aligned)?);

    println!("Under a section, repeated keys instead of brackets:");
    let sectioned = EncodeOptions::new()
        .with_section("app")
        .with_bracketed_array(false)
        .with_newline(true);
    println!("{}", to_string_with_options(&config, sectioned)?);

    println!("Windows line endings:");
    let windows = EncodeOptions::new().with_platform(Platform::Windows);
    let crlf = to_string_with_options(&config, windows)?;
    println!("{:?}\n", crlf);

    // Unreal Engine files use dots inside section names and repeat keys
    // instead of bracketing them.
    println!("Unreal Engine style:");
    let decoded = decode_with_options(
        UNREAL,
        DecodeOptions::new()
            .with_split_separator('*')
            .with_bracketed_array(false),
    );
    let encoded = encode_with_options(
        &decoded,
        EncodeOptions::new()
            .with_split_separator('*')
            .with_bracketed_array(false)
            .with_skip_escaping(true),
    );
    assert_eq!(encoded, UNREAL);
    println!("{}", encoded);

    Ok(())
}
