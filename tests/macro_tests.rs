use serde_ini_ext::{encode, ini, IniMap, Value};

#[test]
fn test_ini_macro_scalars() {
    assert_eq!(ini!(null), Value::Null);
    assert_eq!(ini!(true), Value::Bool(true));
    assert_eq!(ini!(false), Value::Bool(false));
    assert_eq!(ini!(""), Value::String(String::new()));
    assert_eq!(ini!("hello world"), Value::from("hello world"));
}

#[test]
fn test_ini_macro_numbers_are_strings() {
    assert_eq!(ini!(42), Value::from("42"));
    assert_eq!(ini!(3.5), Value::from("3.5"));
    assert_eq!(ini!(-123), Value::from("-123"));
}

#[test]
fn test_ini_macro_expressions() {
    let name = "Alice".to_string();
    let missing: Option<&str> = None;
    assert_eq!(ini!(name), Value::from("Alice"));
    assert_eq!(ini!(missing), Value::Null);
    assert_eq!(ini!((1 + 2)), Value::from("3"));
}

#[test]
fn test_ini_macro_arrays() {
    assert_eq!(
        ini!([1, "two", true, null]),
        Value::Array(vec![
            Value::from("1"),
            Value::from("two"),
            Value::Bool(true),
            Value::Null,
        ])
    );
    assert_eq!(ini!(["trailing",]), Value::Array(vec![Value::from("trailing")]));
}

#[test]
fn test_ini_macro_nested_sections() {
    let value = ini!({
        "app": {
            "name": "demo",
            "hosts": ["a", "b"],
            "log": { "level": "debug" }
        },
    });

    let map = IniMap::try_from(value).unwrap();
    assert_eq!(
        encode(&map),
        "[app]\nname=demo\nhosts[]=a\nhosts[]=b\n\n[app.log]\nlevel=debug\n"
    );
}

#[test]
fn test_ini_macro_preserves_key_order() {
    let value = ini!({ "z": "1", "a": "2", "m": "3" });
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}
