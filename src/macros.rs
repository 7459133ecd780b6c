/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Object keys must be string literals. Leaves that are not `null`, `true`,
/// `false`, an array or an object go through `Value::from`, so numbers turn
/// into strings.
///
/// ```rust
/// use serde_ini_ext::{ini, Value};
///
/// let value = ini!({
///     "server": { "host": "localhost", "port": 8080 },
///     "tags": ["a", "b"]
/// });
/// let server = value.as_object().and_then(|m| m.get("server")).unwrap();
/// assert_eq!(server.as_object().unwrap().get("port"), Some(&Value::from("8080")));
/// ```
#[macro_export]
macro_rules! ini {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::ini!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::IniMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::IniMap::new();
        $(
            object.insert($key.to_string(), $crate::ini!($value));
        )*
        $crate::Value::Object(object)
    }};

    ($other:expr) => {
        $crate::Value::from($other)
    };
}
