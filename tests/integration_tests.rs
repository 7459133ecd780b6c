use serde::{Deserialize, Serialize};
use serde_ini_ext::{
    from_reader, from_str, from_str_with_options, to_string, to_string_with_options, to_value,
    to_writer_with_options, DecodeOptions, EncodeOptions, Error, Platform, Value,
};
use std::collections::{BTreeMap, HashMap};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Service {
    name: String,
    enabled: bool,
    workers: u8,
    proxy: Option<String>,
    database: Database,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Database {
    host: String,
    port: u16,
    timeout: f64,
    replicas: Vec<String>,
    pool: Pool,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Pool {
    min: u32,
    max: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Level {
    Debug,
    Info,
    Warn,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Logging {
    level: Level,
    #[serde(default)]
    targets: Vec<String>,
}

fn service() -> Service {
    Service {
        name: "api".to_string(),
        enabled: true,
        workers: 4,
        proxy: None,
        database: Database {
            host: "db.internal".to_string(),
            port: 5432,
            timeout: 2.5,
            replicas: vec!["r1".to_string(), "r2".to_string()],
            pool: Pool { min: 1, max: 16 },
        },
    }
}

#[test]
fn test_nested_struct_layout() {
    let ini = to_string(&service()).unwrap();
    assert_eq!(
        ini,
        "name=api\n\
         enabled=true\n\
         workers=4\n\
         proxy=null\n\
         \n\
         [database]\n\
         host=db.internal\n\
         port=5432\n\
         timeout=2.5\n\
         replicas[]=r1\n\
         replicas[]=r2\n\
         \n\
         [database.pool]\n\
         min=1\n\
         max=16\n"
    );
}

#[test]
fn test_nested_struct_round_trip() {
    let ini = to_string(&service()).unwrap();
    let back: Service = from_str(&ini).unwrap();
    assert_eq!(back, service());
}

#[test]
fn test_round_trip_with_every_encode_option() {
    let options = EncodeOptions::new()
        .with_align(true)
        .with_sort(true)
        .with_newline(true)
        .with_platform(Platform::Windows)
        .with_section("app");
    let ini = to_string_with_options(&service(), options).unwrap();
    assert!(ini.starts_with("[app]\r\n\r\n"));
    assert!(ini.contains("[app.database.pool]\r\n"));

    let wrapped: HashMap<String, Service> = from_str(&ini).unwrap();
    assert_eq!(wrapped["app"], service());
}

#[test]
fn test_single_element_vec() {
    let mut svc = service();
    svc.database.replicas = vec!["only".to_string()];
    let back: Service = from_str(&to_string(&svc).unwrap()).unwrap();
    assert_eq!(back, svc);
}

#[test]
fn test_lone_value_reads_as_sequence() {
    let text = "name=api\nenabled=false\nworkers=1\n[database]\nhost=h\nport=1\ntimeout=0\nreplicas=solo\n[database.pool]\nmin=0\nmax=0\n";
    let svc: Service = from_str(text).unwrap();
    assert_eq!(svc.database.replicas, vec!["solo".to_string()]);
    assert_eq!(svc.proxy, None);
}

#[test]
fn test_empty_vec_is_omitted() {
    let logging = Logging {
        level: Level::Warn,
        targets: vec![],
    };
    let ini = to_string(&logging).unwrap();
    assert_eq!(ini, "level=Warn\n");

    let back: Logging = from_str(&ini).unwrap();
    assert_eq!(back, logging);
}

#[test]
fn test_unit_enum_variants() {
    let text = "level=Debug\ntargets[]=stdout\ntargets[]=file";
    let logging: Logging = from_str(text).unwrap();
    assert_eq!(logging.level, Level::Debug);
    assert_eq!(logging.targets, vec!["stdout", "file"]);

    let err = from_str::<Logging>("level=Verbose").unwrap_err();
    assert!(err.to_string().contains("Verbose"));

    let info: Logging = from_str("level=Info").unwrap();
    assert_eq!(info.level, Level::Info);
}

#[test]
fn test_special_strings_round_trip() {
    let mut map = BTreeMap::new();
    map.insert("comment".to_string(), "a ; b # c".to_string());
    map.insert("equals".to_string(), "k=v".to_string());
    map.insert("padded".to_string(), "  spaced  ".to_string());
    map.insert("bracket".to_string(), "[not a section]".to_string());
    map.insert("multiline".to_string(), "line one\nline two".to_string());
    map.insert("quoted".to_string(), "\"already quoted\"".to_string());
    map.insert("literal_true".to_string(), "true".to_string());
    map.insert("empty".to_string(), String::new());

    let ini = to_string(&map).unwrap();
    let back: BTreeMap<String, String> = from_str(&ini).unwrap();
    assert_eq!(back, map);
}

#[test]
fn test_numbers_become_strings() {
    #[derive(Serialize)]
    struct Numbers {
        small: i8,
        big: u64,
        negative: i64,
        float: f32,
        ch: char,
    }

    let value = to_value(&Numbers {
        small: -3,
        big: u64::MAX,
        negative: -42,
        float: 1.5,
        ch: 'x',
    })
    .unwrap();
    let map = value.as_object().unwrap();
    assert_eq!(map.get("small"), Some(&Value::from("-3")));
    assert_eq!(map.get("big"), Some(&Value::from(u64::MAX.to_string())));
    assert_eq!(map.get("negative"), Some(&Value::from("-42")));
    assert_eq!(map.get("float"), Some(&Value::from("1.5")));
    assert_eq!(map.get("ch"), Some(&Value::from("x")));
}

#[test]
fn test_invalid_number_reports_value() {
    let err = from_str::<Pool>("min=1\nmax=lots").unwrap_err();
    match err {
        Error::InvalidNumber { value, target } => {
            assert_eq!(value, "lots");
            assert_eq!(target, "u32");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_field() {
    let err = from_str::<Pool>("min=1").unwrap_err();
    assert!(err.to_string().contains("max"));
}

#[test]
fn test_duplicate_keys_without_brackets() {
    #[derive(Deserialize)]
    struct Paths {
        path: Vec<String>,
    }

    let options = DecodeOptions::new().with_bracketed_array(false);
    let paths: Paths = from_str_with_options("path=/usr/bin\npath=/bin", options).unwrap();
    assert_eq!(paths.path, vec!["/usr/bin", "/bin"]);
}

#[test]
fn test_writer_and_reader() {
    let mut buffer = Vec::new();
    let options = EncodeOptions::new().with_whitespace(true);
    to_writer_with_options(&mut buffer, &Pool { min: 2, max: 8 }, options).unwrap();
    assert_eq!(buffer, b"min = 2\nmax = 8\n");

    let pool: Pool = from_reader(buffer.as_slice()).unwrap();
    assert_eq!(pool, Pool { min: 2, max: 8 });
}

#[test]
fn test_top_level_scalar_is_rejected() {
    assert!(matches!(
        to_string(&42),
        Err(Error::TopLevelNotMapping(found)) if found == "string"
    ));
}

#[test]
fn test_dynamic_value_round_trip() {
    let text = "[server]\nhost=localhost\nports[]=80\nports[]=443\n";
    let value: Value = from_str(text).unwrap();
    let ports = value
        .as_object()
        .and_then(|m| m.get("server"))
        .and_then(Value::as_object)
        .and_then(|m| m.get("ports"))
        .and_then(Value::as_array)
        .unwrap();
    assert_eq!(ports, &vec![Value::from("80"), Value::from("443")]);
    assert_eq!(to_string(&value).unwrap(), text);
}
