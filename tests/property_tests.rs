//! Property-based tests for the codec's round-trip guarantees.
//!
//! Generated trees stay inside what INI can express: no nulls, no empty
//! arrays, no mappings inside arrays, and every mapping holds at least one
//! scalar so its section header is written.

use proptest::prelude::*;
use serde_ini_ext::{
    decode, decode_with_options, encode, encode_with_options, from_str, safe, split_sections,
    to_string, unsafe_str, DecodeOptions, EncodeOptions, IniMap, Platform, Value,
};

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,8}"
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ;#=.\\[\\]\n_-]{0,16}"
        .prop_filter("literal keywords decode as non-strings", |s| {
            !matches!(s.as_str(), "true" | "false" | "null")
        })
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![any::<bool>().prop_map(Value::Bool), text().prop_map(Value::String)]
}

fn entry() -> impl Strategy<Value = Value> {
    prop_oneof![
        3 => scalar(),
        1 => prop::collection::vec(scalar(), 1..4).prop_map(Value::Array),
    ]
}

fn leaf_map() -> impl Strategy<Value = IniMap> {
    (
        (key(), scalar()),
        prop::collection::vec((key(), entry()), 0..4),
    )
        .prop_map(|(first, rest)| std::iter::once(first).chain(rest).collect())
}

fn document() -> impl Strategy<Value = IniMap> {
    let section = (leaf_map(), prop::collection::vec((key(), leaf_map()), 0..3)).prop_map(
        |(mut map, children)| {
            for (name, child) in children {
                if !map.contains_key(&name) {
                    map.insert(name, Value::Object(child));
                }
            }
            map
        },
    );
    (
        prop::collection::vec((key(), entry()), 0..4),
        prop::collection::vec((key(), section), 0..4),
    )
        .prop_map(|(entries, sections)| {
            let mut map: IniMap = entries.into_iter().collect();
            for (name, section) in sections {
                if !map.contains_key(&name) {
                    map.insert(name, Value::Object(section));
                }
            }
            map
        })
}

proptest! {
    // Backslashes are left out: `a\;` encodes to `a\\;`, which reads back as
    // `a\`. See the escape module's unit tests.
    #[test]
    fn prop_safe_then_unsafe_is_identity(s in "[^\\\\'\"\\p{C}]{0,24}") {
        prop_assert_eq!(unsafe_str(&safe(&s), true), s);
    }

    #[test]
    fn prop_unsafe_never_panics(s in "\\PC{0,32}", strip in any::<bool>()) {
        let _ = unsafe_str(&s, strip);
    }

    #[test]
    fn prop_decode_never_panics(s in "[\\PC\r\n]{0,256}") {
        let _ = decode(&s);
        let _ = decode_with_options(&s, DecodeOptions::new().with_bracketed_array(false));
    }

    #[test]
    fn prop_split_rejoins(s in "[a-z.\\\\]{0,16}") {
        let parts = split_sections(&s, '.');
        prop_assert_eq!(parts.join("."), s);
    }

    #[test]
    fn prop_document_round_trip(doc in document()) {
        let encoded = encode(&doc);
        prop_assert_eq!(decode(&encoded), doc);
    }

    #[test]
    fn prop_round_trip_with_formatting_options(
        doc in document(),
        align in any::<bool>(),
        sort in any::<bool>(),
        newline in any::<bool>(),
        windows in any::<bool>(),
    ) {
        let platform = if windows { Platform::Windows } else { Platform::Unix };
        let options = EncodeOptions::new()
            .with_align(align)
            .with_sort(sort)
            .with_newline(newline)
            .with_platform(platform);
        let encoded = encode_with_options(&doc, options);
        prop_assert!(!encoded.starts_with('\n') && !encoded.starts_with('\r'));
        prop_assert_eq!(decode(&encoded), doc);
    }

    #[test]
    fn prop_serde_map_round_trip(
        map in prop::collection::btree_map(key(), any::<u32>(), 0..8)
    ) {
        let ini = to_string(&map).unwrap();
        let back: std::collections::BTreeMap<String, u32> = from_str(&ini).unwrap();
        prop_assert_eq!(back, map);
    }
}
