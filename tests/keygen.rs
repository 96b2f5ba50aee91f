use kv_keygen::{run, KeygenConfig, KEY_LEN};
use std::collections::HashSet;

fn run_to_lines(config: &KeygenConfig) -> Vec<String> {
    let mut out = Vec::new();
    run(config, &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn output_is_count_header_plus_one_key_per_line() {
    let config = KeygenConfig {
        key_count: 3,
        seed: 1,
        ..Default::default()
    };
    let lines = run_to_lines(&config);

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "3");
    for key in &lines[1..] {
        assert_eq!(key.len(), KEY_LEN);
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
    }
    let distinct: HashSet<&String> = lines[1..].iter().collect();
    assert_eq!(distinct.len(), 3);
}

#[test]
fn zero_keys_prints_only_the_header() {
    let config = KeygenConfig {
        key_count: 0,
        ..Default::default()
    };
    assert_eq!(run_to_lines(&config), vec!["0".to_string()]);
}

#[test]
fn fixed_seed_reproduces_the_sequence() {
    let config = KeygenConfig {
        key_count: 25,
        seed: 1,
        ..Default::default()
    };
    assert_eq!(run_to_lines(&config), run_to_lines(&config));
}

#[test]
fn distinct_seeds_produce_distinct_sequences() {
    let a = KeygenConfig {
        key_count: 5,
        seed: 1,
        ..Default::default()
    };
    let b = KeygenConfig {
        key_count: 5,
        seed: 2,
        ..Default::default()
    };
    assert_ne!(run_to_lines(&a)[1..], run_to_lines(&b)[1..]);
}

#[test]
fn data_file_matches_the_printed_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("init-data.json");
    let config = KeygenConfig {
        key_count: 10,
        seed: 3,
        emit_data: true,
        data_path: path.clone(),
    };
    let lines = run_to_lines(&config);

    let raw = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let table = parsed.as_object().unwrap();

    assert_eq!(table.len(), 10);
    assert!(table.values().all(|v| v == &serde_json::json!(0)));

    let printed: Vec<&String> = lines[1..].iter().collect();
    let recorded: Vec<&String> = table.keys().collect();
    // preserve_order keeps generation order in the JSON object
    assert_eq!(printed, recorded);
}

#[test]
fn zero_keys_with_data_flag_writes_an_empty_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("init-data.json");
    let config = KeygenConfig {
        key_count: 0,
        emit_data: true,
        data_path: path.clone(),
        ..Default::default()
    };
    run(&config, &mut Vec::new()).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn unwritable_data_path_fails_after_keys_are_printed() {
    let config = KeygenConfig {
        key_count: 2,
        seed: 1,
        emit_data: true,
        data_path: "/nonexistent-dir/init-data.json".into(),
    };
    let mut out = Vec::new();
    assert!(run(&config, &mut out).is_err());

    // keys already on the stream stay valid
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 3);
}
