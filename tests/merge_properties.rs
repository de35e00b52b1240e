//! Property tests for the shallow merge.

use fynesse::config::ConfigPaths;
use fynesse::prelude::*;
use proptest::prelude::*;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::fs;
use tempfile::TempDir;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    prop_oneof![
        leaf(),
        prop::collection::btree_map("[a-z]{1,3}", leaf(), 0..4).prop_map(|m| {
            Value::Mapping(m.into_iter().map(|(k, v)| (Value::from(k), v)).collect())
        }),
    ]
}

fn layer() -> impl Strategy<Value = BTreeMap<String, Value>> {
    prop::collection::btree_map("[a-e]", value(), 0..5)
}

fn write_layer(path: &std::path::Path, layer: &BTreeMap<String, Value>) {
    let mapping: Mapping = layer
        .iter()
        .map(|(k, v)| (Value::from(k.as_str()), v.clone()))
        .collect();
    fs::write(path, serde_yaml::to_string(&mapping).unwrap()).unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn later_layer_replaces_whole_values(
        default in layer(),
        local in layer(),
        user in layer(),
    ) {
        let dir = TempDir::new().unwrap();
        let paths = ConfigPaths::new(
            dir.path().join("defaults.yml"),
            dir.path().join("machine.yml"),
            dir.path().join("_config.yml"),
        );
        write_layer(&dir.path().join("defaults.yml"), &default);
        write_layer(&dir.path().join("machine.yml"), &local);
        write_layer(&dir.path().join("_config.yml"), &user);

        let mut expected = default.clone();
        expected.extend(local.clone());
        expected.extend(user.clone());

        let result = Settings::builder()
            .with_paths(paths)
            .with_env_expansion(EnvExpansion::Disabled)
            .build();

        if expected.is_empty() {
            let is_missing = matches!(result, Err(ConfigError::Missing { .. }));
            prop_assert!(is_missing);
        } else {
            let settings = result.unwrap();
            prop_assert_eq!(settings.len(), expected.len());
            for (key, value) in &expected {
                prop_assert_eq!(settings.get(key), Some(value));
            }
        }
    }
}
