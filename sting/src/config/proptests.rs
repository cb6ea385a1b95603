//! Property-based tests for configuration resolution.

use super::keys::{env_var_name, flag_name, ConfigKey};
use super::resolver::{ConfigResolver, ValueSource};
use super::schema::{Config, PartialConfig};
use proptest::prelude::*;
use std::collections::HashMap;
use std::fs;

// Any printable text, including the empty string and YAML-significant words
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,24}",
        prop::sample::select(vec!["", " ", "true", "null", "~", "2024", "1.0", "- x", "a: b"])
            .prop_map(str::to_string),
    ]
}

// Which layers provide a value for one key: (file, env, flag)
fn presence_strategy() -> impl Strategy<Value = (bool, bool, bool)> {
    (any::<bool>(), any::<bool>(), any::<bool>())
}

fn key_strategy() -> impl Strategy<Value = ConfigKey> {
    prop::sample::select(ConfigKey::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Every key resolves to its highest-precedence provider, independently
    #[test]
    fn resolution_picks_highest_layer_per_key(
        plan in prop::collection::vec((presence_strategy(), value_strategy()), ConfigKey::ALL.len())
    ) {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("stingoftheviper.yaml");

        let mut file = PartialConfig::default();
        let mut env = HashMap::new();
        let mut flags = PartialConfig::default();

        for (key, ((in_file, in_env, in_flag), value)) in ConfigKey::ALL.into_iter().zip(&plan) {
            if *in_file {
                file.set(key, value.clone());
            }
            if *in_env {
                env.insert(key.env_var("STING"), value.clone());
            }
            if *in_flag {
                flags.set(key, value.clone());
            }
        }
        fs::write(&path, serde_yaml::to_string(&file).unwrap()).unwrap();

        let resolved = ConfigResolver::new(&path)
            .with_env_lookup(move |name| env.get(name).cloned())
            .resolve(&flags)
            .unwrap();

        prop_assert!(!resolved.bootstrapped);
        let defaults = Config::default();
        for (key, ((in_file, in_env, in_flag), value)) in ConfigKey::ALL.into_iter().zip(&plan) {
            let expected_source = if *in_flag {
                ValueSource::Flag
            } else if *in_env {
                ValueSource::Environment(key.env_var("STING"))
            } else if *in_file {
                ValueSource::File(path.clone())
            } else {
                ValueSource::Default
            };
            let expected_value = if *in_flag || *in_env || *in_file {
                value.as_str()
            } else {
                defaults.get(key)
            };

            prop_assert_eq!(resolved.source(key), &expected_source);
            prop_assert_eq!(resolved.config.get(key), expected_value);
        }
    }

    // Resolving twice against an existing file is stable and never rewrites it
    #[test]
    fn resolution_is_idempotent(key in key_strategy(), value in value_strategy()) {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("stingoftheviper.yaml");

        let mut file = PartialConfig::default();
        file.set(key, value);
        let contents = serde_yaml::to_string(&file).unwrap();
        fs::write(&path, &contents).unwrap();

        let resolver = ConfigResolver::new(&path).with_env_lookup(|_| None);
        let first = resolver.resolve(&PartialConfig::default()).unwrap();
        let second = resolver.resolve(&PartialConfig::default()).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }

    // Name transforms are pure functions of the dotted key
    #[test]
    fn env_names_are_upper_snake(prefix in "[A-Za-z]{1,8}", key in key_strategy()) {
        let name = env_var_name(&prefix, key.dotted());
        let expected_prefix = format!("{}_", prefix.to_ascii_uppercase());
        prop_assert!(name.starts_with(&expected_prefix));
        prop_assert!(name.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'));
        prop_assert_eq!(name.clone(), env_var_name(&prefix, key.dotted()));
    }

    #[test]
    fn flag_names_reverse_to_keys(key in key_strategy()) {
        let name = flag_name(key.dotted());
        prop_assert!(!name.contains('.'));
        prop_assert_eq!(ConfigKey::from_flag_name(&name), Some(key));
    }
}
