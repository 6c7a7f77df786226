// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the process-wide default registry.
//!
//! All tests in this binary share one default registry, so every test uses
//! setting names of its own.

mod common;

use common::write_config;
use std::time::Duration;
use tomlcfg::prelude::*;

#[test]
fn test_global_good_parse() {
    let enabled = tomlcfg::declare_bool("good.enabled", false);
    let population = tomlcfg::declare_int("good.population", 0);
    let big = tomlcfg::declare_int64("good.big", 0);
    let count = tomlcfg::declare_uint("good.count", 0);
    let big_count = tomlcfg::declare_uint64("good.big_count", 0);
    let name = tomlcfg::declare_string("good.name", "Unknown");
    let temperature = tomlcfg::declare_float64("good.temperature", 0.0);
    let interval = tomlcfg::declare_duration("good.interval", Duration::from_secs(1));

    let file = write_config(
        r#"
[good]
enabled = true
population = 432427
big = -23
count = 24
big_count = 25
name = "Atlanta"
temperature = 99.6
interval = "250ms"
"#,
        ".conf",
    );
    tomlcfg::parse(file.path()).unwrap();

    assert!(enabled.get());
    assert_eq!(population.get(), 432427);
    assert_eq!(big.get(), -23);
    assert_eq!(count.get(), 24);
    assert_eq!(big_count.get(), 25);
    assert_eq!(name.get(), "Atlanta");
    assert_eq!(temperature.get(), 99.6);
    assert_eq!(interval.get(), Duration::from_millis(250));
}

#[test]
fn test_global_bad_parse() {
    tomlcfg::declare_int("bad.cool", 10);

    let err = tomlcfg::parse("configs/nope.conf").unwrap_err();
    assert!(matches!(err, ConfigError::FileRead { .. }));

    let file = write_config("[bad]\ncool = \"notanumber\"\n", ".conf");
    let err = tomlcfg::parse(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "The value for bad.cool is invalid");
}

#[test]
fn test_global_registry_policy() {
    let registry = tomlcfg::default_registry();
    assert_eq!(registry.policy(), ErrorPolicy::ContinueOnError);
    assert!(!registry.name().is_empty());
}
