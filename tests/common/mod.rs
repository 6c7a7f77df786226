// SPDX-License-Identifier: MIT OR Apache-2.0

//! Helpers shared by the integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// A document exercising every setting type, sections and nested sections.
#[allow(dead_code)]
pub const GOOD_CONFIG: &str = r#"
my_bool = true
my_int = 22
my_bigint = -23
my_uint = 24
my_biguint = 25
my_string = "ok"
my_bigfloat = 26.1
my_timeout = "1m30s"

[section]
name = "cool dude"

[places.california]
name = "neat dude"
"#;

/// A document with a type mismatch and an undeclared nested key.
#[allow(dead_code)]
pub const SIMPLE_CONFIG: &str = r#"
cool = "notanumber"

[neat.terrific]
rad = true
"#;

/// A document that is not valid TOML.
#[allow(dead_code)]
pub const INVALID_CONFIG: &str = "[section\nname = \"unterminated";

/// Writes `contents` to a temporary file ending in `suffix`.
///
/// The file is deleted when the returned handle is dropped.
#[allow(dead_code)]
pub fn write_config(contents: &str, suffix: &str) -> NamedTempFile {
    write_config_bytes(contents.as_bytes(), suffix)
}

/// Writes raw bytes to a temporary file, for documents that are not UTF-8.
#[allow(dead_code)]
pub fn write_config_bytes(contents: &[u8], suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("tomlcfg-")
        .suffix(suffix)
        .tempfile()
        .expect("create temp config file");
    file.write_all(contents).expect("write temp config file");
    file
}
