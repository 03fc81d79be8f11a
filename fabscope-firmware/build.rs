//! Build script for fabscope-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates scope.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate scope.toml configuration at compile time
///
/// Mirrors the runtime parser's rules so that a bad file fails the build
/// instead of silently booting with defaults.
fn validate_config() {
    println!("cargo:rerun-if-changed=scope.toml");

    let config_path = Path::new("scope.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: scope.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds scope.toml at build time.                   ║\n\
            ║  Please create one in the fabscope-firmware directory.           ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read scope.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Parse and validate TOML syntax
    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in scope.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                {}\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let errors = validate_scope(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid scope configuration                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=scope.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check keys and ranges
///
/// Keys may sit at the top level or under `[scope]`; nothing else is
/// accepted.
fn validate_scope(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return errors,
    };

    let mut entries: Vec<(&String, &toml::Value)> = Vec::new();
    for (key, value) in root {
        match (key.as_str(), value) {
            ("scope", toml::Value::Table(section)) => entries.extend(section.iter()),
            (_, toml::Value::Table(_)) => errors.push(format!("unknown section [{}]", key)),
            _ => entries.push((key, value)),
        }
    }

    for (key, value) in entries {
        let range = match key.as_str() {
            "sample_period_us" => 4..=1_000_000,
            "baudrate" => 1..=u32::MAX as i64,
            "trigger_level" => 0..=255,
            _ => {
                errors.push(format!("unknown key '{}'", key));
                continue;
            }
        };

        match value.as_integer() {
            Some(v) if range.contains(&v) => {}
            Some(_) => errors.push(format!(
                "{} must be {}-{}",
                key,
                range.start(),
                range.end()
            )),
            None => errors.push(format!("{} must be an integer", key)),
        }
    }

    errors
}
