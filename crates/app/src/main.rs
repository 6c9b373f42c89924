//! Entry point for objview.
//! Loads an OBJ model into a display list, falling back to a cube.

use std::path::PathBuf;

use anyhow::Result;
use asset::texture::{MAX_CHECKER_SIZE, TextureData};
use renderer::{HeadlessBackend, ModelSlot, SlotContent};

const DEFAULT_MODEL: &str = "model.obj";

#[derive(Clone, Debug, PartialEq)]
struct ViewerConfig {
    model: PathBuf,
    checker: bool,
    checker_size: u32,
    checker_cell: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            model: PathBuf::from(DEFAULT_MODEL),
            checker: true,
            checker_size: 64,
            checker_cell: 8,
        }
    }
}

/// Accept: [PATH] --checker[=on|off] --checker-size=N --checker-cell=N
fn parse_args<I: IntoIterator<Item = String>>(args: I) -> ViewerConfig {
    let mut cfg = ViewerConfig::default();
    for arg in args {
        if arg == "--checker" {
            cfg.checker = true;
        } else if let Some(val) = arg.strip_prefix("--checker=") {
            cfg.checker = matches!(
                val.to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            );
        } else if let Some(val) = arg.strip_prefix("--checker-size=") {
            cfg.checker_size = parse_positive(val, "--checker-size", cfg.checker_size);
            if cfg.checker_size > MAX_CHECKER_SIZE {
                log::warn!(
                    "--checker-size {} exceeds {}, capping.",
                    cfg.checker_size,
                    MAX_CHECKER_SIZE
                );
                cfg.checker_size = MAX_CHECKER_SIZE;
            }
        } else if let Some(val) = arg.strip_prefix("--checker-cell=") {
            cfg.checker_cell = parse_positive(val, "--checker-cell", cfg.checker_cell);
        } else if arg.starts_with("--") {
            log::warn!("Unknown option '{}', ignoring.", arg);
        } else {
            cfg.model = PathBuf::from(arg);
        }
    }
    cfg
}

fn parse_positive(val: &str, flag: &str, fallback: u32) -> u32 {
    match val.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            log::warn!("Invalid value '{}' for {}, using {}.", val, flag, fallback);
            fallback
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = parse_args(std::env::args().skip(1));
    log::info!("Starting objview. model={}", cfg.model.display());

    let mut slot = ModelSlot::new(HeadlessBackend::new());
    match slot.load(&cfg.model) {
        Ok(summary) => {
            log::info!(
                "Model ready: {} vertices, {} texcoords, {} normals, {} triangles ({} drawn)",
                summary.vertex_count,
                summary.texcoord_count,
                summary.normal_count,
                summary.triangle_count,
                summary.drawn_triangle_count
            );
            if cfg.checker && summary.textured {
                let texture = TextureData::checkerboard(cfg.checker_size, cfg.checker_cell);
                log::info!(
                    "Checkerboard texture {}x{} ({} bytes)",
                    texture.width,
                    texture.height,
                    texture.data.len()
                );
            }
        }
        Err(err) => {
            log::warn!("{}; showing placeholder cube.", err);
            slot.show_placeholder()?;
        }
    }

    if let SlotContent::Placeholder = slot.content() {
        log::info!("Placeholder cube installed.");
    }

    log::info!("Graceful shutdown. Bye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_args() {
        assert_eq!(parse_args(Vec::new()), ViewerConfig::default());
    }

    #[test]
    fn parses_path_and_flags() {
        let cfg = parse_args(args(&[
            "bunny.obj",
            "--checker=off",
            "--checker-size=128",
            "--checker-cell=16",
        ]));
        assert_eq!(cfg.model, PathBuf::from("bunny.obj"));
        assert!(!cfg.checker);
        assert_eq!(cfg.checker_size, 128);
        assert_eq!(cfg.checker_cell, 16);
    }

    #[test]
    fn checker_size_is_capped() {
        let cfg = parse_args(args(&["--checker-size=40000"]));
        assert_eq!(cfg.checker_size, MAX_CHECKER_SIZE);
        let texture = TextureData::checkerboard(cfg.checker_size, cfg.checker_cell);
        assert!(texture.is_valid());
    }

    #[test]
    fn bad_numbers_fall_back() {
        let cfg = parse_args(args(&["--checker-size=0", "--checker-cell=big", "--bogus"]));
        assert_eq!(cfg.checker_size, 64);
        assert_eq!(cfg.checker_cell, 8);
        assert_eq!(cfg.model, PathBuf::from(DEFAULT_MODEL));
    }
}
