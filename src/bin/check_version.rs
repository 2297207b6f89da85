//! Reports whether the design-system package changed since the last catalog
//! build.
//!
//! Exit 0 means rebuild needed (versions differ, or no build recorded).
//! Exit 1 means skip: versions match, or the collaborator version could not
//! be read.

use anyhow::{Context, Result, bail};
use iconcatalog::{CatalogConfig, VersionCheck, find_project_root};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            println!("{err:#}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<bool> {
    let common_path = parse_args()?;
    let project_root = find_project_root()?;
    let config = CatalogConfig::new(project_root, common_path);

    let manifest = config.package_manifest_path();
    let check = VersionCheck::load(&manifest, &config.last_version_path())
        .with_context(|| format!("Could not read collaborator version from {}", manifest.display()))?;

    println!("Current: {}", check.current);
    println!("Last built: {}", check.last_built);
    if check.rebuild_needed() {
        println!("Version changed, rebuild needed");
    } else {
        println!("Version unchanged, skip");
    }
    Ok(check.rebuild_needed())
}

fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args_os();
    let _program = args.next();
    let mut common_path = None;
    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some("--common-path") => {
                let Some(value) = args.next() else {
                    bail!("--common-path requires a directory");
                };
                let value = value
                    .to_str()
                    .with_context(|| "Invalid UTF-8 in --common-path")?
                    .to_string();
                let cwd = env::current_dir()?;
                common_path = Some(iconcatalog::config::resolve_collaborator_arg(&cwd, &value));
            }
            Some("--help" | "-h") => {
                eprintln!("Usage: check-version [--common-path <dir>]");
                std::process::exit(0);
            }
            _ => bail!("Unknown argument {}", arg.to_string_lossy()),
        }
    }
    Ok(common_path)
}
