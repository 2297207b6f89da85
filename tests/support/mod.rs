#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use iconcatalog::CatalogConfig;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path of a compiled binary from this package.
pub fn helper_binary(name: &str) -> PathBuf {
    let path = match name {
        "generate-metadata" => env!("CARGO_BIN_EXE_generate-metadata"),
        "check-version" => env!("CARGO_BIN_EXE_check-version"),
        other => panic!("unknown helper binary {other}"),
    };
    PathBuf::from(path)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}

/// A throwaway project root next to a throwaway design-system checkout.
///
/// Layout mirrors a real checkout: `<tmp>/icons` is the project root (with
/// the sentinels `find_project_root` looks for) and `<tmp>/common-react`
/// holds the enumeration, icon component and assets.
pub struct Fixture {
    temp: TempDir,
}

impl Fixture {
    pub fn new() -> Result<Self> {
        let temp = TempDir::new()?;
        let fixture = Self { temp };
        fs::create_dir_all(fixture.project_root().join("schema"))?;
        fs::write(
            fixture.project_root().join("Cargo.toml"),
            "[package]\nname = \"fixture\"\n",
        )?;
        fs::write(
            fixture.project_root().join("schema/icon_catalog.schema.json"),
            iconcatalog::catalog::CATALOG_SCHEMA_TEXT,
        )?;
        fs::create_dir_all(fixture.common_root())?;
        Ok(fixture)
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn project_root(&self) -> PathBuf {
        self.temp.path().join("icons")
    }

    pub fn common_root(&self) -> PathBuf {
        self.temp.path().join("common-react")
    }

    /// Config with the external round disabled and no env overrides.
    pub fn config(&self) -> CatalogConfig {
        let mut config = CatalogConfig::new(self.project_root(), Some(self.common_root()));
        config.classifier = None;
        config
    }

    pub fn output_path(&self) -> PathBuf {
        self.project_root().join("public/icons-metadata.json")
    }

    pub fn write_enum(&self, ids: &[&str]) -> Result<PathBuf> {
        let mut text = String::from("export enum IconEnum {\n");
        for id in ids {
            text.push_str(&format!("  {id} = '{id}',\n"));
        }
        text.push_str("}\n");
        self.write_common("src/types/icon.ts", &text)
    }

    pub fn write_packaged_enum(&self, ids: &[&str]) -> Result<PathBuf> {
        let mut text = String::from("export declare enum IconEnum {\n");
        for id in ids {
            text.push_str(&format!("    {id} = \"{id}\",\n"));
        }
        text.push_str("}\n");
        let path = self
            .project_root()
            .join("node_modules/@zydon/common/dist/types/icon.d.ts");
        write_file(&path, &text)?;
        Ok(path)
    }

    pub fn write_component(&self, text: &str) -> Result<PathBuf> {
        self.write_common("src/components/Icon/index.tsx", text)
    }

    pub fn write_asset(&self, rel: &str) -> Result<PathBuf> {
        self.write_common(
            &format!("src/assets/{rel}.tsx"),
            "export default function Asset() { return <svg />; }\n",
        )
    }

    pub fn write_package_version(&self, version: &str) -> Result<PathBuf> {
        self.write_common(
            "package.json",
            &format!("{{\"name\":\"@zydon/common\",\"version\":\"{version}\"}}\n"),
        )
    }

    pub fn write_common(&self, rel: &str, text: &str) -> Result<PathBuf> {
        let path = self.common_root().join(rel);
        write_file(&path, text)?;
        Ok(path)
    }

    /// Shell script standing in for the external classifier CLI.
    pub fn fake_classifier(&self, name: &str, body: &str) -> Result<PathBuf> {
        let path = self.temp.path().join("bin").join(name);
        write_file(&path, &format!("#!/bin/sh\n{body}\n"))?;
        make_executable(&path)?;
        Ok(path)
    }

    /// Fake classifier that prints `reply` regardless of its arguments.
    pub fn replying_classifier(&self, reply: &str) -> Result<PathBuf> {
        let reply_path = self.temp.path().join("bin").join("reply.txt");
        write_file(&reply_path, reply)?;
        self.fake_classifier(
            "fake-gemini",
            &format!("cat '{}'", reply_path.display()),
        )
    }

    pub fn read_catalog(&self) -> Result<serde_json::Value> {
        let text = fs::read_to_string(self.output_path())
            .with_context(|| format!("reading {}", self.output_path().display()))?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn write_file(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

pub const COMPONENT_SOURCE: &str = r#"import React from 'react';
import {
  Wallet03Icon,
  ArrowLeft01Icon as ArrowLeft,
} from 'hugeicons-react';
import ZydonLogo from 'assets/brand/ZydonLogo';
import Widget from 'assets/icons/Widget';

const ICONS = {
  [IconEnum.WALLET_03]: Wallet03Icon,
  [IconEnum.ARROW_LEFT]: ArrowLeft,
  [IconEnum.ZYDON_LOGO]: ZydonLogo,
  [IconEnum.UNKNOWN_WIDGET_99]: Widget,
};
"#;
