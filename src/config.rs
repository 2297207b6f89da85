//! Paths and external-tool settings for one generator run.
//!
//! Defaults describe the usual layout: the design-system checkout sits next
//! to this project as `../common-react`, the catalog lands in
//! `public/icons-metadata.json`, and the classifier is the `gemini` CLI.
//! Environment overrides are read once through a lookup closure so tests can
//! feed values without touching the process environment.

use crate::sources::ComponentSourceSpec;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Program used for the external classification round; empty disables it.
pub const ENV_CLASSIFIER: &str = "ICON_CATALOG_CLASSIFIER";
/// Model identifier passed to the classifier.
pub const ENV_MODEL: &str = "ICON_CATALOG_MODEL";
/// Wall-clock limit for the classifier call, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "ICON_CATALOG_TIMEOUT_SECS";

pub const DEFAULT_CLASSIFIER_TIMEOUT: Duration = Duration::from_secs(120);

const DEFAULT_COLLABORATOR_DIR: &str = "../common-react";
const ENUM_SOURCE: &str = "src/types/icon.ts";
const PACKAGED_ENUM_SOURCE: &str = "node_modules/@zydon/common/dist/types/icon.d.ts";
const COMPONENT_SOURCE: &str = "src/components/Icon/index.tsx";
const ASSETS_DIR: &str = "src/assets";
const PACKAGE_MANIFEST: &str = "package.json";
const OUTPUT_FILE: &str = "public/icons-metadata.json";
const LAST_VERSION_FILE: &str = ".last-version";

/// Command line of the external classifier.
///
/// The prompt always travels as one argv entry; nothing here is ever joined
/// into a shell string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub program: String,
    pub model_flag: String,
    pub model: String,
    pub prompt_flag: String,
    pub output_flag: String,
    pub output_format: String,
    pub timeout: Duration,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            program: "gemini".to_string(),
            model_flag: "-m".to_string(),
            model: "gemini-2.0-flash-lite".to_string(),
            prompt_flag: "-p".to_string(),
            output_flag: "-o".to_string(),
            output_format: "text".to_string(),
            timeout: DEFAULT_CLASSIFIER_TIMEOUT,
        }
    }
}

impl ClassifierConfig {
    /// `[model-flag, model, prompt-flag, prompt, output-flag, format]`.
    pub fn args(&self, prompt: &str) -> Vec<String> {
        vec![
            self.model_flag.clone(),
            self.model.clone(),
            self.prompt_flag.clone(),
            prompt.to_string(),
            self.output_flag.clone(),
            self.output_format.clone(),
        ]
    }
}

#[derive(Clone, Debug)]
pub struct CatalogConfig {
    pub project_root: PathBuf,
    /// Checkout of the design-system library that owns the icon sources.
    pub collaborator_root: PathBuf,
    /// `None` disables the external classification round.
    pub classifier: Option<ClassifierConfig>,
    pub components: ComponentSourceSpec,
}

impl CatalogConfig {
    pub fn new(project_root: PathBuf, collaborator_root: Option<PathBuf>) -> Self {
        let collaborator_root =
            collaborator_root.unwrap_or_else(|| project_root.join(DEFAULT_COLLABORATOR_DIR));
        Self {
            project_root,
            collaborator_root,
            classifier: Some(ClassifierConfig::default()),
            components: ComponentSourceSpec::default(),
        }
    }

    /// `new` plus overrides from the process environment.
    pub fn from_env(project_root: PathBuf, collaborator_root: Option<PathBuf>) -> Self {
        Self::new(project_root, collaborator_root).with_overrides(|key| env::var(key).ok())
    }

    /// Apply classifier overrides from `lookup`. Unparsable values are
    /// ignored with a warning.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(program) = lookup(ENV_CLASSIFIER) {
            if program.trim().is_empty() {
                self.classifier = None;
                return self;
            }
            if let Some(classifier) = self.classifier.as_mut() {
                classifier.program = program.trim().to_string();
            }
        }
        let Some(classifier) = self.classifier.as_mut() else {
            return self;
        };
        if let Some(model) = lookup(ENV_MODEL) {
            if !model.trim().is_empty() {
                classifier.model = model.trim().to_string();
            }
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => classifier.timeout = Duration::from_secs(secs),
                _ => warn!(value = %raw, "ignoring invalid {ENV_TIMEOUT_SECS}"),
            }
        }
        self
    }

    /// Enumeration files to try, in order: the checkout's source, then the
    /// copy shipped inside the installed package.
    pub fn enumeration_candidates(&self) -> Vec<PathBuf> {
        vec![
            self.collaborator_root.join(ENUM_SOURCE),
            self.project_root.join(PACKAGED_ENUM_SOURCE),
        ]
    }

    pub fn component_source_path(&self) -> PathBuf {
        self.collaborator_root.join(COMPONENT_SOURCE)
    }

    pub fn assets_root(&self) -> PathBuf {
        self.collaborator_root.join(ASSETS_DIR)
    }

    pub fn package_manifest_path(&self) -> PathBuf {
        self.collaborator_root.join(PACKAGE_MANIFEST)
    }

    pub fn output_path(&self) -> PathBuf {
        self.project_root.join(OUTPUT_FILE)
    }

    pub fn last_version_path(&self) -> PathBuf {
        self.project_root.join(LAST_VERSION_FILE)
    }
}

/// Resolve a `--common-path` value against `cwd`, canonicalizing when the
/// directory exists.
pub fn resolve_collaborator_arg(cwd: &Path, raw: &str) -> PathBuf {
    let candidate = cwd.join(raw);
    candidate.canonicalize().unwrap_or(candidate)
}
