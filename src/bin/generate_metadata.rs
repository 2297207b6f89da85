//! Regenerates `public/icons-metadata.json` from the design-system sources.
//!
//! Exits non-zero only when the icon enumeration cannot be found; icons left
//! uncategorized are reported on stdout but do not fail the run.

use anyhow::{Context, Result, bail};
use iconcatalog::{
    CatalogConfig, Classifier, CommandClassifier, PipelineReport, RuleSet, find_project_root,
    init_logging, run_pipeline,
};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse()?;
    init_logging();

    let project_root = find_project_root()?;
    let config = CatalogConfig::from_env(project_root, cli.common_path);
    let command = config.classifier.clone().map(CommandClassifier::new);
    let classifier = command.as_ref().map(|c| c as &dyn Classifier);

    let report = run_pipeline(&config, RuleSet::builtin(), classifier)?;
    print_report(&report);
    Ok(())
}

struct Cli {
    common_path: Option<PathBuf>,
}

impl Cli {
    fn parse() -> Result<Self> {
        let mut args = env::args_os();
        let _program = args.next();
        let mut common_path = None;

        while let Some(arg) = args.next() {
            let arg_str = arg
                .to_str()
                .with_context(|| "Invalid UTF-8 in argument")?;
            match arg_str {
                "--common-path" => {
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
                "--help" | "-h" => usage(0),
                _ => usage(1),
            }
        }

        Ok(Self { common_path })
    }
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: generate-metadata [--common-path <dir>]\n\nOptions:\n  --common-path <dir>   Design-system checkout to read icons from (default: ../common-react)\n\nEnvironment:\n  ICON_CATALOG_ROOT           Project root that receives public/icons-metadata.json\n  ICON_CATALOG_CLASSIFIER     Classifier program (empty disables the external round)\n  ICON_CATALOG_MODEL          Classifier model identifier\n  ICON_CATALOG_TIMEOUT_SECS   Classifier timeout in seconds (default 120)\n  RUST_LOG                    Log filter (default info)"
    );
    std::process::exit(code);
}

fn print_report(report: &PipelineReport) {
    let catalog = &report.catalog;
    println!("Read {}", report.enumeration_path.display());
    if !report.duplicates.is_empty() {
        println!(
            "Skipped {} duplicate enum entries: {}",
            report.duplicates.len(),
            report.duplicates.join(", ")
        );
    }
    println!("Mapped {} icons to sources", report.mapped_sources);
    println!("External classification: {}", catalog.external.describe());
    if catalog.applied > 0 {
        println!("Applied {} external suggestions", catalog.applied);
    }
    println!();
    print!("{}", catalog.summary.render());
    if !report.missing_assets.is_empty() {
        println!(
            "\n{} custom icons have no asset file: {}",
            report.missing_assets.len(),
            report.missing_assets.join(", ")
        );
    }
    if !report.schema_problems.is_empty() {
        println!(
            "\nCatalog self-check reported {} problems (see log)",
            report.schema_problems.len()
        );
    }
    println!(
        "\nWrote {} icons to {}",
        catalog.records.len(),
        report.output_path.display()
    );
    if let Some(version) = &report.recorded_version {
        println!("Recorded built version {version}");
    }
}
