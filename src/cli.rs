use crate::config::types::HarnessConfig;
use crate::harness::Harness;
use crate::lang::registry;
use crate::probe::catalog;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and run probes, then report per-language pass/fail
    Run {
        /// Probe language(s) to run; defaults to the whole catalog
        #[arg(long = "language", value_name = "TAG")]
        languages: Vec<String>,
        /// Run probes one at a time instead of in parallel
        #[arg(long)]
        sequential: bool,
        /// Emit the report as JSON instead of a summary
        #[arg(long)]
        json: bool,
        /// Run each built probe twice and compare stdout + exit code
        #[arg(long)]
        check_determinism: bool,
        /// Keep workspace artifacts for diagnosis
        #[arg(long)]
        keep_artifacts: bool,
        /// Base directory for run workspaces
        #[arg(long, value_name = "DIR")]
        workdir: Option<PathBuf>,
    },
    /// List the built-in probe catalog
    List,
    /// Print a probe's embedded source
    Show {
        #[arg(long, value_name = "TAG")]
        language: String,
    },
    /// Check that the required toolchains are installed
    CheckDeps {
        /// Show detailed version information
        #[arg(long)]
        verbose: bool,
    },
}

pub fn run() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            languages,
            sequential,
            json,
            check_determinism,
            keep_artifacts,
            workdir,
        } => {
            let mut config = HarnessConfig {
                parallel: !sequential,
                check_determinism,
                keep_artifacts,
                ..HarnessConfig::default()
            };
            if let Some(dir) = workdir {
                config.workspace_root = dir;
            }

            let selected: Vec<String> = if languages.is_empty() {
                catalog::languages().iter().map(|s| s.to_string()).collect()
            } else {
                languages
            };

            let harness = Harness::new(config)?;
            let report = harness.run_all(&selected)?;

            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{}", report.render_summary());
            }

            if !report.all_passed {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::List => {
            for probe in catalog::PROBES {
                let ops: Vec<&str> = probe.operations.iter().map(|op| op.name()).collect();
                println!(
                    "{:<8} {}  [{}]",
                    probe.language,
                    &probe.fingerprint()[..12],
                    ops.join(", ")
                );
            }
            Ok(())
        }
        Commands::Show { language } => {
            let tag = registry::canonical_tag(&language)?;
            let probe = catalog::probe_for(tag)?;
            print!("{}", probe.source);
            Ok(())
        }
        Commands::CheckDeps { verbose } => check_toolchains(verbose),
    }
}

/// Check whether every adapter's toolchain binaries respond to a version
/// probe, and report per language.
fn check_toolchains(verbose: bool) -> Result<()> {
    use std::process::Command;

    let mut missing = Vec::new();

    for tag in catalog::languages() {
        let adapter = registry::adapter_for(tag)?;
        let mut lang_ok = true;
        let mut versions = Vec::new();

        for requirement in adapter.requirements() {
            match Command::new(requirement.command)
                .arg(requirement.version_arg)
                .output()
            {
                Ok(output) if output.status.success() => {
                    // Some toolchains (javac, java) print the version to stderr.
                    let version_info = if !output.stdout.is_empty() {
                        String::from_utf8_lossy(&output.stdout)
                    } else {
                        String::from_utf8_lossy(&output.stderr)
                    }
                    .lines()
                    .next()
                    .unwrap_or("")
                    .to_string();
                    versions.push(format!("  {} -> {}", requirement.command, version_info.trim()));
                }
                Ok(_) => {
                    lang_ok = false;
                    versions.push(format!("  {} -> FAILED", requirement.command));
                }
                Err(_) => {
                    lang_ok = false;
                    versions.push(format!("  {} -> NOT FOUND", requirement.command));
                }
            }
        }

        if lang_ok {
            println!("✅ {} - OK", tag);
        } else {
            println!("❌ {} - MISSING", tag);
            missing.push(tag);
        }
        if verbose {
            for version in versions {
                println!("{}", version);
            }
        }
    }

    if missing.is_empty() {
        println!("\nAll probe toolchains are installed");
        Ok(())
    } else {
        println!("\nMissing toolchains: {}", missing.join(", "));
        std::process::exit(1);
    }
}
