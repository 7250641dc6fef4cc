use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use routegen_decl::{DeclarationSet, TypeDeclaration};
use routegen_resolver::{RunOutput, run};

use super::args::CliArgs;
use super::config::{load_config, resolve_options};

/// Exit status codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_DIAGNOSTICS: i32 = 1;
pub const EXIT_INPUT_FAILURE: i32 = 2;

const DUMP_EXTENSION: &str = "json";

pub struct DriverOutcome {
    pub dump_files: Vec<PathBuf>,
    pub output: RunOutput,
}

impl DriverOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.output.has_diagnostics() {
            EXIT_DIAGNOSTICS
        } else {
            EXIT_SUCCESS
        }
    }
}

/// Resolve the dump files named by `inputs`.
///
/// Directories are walked recursively for `*.json` files in file-name order;
/// files are taken as given.
pub fn collect_dump_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            for entry in WalkDir::new(input).sort_by_file_name() {
                let entry = entry.with_context(|| format!("failed to walk {}", input.display()))?;
                if entry.file_type().is_file() && has_dump_extension(entry.path()) {
                    files.push(entry.into_path());
                }
            }
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            bail!("input not found: {}", input.display());
        }
    }
    Ok(files)
}

fn has_dump_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case(DUMP_EXTENSION))
}

/// Read every dump into one declaration set.
///
/// A type recorded in several dumps (partial declarations split across
/// projects or files) is folded into a single declaration.
pub fn load_declarations(files: &[PathBuf]) -> Result<DeclarationSet> {
    let mut declarations: Vec<TypeDeclaration> = Vec::new();
    for file in files {
        let source =
            std::fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
        let dump = DeclarationSet::from_json(&source)
            .with_context(|| format!("failed to parse declaration dump {}", file.display()))?;
        debug!(file = %file.display(), declarations = dump.len(), "loaded declaration dump");
        declarations.extend(dump.into_declarations());
    }
    Ok(DeclarationSet::new(declarations))
}

/// Load configuration and dumps, run the pipeline and write the model.
#[tracing::instrument(level = "debug", skip_all)]
pub fn execute(args: &CliArgs) -> Result<DriverOutcome> {
    let config = args.config.as_deref().map(load_config).transpose()?;
    let options = resolve_options(config.as_ref(), &args.options);

    let dump_files = collect_dump_files(&args.inputs)?;
    let set = load_declarations(&dump_files)?;
    debug!(files = dump_files.len(), declarations = set.len(), "inputs loaded");

    let output = run(&set, &options);
    if !args.no_emit {
        write_output(args, &output)?;
    }

    Ok(DriverOutcome { dump_files, output })
}

fn write_output(args: &CliArgs, output: &RunOutput) -> Result<()> {
    let json = if args.compact {
        serde_json::to_string(output)
    } else {
        output.to_json()
    }
    .context("failed to serialize route model")?;

    match &args.out {
        Some(path) => std::fs::write(path, format!("{json}\n"))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").context("failed to write route model to stdout")
        }
    }
}
