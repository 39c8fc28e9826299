//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use bundler_core::lang::conventions::ARRAY_SUFFIX;
use bundler_core::lang::operations::{self, OperationId};
use bundler_core::lang::platform;

use crate::backend::writer::IndentWriter;
use crate::backend::{JsonEmitter, SummaryEmitter, emit_all};
use crate::frontend::manifest::ManifestUniverse;
use crate::plan::PlannerConfig;
use crate::processor::{ProcessOutcome, Processor};

use super::{CliError, CliResult, ExitCode, OutputFormat};

/// Maximum manifest size (100 MB)
const MAX_MANIFEST_SIZE: u64 = 100 * 1024 * 1024;

/// Load a declaration manifest.
///
/// Returns an error if the file cannot be accessed, exceeds `MAX_MANIFEST_SIZE`, or is not a
/// valid manifest.
pub fn load_manifest(path: &Path) -> CliResult<ManifestUniverse> {
    let metadata = fs::metadata(path).map_err(|e| {
        CliError::failure(format!("Cannot access manifest '{}': {}", path.display(), e))
    })?;

    if metadata.len() > MAX_MANIFEST_SIZE {
        return Err(CliError::failure(format!(
            "Manifest '{}' is too large ({} bytes, max {} bytes)",
            path.display(),
            metadata.len(),
            MAX_MANIFEST_SIZE
        )));
    }

    ManifestUniverse::load(path)
        .map_err(|e| CliError::failure(format!("{:?}", miette::Report::new(e))))
}

fn run_processor(path: &Path, config: PlannerConfig) -> CliResult<ProcessOutcome> {
    let universe = load_manifest(path)?;
    Processor::new(config)
        .process_manifest(&universe)
        .map_err(|e| CliError::failure(format!("Error: {e}")))
}

/// Print every rejection as a miette report on stderr.
fn report_rejections(outcome: &ProcessOutcome) {
    for rejection in &outcome.rejections {
        eprintln!("{:?}", miette::Report::new(rejection.clone()));
    }
}

fn exit_code_for(outcome: &ProcessOutcome) -> ExitCode {
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Render accepted plans in the requested format.
pub fn render_plans(outcome: &ProcessOutcome, format: OutputFormat) -> CliResult<String> {
    let rendered = match format {
        OutputFormat::Json => emit_all(JsonEmitter::new(), &outcome.plans),
        OutputFormat::Summary => emit_all(SummaryEmitter::new(), &outcome.plans),
    };
    rendered.map_err(|e| CliError::failure(format!("Error: {e}")))
}

/// Plan every annotated model and emit the accepted plans.
///
/// Rejected models are reported on stderr and turn the exit code into a failure; plans for the
/// accepted models are still written.
pub fn plan_manifest(
    manifest: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    config: PlannerConfig,
) -> CliResult<ExitCode> {
    let outcome = run_processor(manifest, config)?;
    let rendered = render_plans(&outcome, format)?;

    match output {
        Some(path) => fs::write(path, rendered).map_err(|e| {
            CliError::failure(format!("Error writing '{}': {}", path.display(), e))
        })?,
        None => print!("{rendered}"),
    }

    report_rejections(&outcome);
    Ok(exit_code_for(&outcome))
}

/// Validate every annotated model without emitting plans.
pub fn check_manifest(manifest: &Path, config: PlannerConfig) -> CliResult<ExitCode> {
    let outcome = run_processor(manifest, config)?;
    report_rejections(&outcome);
    if outcome.is_success() {
        println!("✓ {} model(s) can be planned", outcome.plans.len());
    } else {
        eprintln!(
            "{} of {} model(s) rejected",
            outcome.rejections.len(),
            outcome.rejections.len() + outcome.plans.len()
        );
    }
    Ok(exit_code_for(&outcome))
}

/// Print the type-to-operation catalog.
pub fn print_catalog() -> CliResult<ExitCode> {
    print!("{}", render_catalog());
    Ok(ExitCode::SUCCESS)
}

/// The catalog listing, in resolution order.
pub fn render_catalog() -> String {
    let mut w = IndentWriter::new();

    w.writeln("Exact matches:");
    w.indent();
    for row in operations::CATALOG {
        w.writeln(&format!("{} -> {}", row.type_name, operations::as_str(row.operation)));
    }
    w.writeln(&format!(
        "(arrays of the types above append `{ARRAY_SUFFIX}`, e.g. int[] -> Int{ARRAY_SUFFIX})"
    ));
    w.dedent();
    w.newline();

    w.writeln("ArrayList elements:");
    w.indent();
    for row in operations::HOMOGENEOUS_LISTS {
        w.writeln(&format!(
            "{}<{}> -> {}",
            platform::ARRAY_LIST,
            row.type_name,
            operations::as_str(row.operation)
        ));
    }
    w.dedent();
    w.newline();

    w.writeln("Structural rules:");
    w.indent();
    for (shape, id) in [
        (
            "ArrayList of a Parcelable element",
            OperationId::ParcelableArrayList,
        ),
        (
            "SparseArray of a Parcelable element",
            OperationId::SparseParcelableArray,
        ),
        ("any Parcelable", OperationId::Parcelable),
        ("any Serializable (including arrays)", OperationId::Serializable),
    ] {
        w.writeln(&format!("{shape} -> {}", operations::as_str(id)));
    }
    w.dedent();
    w.finish()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn manifest_path(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    #[test]
    fn test_render_catalog_lists_every_row() {
        let catalog = render_catalog();
        assert!(catalog.contains("java.lang.String -> String\n"));
        assert!(catalog.contains("    int -> Int\n"));
        assert!(catalog.contains("java.util.ArrayList<java.lang.Integer> -> IntegerArrayList"));
        assert!(catalog.contains("any Serializable (including arrays) -> Serializable"));
        assert_eq!(
            catalog.lines().filter(|l| l.contains(" -> ")).count(),
            operations::CATALOG.len() + operations::HOMOGENEOUS_LISTS.len() + 5
        );
    }

    #[test]
    fn test_missing_manifest_is_cli_failure() {
        let err = load_manifest(Path::new("no/such/manifest.json")).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("no/such/manifest.json"));
    }

    #[test]
    fn test_plan_writes_output_file() {
        let out = std::env::temp_dir().join(format!("bundler_plan_{}.json", std::process::id()));
        let code = plan_manifest(
            &manifest_path("point.json"),
            OutputFormat::Json,
            Some(&out),
            PlannerConfig::default(),
        )
        .unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        let _ = fs::remove_file(&out);
        assert_eq!(written[0]["companion"], "BundlerPoint");
        assert_eq!(written[0]["fields"][0]["container_key"], "ARG_X");
    }

    #[test]
    fn test_check_fails_when_a_model_is_rejected() {
        let code = check_manifest(&manifest_path("rejections.json"), PlannerConfig::default())
            .unwrap();
        assert_eq!(code, ExitCode::FAILURE);
    }
}
