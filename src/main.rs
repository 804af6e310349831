mod cli;
mod config;

use build_order::adapters::outbound::console::StderrProgressReporter;
use build_order::adapters::outbound::filesystem::FileSystemReader;
use build_order::adapters::outbound::formatters::{PlainTextFormatter, TreeFormatter};
use build_order::adapters::outbound::process::{CommandDependencySource, DEFAULT_TOOL};
use build_order::application::dto::{BuildOrderRequest, BuildOrderResponse, OutputFormat};
use build_order::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use build_order::application::use_cases::GenerateBuildOrderUseCase;
use build_order::ports::outbound::ProgressReporter;
use build_order::shared::error::{BuildOrderError, ExitCode};
use build_order::shared::Result;
use cli::Args;
use config::ConfigFile;
use std::path::{Path, PathBuf};
use std::process;

/// Default name of the aggregate file
const DEFAULT_AGGREGATE_FILE: &str = "_res.tree";

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments; clap exits with status 2 on usage errors
    let args = Args::parse_args();

    let config = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = Settings::merge(args, config.unwrap_or_default());

    config::validate_aggregate_file_name(&settings.aggregate_file)?;
    validate_output_dir(&settings.output_dir)?;

    // Create adapters (Dependency Injection)
    let package_list_reader = FileSystemReader::new();
    let dependency_source = CommandDependencySource::new(&settings.tool)?;
    let progress_reporter = StderrProgressReporter::new();

    let use_case =
        GenerateBuildOrderUseCase::new(package_list_reader, dependency_source, progress_reporter);

    let request = BuildOrderRequest::new(
        settings.package_list.clone(),
        settings.ignore_patterns.clone(),
        settings.default_ignores,
    );
    let response = use_case.execute(request)?;

    let output_reporter = StderrProgressReporter::new();
    output_reporter.report(FormatterFactory::progress_message(settings.format));
    let written = write_results(&settings, &response, &output_reporter)?;

    if settings.print_tree {
        let tree = TreeFormatter::new().format_trees(response.trees.values());
        PresenterFactory::create(PresenterType::Stdout).present(&tree)?;
    }

    output_reporter.report_completion(&format!(
        "✅ Wrote {} resolved file(s) and {}",
        written,
        settings.output_dir.join(&settings.aggregate_file).display()
    ));

    Ok(())
}

/// Effective settings: CLI flag > config file > built-in default
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    package_list: PathBuf,
    tool: String,
    output_dir: PathBuf,
    aggregate_file: String,
    ignore_patterns: Vec<String>,
    default_ignores: bool,
    format: OutputFormat,
    print_tree: bool,
}

impl Settings {
    /// Ignore patterns from the config file come first, CLI patterns are appended.
    fn merge(args: Args, config: ConfigFile) -> Self {
        let mut ignore_patterns = config.ignore_packages.unwrap_or_default();
        ignore_patterns.extend(args.ignore);

        Self {
            package_list: args.package_list,
            tool: args
                .tool
                .or(config.tool)
                .unwrap_or_else(|| DEFAULT_TOOL.to_string()),
            output_dir: args
                .output_dir
                .or(config.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            aggregate_file: args
                .aggregate_file
                .or(config.aggregate_file)
                .unwrap_or_else(|| DEFAULT_AGGREGATE_FILE.to_string()),
            ignore_patterns,
            default_ignores: !args.no_default_ignores && config.default_ignores.unwrap_or(true),
            format: args.format.or(config.format).unwrap_or_default(),
            print_tree: args.print_tree || config.print_tree.unwrap_or(false),
        }
    }
}

/// Writes `<package>.resolved` per top-level package and the aggregate file.
///
/// Returns the number of `.resolved` files written. A package whose name
/// cannot be a file name is warned about and skipped; it still appears in
/// the aggregate.
fn write_results(
    settings: &Settings,
    response: &BuildOrderResponse,
    reporter: &impl ProgressReporter,
) -> Result<usize> {
    let text_formatter = PlainTextFormatter::new();
    let mut written = 0;

    for list in &response.resolved {
        // Canonical names come from tool output and end up in a file name.
        if list.package().contains(['/', '\\']) || list.package().starts_with('.') {
            reporter.report_warning(&format!(
                "Not writing {}: '{}' cannot be used as a file name",
                list.file_name(),
                list.package()
            ));
            continue;
        }

        let path = settings.output_dir.join(list.file_name());
        PresenterFactory::create(PresenterType::File(path))
            .present(&text_formatter.format_list(list))?;
        written += 1;
    }

    let aggregate = FormatterFactory::create(settings.format).format(&response.resolved)?;
    let aggregate_path = settings.output_dir.join(&settings.aggregate_file);
    PresenterFactory::create(PresenterType::File(aggregate_path)).present(&aggregate)?;

    Ok(written)
}

fn validate_output_dir(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| BuildOrderError::FileWriteError {
        path: path.to_path_buf(),
        details: format!("Output directory is not accessible: {}", e),
    })?;

    if !metadata.is_dir() {
        return Err(BuildOrderError::FileWriteError {
            path: path.to_path_buf(),
            details: "Output path is not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use build_order::build_order::domain::ResolvedList;
    use clap::Parser;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingReporter {
        warnings: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, _message: &str) {}

        fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

        fn report_warning(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }

        fn report_completion(&self, _message: &str) {}
    }

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["build-order", "pkg.list"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn settings(output_dir: &Path, format: OutputFormat) -> Settings {
        Settings {
            package_list: PathBuf::from("pkg.list"),
            tool: DEFAULT_TOOL.to_string(),
            output_dir: output_dir.to_path_buf(),
            aggregate_file: DEFAULT_AGGREGATE_FILE.to_string(),
            ignore_patterns: vec![],
            default_ignores: true,
            format,
            print_tree: false,
        }
    }

    fn response(resolved: Vec<ResolvedList>) -> BuildOrderResponse {
        BuildOrderResponse::new(
            Default::default(),
            resolved.iter().map(|l| l.package().to_string()).collect(),
            Default::default(),
            resolved,
            vec![],
        )
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::merge(args(&[]), ConfigFile::default());
        assert_eq!(settings.tool, "apt-rdepends");
        assert_eq!(settings.output_dir, PathBuf::from("."));
        assert_eq!(settings.aggregate_file, "_res.tree");
        assert!(settings.ignore_patterns.is_empty());
        assert!(settings.default_ignores);
        assert_eq!(settings.format, OutputFormat::Text);
        assert!(!settings.print_tree);
    }

    #[test]
    fn test_settings_config_overrides_defaults() {
        let config = ConfigFile {
            tool: Some("cat".to_string()),
            ignore_packages: Some(vec!["libc6".to_string()]),
            output_dir: Some(PathBuf::from("out")),
            aggregate_file: Some("all.tree".to_string()),
            format: Some(OutputFormat::Json),
            print_tree: Some(true),
            default_ignores: Some(false),
            ..Default::default()
        };

        let settings = Settings::merge(args(&[]), config);
        assert_eq!(settings.tool, "cat");
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.aggregate_file, "all.tree");
        assert_eq!(settings.ignore_patterns, vec!["libc6"]);
        assert!(!settings.default_ignores);
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(settings.print_tree);
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let config = ConfigFile {
            tool: Some("cat".to_string()),
            ignore_packages: Some(vec!["libc6".to_string()]),
            format: Some(OutputFormat::Json),
            ..Default::default()
        };

        let settings = Settings::merge(
            args(&["--tool", "apt-rdepends -b", "--format", "text", "-i", "zlib*"]),
            config,
        );
        assert_eq!(settings.tool, "apt-rdepends -b");
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.ignore_patterns, vec!["libc6", "zlib*"]);
    }

    #[test]
    fn test_settings_no_default_ignores_flag() {
        let config = ConfigFile {
            default_ignores: Some(true),
            ..Default::default()
        };
        let settings = Settings::merge(args(&["--no-default-ignores"]), config);
        assert!(!settings.default_ignores);
    }

    #[test]
    fn test_write_results_text() {
        let temp_dir = TempDir::new().unwrap();
        let response = response(vec![
            ResolvedList::new("a", vec!["Depends: b (>=)".to_string(), "a".to_string()]),
            ResolvedList::new("c", vec!["c".to_string()]),
        ]);

        let written = write_results(
            &settings(temp_dir.path(), OutputFormat::Text),
            &response,
            &RecordingReporter::default(),
        )
        .unwrap();
        assert_eq!(written, 2);

        assert_eq!(
            fs::read_to_string(temp_dir.path().join("a.resolved")).unwrap(),
            "Depends: b (>=)\na\n"
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("c.resolved")).unwrap(),
            "c\n"
        );
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("_res.tree")).unwrap(),
            "Depends: b (>=)\na\nc\n"
        );
    }

    #[test]
    fn test_write_results_json_aggregate() {
        let temp_dir = TempDir::new().unwrap();
        let response = response(vec![ResolvedList::new("a", vec!["a".to_string()])]);

        write_results(
            &settings(temp_dir.path(), OutputFormat::Json),
            &response,
            &RecordingReporter::default(),
        )
        .unwrap();

        let aggregate = fs::read_to_string(temp_dir.path().join("_res.tree")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&aggregate).unwrap();
        assert_eq!(value["buildOrder"], serde_json::json!(["a"]));
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("a.resolved")).unwrap(),
            "a\n"
        );
    }

    #[test]
    fn test_write_results_skips_unsafe_names() {
        let temp_dir = TempDir::new().unwrap();
        let reporter = RecordingReporter::default();
        let response = response(vec![
            ResolvedList::new(".hidden", vec![".hidden".to_string()]),
            ResolvedList::new("../evil", vec!["../evil".to_string()]),
            ResolvedList::new("good", vec!["good".to_string()]),
        ]);

        let written = write_results(
            &settings(temp_dir.path(), OutputFormat::Text),
            &response,
            &reporter,
        )
        .unwrap();

        assert_eq!(written, 1);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("good.resolved")).unwrap(),
            "good\n"
        );
        assert!(!temp_dir.path().join(".hidden.resolved").exists());
        assert!(!temp_dir.path().join("../evil.resolved").exists());
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("_res.tree")).unwrap(),
            ".hidden\n../evil\ngood\n"
        );

        let warnings = reporter.warnings.borrow();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("'.hidden'"));
        assert!(warnings[1].contains("'../evil'"));
    }

    #[test]
    fn test_validate_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_output_dir(temp_dir.path()).is_ok());

        let file_path = temp_dir.path().join("file.txt");
        fs::write(&file_path, "x").unwrap();
        let err = validate_output_dir(&file_path).unwrap_err().to_string();
        assert!(err.contains("not a directory"));

        let missing = temp_dir.path().join("missing");
        let err = validate_output_dir(&missing).unwrap_err().to_string();
        assert!(err.contains("not accessible"));
    }
}
