use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;
use dts_cjs::{
    cli::{args::OutputFormat, Args, Command},
    ConvertError,
};

#[test]
fn test_cli_args_parsing() {
    // Test default values
    let args = Args::parse_from(["dts-cjs"]);
    assert_eq!(args.out_dir, None);
    assert_eq!(args.pattern, None);
    assert!(args.ignore.is_empty());
    assert_eq!(args.namespace, None);
    assert!(!args.namespace_from_package);
    assert_eq!(args.output, None);
    assert!(!args.quiet);
    assert!(!args.verbose);
    assert!(!args.no_parallel);
    assert!(!args.init);

    // Test with arguments
    let args = Args::parse_from([
        "dts-cjs",
        "--out-dir", "build/types",
        "--pattern", "**/index.d.ts",
        "--ignore", "**/*.d.cts",
        "--ignore", "**/internal/**",
        "--namespace", "MyLib",
        "--output", "json",
        "--output-file", "report.json",
        "--no-parallel",
        "--no-colors",
        "--no-progress",
        "--verbose",
    ]);

    assert_eq!(args.out_dir, Some(PathBuf::from("build/types")));
    assert_eq!(args.pattern.as_deref(), Some("**/index.d.ts"));
    assert_eq!(args.ignore, vec!["**/*.d.cts".to_string(), "**/internal/**".to_string()]);
    assert_eq!(args.namespace.as_deref(), Some("MyLib"));
    assert_eq!(args.output, Some(OutputFormat::Json));
    assert_eq!(args.output_file, Some(PathBuf::from("report.json")));
    assert!(args.no_parallel);
    assert!(args.no_colors);
    assert!(args.no_progress);
    assert!(args.verbose);
}

#[test]
fn test_cli_short_flags() {
    let args = Args::parse_from(["dts-cjs", "-d", "lib", "-p", "*.d.ts", "-c", "custom.toml", "-q"]);
    assert_eq!(args.out_dir, Some(PathBuf::from("lib")));
    assert_eq!(args.pattern.as_deref(), Some("*.d.ts"));
    assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
    assert!(args.quiet);
}

#[test]
fn test_cli_rejects_conflicting_flags() {
    assert!(Args::try_parse_from(["dts-cjs", "--quiet", "--verbose"]).is_err());
    assert!(Args::try_parse_from(["dts-cjs", "--namespace", "A", "--namespace-from-package"]).is_err());
    assert!(Args::try_parse_from(["dts-cjs", "--output", "csv"]).is_err());
}

#[test]
fn test_convert_command_end_to_end() {
    let temp_dir = tempdir().unwrap();
    let dist = temp_dir.path().join("dist");
    fs::create_dir(&dist).unwrap();
    fs::write(dist.join("index.d.ts"), "export declare const answer: 42;\n").unwrap();
    let report_path = temp_dir.path().join("report.json");

    let args = Args::parse_from([
        "dts-cjs",
        "--out-dir",
        dist.to_str().unwrap(),
        "--output",
        "json",
        "--output-file",
        report_path.to_str().unwrap(),
        "--no-progress",
        "--quiet",
    ]);

    Command::from_args(args).execute().unwrap();

    assert!(fs::read_to_string(dist.join("index.d.cts")).unwrap().ends_with("export = index;"));

    let report: serde_json::Value = serde_json::from_str(&fs::read_to_string(report_path).unwrap()).unwrap();
    assert_eq!(report["summary"]["converted"], 1);
    assert_eq!(report["summary"]["failed"], 0);
}

#[test]
fn test_convert_command_reports_batch_failures() {
    let temp_dir = tempdir().unwrap();
    let dist = temp_dir.path().to_path_buf();
    fs::write(dist.join("ok.d.ts"), "export declare const ok: true;").unwrap();
    fs::write(dist.join("notes.ts"), "export const notes = [];").unwrap();

    let args = Args::parse_from([
        "dts-cjs",
        "--out-dir",
        dist.to_str().unwrap(),
        "--pattern",
        "*.ts",
        "--output-file",
        dist.join("report.txt").to_str().unwrap(),
        "--no-progress",
        "--no-colors",
    ]);

    let err = Command::from_args(args).execute().unwrap_err();
    assert!(matches!(err, ConvertError::BatchFailures { failed: 1, total: 2 }));
    assert!(!err.is_critical());

    // The report is still written and the good document converted
    let report = fs::read_to_string(dist.join("report.txt")).unwrap();
    assert!(report.contains("✅ Converted"));
    assert!(report.contains("❌ Failed to convert"));
    assert!(dist.join("ok.d.cts").exists());
}

#[test]
fn test_convert_command_missing_out_dir() {
    let temp_dir = tempdir().unwrap();
    let missing = temp_dir.path().join("dist");

    let args = Args::parse_from([
        "dts-cjs",
        "--out-dir",
        missing.to_str().unwrap(),
        "--no-progress",
    ]);

    let err = Command::from_args(args).execute().unwrap_err();
    assert!(matches!(err, ConvertError::OutputDirectoryNotFound { .. }));
    assert!(err.is_critical());
    assert!(err.suggestion().is_some());
}
