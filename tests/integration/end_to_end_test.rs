//! End-to-end conversion of emitted declaration directories

use std::fs;
use std::path::Path;
use tempfile::tempdir;
use dts_cjs::{
    core::Converter,
    error::Result,
    models::{config::Settings, declaration::OutputShape},
    ConvertError,
};

/// Lay out a `dist/` directory like a library build would produce
fn create_dist(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir.join("utils"))?;

    fs::write(
        dir.join("index.d.ts"),
        "export declare function createClient(url: string): Client;\n\
         export declare interface Client {\n  get(path: string): Promise<unknown>;\n}\n",
    )?;
    fs::write(
        dir.join("main.d.ts"),
        "declare const plugin: { name: string };\nexport default plugin;\n",
    )?;
    fs::write(dir.join("utils/math.d.ts"), "declare function add(a: number, b: number): number;\nexport { add };\n")?;
    fs::write(dir.join("globals.d.ts"), "declare const VERSION: string;\n")?;
    fs::write(dir.join("empty.d.ts"), "/* intentionally empty */\n// nothing\n")?;

    // Already converted outputs are never picked up again
    fs::write(dir.join("stale.d.cts"), "export = stale;")?;
    fs::write(dir.join("module.d.mts"), "export {};")?;

    Ok(())
}

fn settings_for(dir: &Path, parallel: bool) -> Settings {
    Settings {
        out_dir: dir.to_path_buf(),
        parallel,
        show_progress: false,
        ..Default::default()
    }
}

#[test]
fn test_convert_dist_directory() -> Result<()> {
    let temp_dir = tempdir()?;
    let dist = temp_dir.path();
    create_dist(dist)?;

    let report = Converter::new(settings_for(dist, true))?.convert_all()?;

    assert_eq!(report.summary.discovered, 5);
    assert_eq!(report.summary.converted, 4);
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(report.summary.failed, 0);
    assert_eq!(report.skipped, vec![dist.join("empty.d.ts")]);

    let index = fs::read_to_string(dist.join("index.d.cts"))?;
    assert!(index.starts_with("declare function createClient(url: string): Client;"));
    assert!(index.ends_with("declare namespace index {\n  export { createClient, Client };\n}\n\nexport = index;"));

    let main = fs::read_to_string(dist.join("main.d.cts"))?;
    assert_eq!(main, "declare const plugin: { name: string };\n\n\n\nexport = plugin;");

    let math = fs::read_to_string(dist.join("utils/math.d.cts"))?;
    assert!(!math.contains("\nexport { add }"));
    assert!(math.ends_with("declare namespace math {\n  export { add };\n}\n\nexport = math;"));

    let globals = fs::read_to_string(dist.join("globals.d.cts"))?;
    assert_eq!(globals, "declare const VERSION: string;\n\n\nexport {};");

    // Comment-only documents produce nothing
    assert!(!dist.join("empty.d.cts").exists());
    // Ignored files are untouched
    assert_eq!(fs::read_to_string(dist.join("stale.d.cts"))?, "export = stale;");
    // Sources are never modified
    assert!(fs::read_to_string(dist.join("index.d.ts"))?.starts_with("export declare"));

    Ok(())
}

#[test]
fn test_parallel_and_sequential_runs_match() -> Result<()> {
    let parallel_dir = tempdir()?;
    let sequential_dir = tempdir()?;
    create_dist(parallel_dir.path())?;
    create_dist(sequential_dir.path())?;

    let parallel = Converter::new(settings_for(parallel_dir.path(), true))?.convert_all()?;
    let sequential = Converter::new(settings_for(sequential_dir.path(), false))?.convert_all()?;

    let relative_shapes = |report: &dts_cjs::ConversionReport, root: &Path| {
        report
            .converted
            .iter()
            .map(|file| (file.source.strip_prefix(root).unwrap().to_path_buf(), file.shape))
            .collect::<Vec<_>>()
    };

    assert_eq!(
        relative_shapes(&parallel, parallel_dir.path()),
        relative_shapes(&sequential, sequential_dir.path())
    );

    for file in &parallel.converted {
        let relative = file.target.strip_prefix(parallel_dir.path()).unwrap();
        assert_eq!(
            fs::read_to_string(&file.target)?,
            fs::read_to_string(sequential_dir.path().join(relative))?
        );
    }

    Ok(())
}

#[test]
fn test_failures_do_not_stop_the_batch() -> Result<()> {
    let temp_dir = tempdir()?;
    let dist = temp_dir.path();
    fs::write(dist.join("index.d.ts"), "export declare const a: 1;")?;
    fs::write(dist.join("index.ts"), "export const a = 1;")?;

    let settings = Settings {
        pattern: "**/*.ts".to_string(),
        ..settings_for(dist, true)
    };
    let report = Converter::new(settings)?.convert_all()?;

    assert_eq!(report.summary.converted, 1);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.failures[0].path, dist.join("index.ts"));
    assert!(report.failures[0].error.contains("does not end in .d.ts"));

    // The non-declaration source is not overwritten
    assert_eq!(fs::read_to_string(dist.join("index.ts"))?, "export const a = 1;");
    assert!(dist.join("index.d.cts").exists());

    Ok(())
}

#[test]
fn test_package_namespace_applies_to_every_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let dist = temp_dir.path().join("dist");
    fs::create_dir(&dist)?;
    fs::write(dist.join("a.d.ts"), "export declare const a: 1;")?;
    fs::write(dist.join("b.d.ts"), "export declare const b: 2;")?;

    let package_json = temp_dir.path().join("package.json");
    fs::write(&package_json, r#"{ "name": "my-cool-lib" }"#)?;

    let settings = Settings {
        namespace_from_package: true,
        package_json,
        ..settings_for(&dist, false)
    };
    let report = Converter::new(settings)?.convert_all()?;

    assert_eq!(report.summary.namespaces, 2);
    for file in &report.converted {
        assert_eq!(file.shape, OutputShape::Namespace);
        assert_eq!(file.namespace.as_deref(), Some("myCoolLib"));
        assert!(fs::read_to_string(&file.target)?.ends_with("export = myCoolLib;"));
    }

    Ok(())
}

#[test]
fn test_missing_package_json_is_critical() {
    let temp_dir = tempdir().unwrap();
    let settings = Settings {
        namespace_from_package: true,
        package_json: temp_dir.path().join("package.json"),
        ..settings_for(temp_dir.path(), false)
    };

    let err = Converter::new(settings).unwrap_err();
    assert!(matches!(err, ConvertError::PackageJson { .. }));
    assert!(err.is_critical());
}
