//! Batch conversion of `.d.ts` documents into `.d.cts` documents

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use super::content::has_meaningful_content;
use super::discovery::Discovery;
use super::parallel::{process_with_progress, ProgressUpdate};
use crate::error::{ConvertError, Result};
use crate::models::config::Settings;
use crate::models::declaration::DeclarationDocument;
use crate::models::report::{ConversionReport, ConvertedFile, FileOutcome};
use crate::rewriter::{fixed_namespace, package_namespace_name, DeclarationRewriter, RewriteOptions};

const SOURCE_SUFFIX: &str = ".d.ts";
const TARGET_SUFFIX: &str = ".d.cts";

/// Converts every declaration document under the output directory
#[derive(Debug)]
pub struct Converter {
    settings: Settings,
    rewriter: DeclarationRewriter,
}

impl Converter {
    /// Create a converter, resolving the namespace naming from the settings
    pub fn new(settings: Settings) -> Result<Self> {
        let options = rewrite_options(&settings)?;
        Ok(Self::with_rewriter(settings, DeclarationRewriter::new(options)))
    }

    /// Create a converter with an explicit rewriter
    pub fn with_rewriter(settings: Settings, rewriter: DeclarationRewriter) -> Self {
        Self { settings, rewriter }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Convert every discovered document
    pub fn convert_all(&self) -> Result<ConversionReport> {
        self.convert_all_with_progress(|_| {})
    }

    /// Convert every discovered document, reporting each finished file
    ///
    /// Only discovery problems abort the run. A document that fails to read,
    /// rewrite or write is recorded in the report and the batch continues.
    pub fn convert_all_with_progress<P>(&self, progress: P) -> Result<ConversionReport>
    where
        P: Fn(ProgressUpdate) + Send + Sync,
    {
        let start = Instant::now();
        let discovery = Discovery::new(
            &self.settings.out_dir,
            &self.settings.pattern,
            &self.settings.ignore_patterns,
        )?;
        let discovered = discovery.discover()?;

        let mut report = ConversionReport::new(&self.settings.out_dir);
        report.summary.discovered = discovered.len();

        for (path, err) in discovered.unreadable {
            report.add_failure(path, &err);
        }

        tracing::info!(
            count = discovered.documents.len(),
            out_dir = %self.settings.out_dir.display(),
            "converting declaration documents"
        );

        let results = process_with_progress(
            discovered.documents,
            self.settings.parallel,
            |path| self.convert_file(path),
            |path| path.display().to_string(),
            progress,
        );

        // Results come back in discovery order, so pair them with their paths
        for result in results {
            match result {
                Ok(outcome) => report.add_outcome(outcome),
                Err((path, err)) => {
                    tracing::warn!(path = %path.display(), error = %err, "conversion failed");
                    report.add_failure(path, &err);
                }
            }
        }

        report.finalize();
        report.set_duration(start.elapsed());

        tracing::info!(
            converted = report.summary.converted,
            skipped = report.summary.skipped,
            failed = report.summary.failed,
            "conversion finished"
        );

        Ok(report)
    }

    /// Convert a single document
    ///
    /// The error side carries the document path so batch callers can
    /// attribute the failure.
    pub fn convert_file(&self, path: &Path) -> std::result::Result<FileOutcome, (PathBuf, ConvertError)> {
        self.try_convert_file(path).map_err(|err| (path.to_path_buf(), err))
    }

    fn try_convert_file(&self, path: &Path) -> Result<FileOutcome> {
        let target = cjs_path(path)?;

        let text = fs::read_to_string(path).map_err(|e| ConvertError::document_read(path, e))?;
        if !has_meaningful_content(&text) {
            tracing::debug!(path = %path.display(), "skipping document without declarations");
            return Ok(FileOutcome::Skipped {
                path: path.to_path_buf(),
            });
        }

        let source = path.to_string_lossy();
        let rewritten = self
            .rewriter
            .rewrite_document(&DeclarationDocument::new(&text, &source));

        fs::write(&target, &rewritten.text).map_err(|e| ConvertError::document_write(&target, e))?;

        Ok(FileOutcome::Converted(ConvertedFile {
            source: path.to_path_buf(),
            target,
            shape: rewritten.shape,
            namespace: rewritten.namespace,
        }))
    }
}

/// Target path for a `.d.ts` document: the same name ending in `.d.cts`
pub fn cjs_path(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ConvertError::InvalidPath {
            path: path.to_path_buf(),
        })?;

    match file_name.strip_suffix(SOURCE_SUFFIX) {
        Some(stem) => Ok(path.with_file_name(format!("{}{}", stem, TARGET_SUFFIX))),
        None => Err(ConvertError::NotDeclarationFile {
            path: path.to_path_buf(),
        }),
    }
}

/// Build rewrite options from the namespace settings
///
/// A fixed namespace wins over `namespace_from_package`; with neither set the
/// name is derived from each file name.
pub fn rewrite_options(settings: &Settings) -> Result<RewriteOptions> {
    let mut options = RewriteOptions::new();

    if let Some(name) = &settings.namespace {
        options.namespace_name = Some(fixed_namespace(name.clone()));
    } else if settings.namespace_from_package {
        let package_name = read_package_name(&settings.package_json)?;
        let name = package_namespace_name(&package_name);
        tracing::debug!(package = %package_name, namespace = %name, "using package namespace");
        options.namespace_name = Some(fixed_namespace(name));
    }

    Ok(options)
}

/// Read the `name` field of a package.json file
pub fn read_package_name(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).map_err(|e| ConvertError::package_json(path, e.to_string()))?;
    let manifest: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| ConvertError::package_json(path, e.to_string()))?;

    match manifest.get("name").and_then(|name| name.as_str()) {
        Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
        _ => Err(ConvertError::package_json(path, "missing \"name\" field")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::declaration::OutputShape;
    use tempfile::tempdir;

    fn settings_for(dir: &Path) -> Settings {
        Settings {
            out_dir: dir.to_path_buf(),
            parallel: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_cjs_path() {
        assert_eq!(
            cjs_path(Path::new("dist/index.d.ts")).unwrap(),
            PathBuf::from("dist/index.d.cts")
        );
        assert_eq!(
            cjs_path(Path::new("dist/a.d.ts.d.ts")).unwrap(),
            PathBuf::from("dist/a.d.ts.d.cts")
        );
        assert!(matches!(
            cjs_path(Path::new("dist/index.ts")),
            Err(ConvertError::NotDeclarationFile { .. })
        ));
        assert!(cjs_path(Path::new("dist/index.d.cts")).is_err());
    }

    #[test]
    fn test_convert_file_writes_sibling() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("math.d.ts");
        fs::write(&source, "export declare function add(a: number, b: number): number;\n").unwrap();

        let converter = Converter::new(settings_for(temp_dir.path())).unwrap();
        let outcome = converter.convert_file(&source).unwrap();

        let FileOutcome::Converted(file) = outcome else {
            panic!("expected a converted file");
        };
        assert_eq!(file.target, temp_dir.path().join("math.d.cts"));
        assert_eq!(file.shape, OutputShape::Namespace);
        assert_eq!(file.namespace.as_deref(), Some("math"));

        let written = fs::read_to_string(&file.target).unwrap();
        assert_eq!(
            written,
            "declare function add(a: number, b: number): number;\n\n\n\
             declare namespace math {\n  export { add };\n}\n\nexport = math;"
        );
        // The source document is left alone
        assert!(fs::read_to_string(&source).unwrap().starts_with("export declare"));
    }

    #[test]
    fn test_convert_file_skips_comment_only() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("empty.d.ts");
        fs::write(&source, "// nothing here\n/* at all */\n").unwrap();

        let converter = Converter::new(settings_for(temp_dir.path())).unwrap();
        let outcome = converter.convert_file(&source).unwrap();

        assert_eq!(outcome, FileOutcome::Skipped { path: source });
        assert!(!temp_dir.path().join("empty.d.cts").exists());
    }

    #[test]
    fn test_convert_file_missing_source() {
        let temp_dir = tempdir().unwrap();
        let converter = Converter::new(settings_for(temp_dir.path())).unwrap();

        let (path, err) = converter
            .convert_file(&temp_dir.path().join("gone.d.ts"))
            .unwrap_err();
        assert_eq!(path, temp_dir.path().join("gone.d.ts"));
        assert!(matches!(err, ConvertError::DocumentRead { .. }));
    }

    #[test]
    fn test_fixed_namespace_setting() {
        let temp_dir = tempdir().unwrap();
        let source = temp_dir.path().join("index.d.ts");
        fs::write(&source, "export declare const version: string;").unwrap();

        let mut settings = settings_for(temp_dir.path());
        settings.namespace = Some("MyLib".to_string());

        let converter = Converter::new(settings).unwrap();
        let FileOutcome::Converted(file) = converter.convert_file(&source).unwrap() else {
            panic!("expected a converted file");
        };

        assert_eq!(file.namespace.as_deref(), Some("MyLib"));
        assert!(fs::read_to_string(file.target).unwrap().ends_with("export = MyLib;"));
    }

    #[test]
    fn test_package_namespace() {
        let temp_dir = tempdir().unwrap();
        let package_json = temp_dir.path().join("package.json");
        fs::write(&package_json, r#"{ "name": "@acme/my-lib", "version": "1.0.0" }"#).unwrap();

        let settings = Settings {
            namespace_from_package: true,
            package_json: package_json.clone(),
            ..settings_for(temp_dir.path())
        };

        let options = rewrite_options(&settings).unwrap();
        assert_eq!(options.namespace_for("dist/index.d.ts"), "myLib");
    }

    #[test]
    fn test_package_json_without_name() {
        let temp_dir = tempdir().unwrap();
        let package_json = temp_dir.path().join("package.json");
        fs::write(&package_json, r#"{ "version": "1.0.0" }"#).unwrap();

        let err = read_package_name(&package_json).unwrap_err();
        assert!(matches!(err, ConvertError::PackageJson { .. }));
        assert!(err.is_critical());
    }

    #[test]
    fn test_convert_all_collects_failures() {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("a.d.ts"), "export default foo;").unwrap();
        fs::write(root.join("b.d.ts"), "// only a comment").unwrap();
        fs::write(root.join("c.d.ts"), "declare const x: 1;").unwrap();
        // A directory where the output file should go makes the write fail
        fs::write(root.join("d.d.ts"), "export declare const d: 1;").unwrap();
        fs::create_dir(root.join("d.d.cts")).unwrap();

        let converter = Converter::new(settings_for(root)).unwrap();
        let report = converter.convert_all().unwrap();

        assert_eq!(report.summary.discovered, 4);
        assert_eq!(report.summary.converted, 2);
        assert_eq!(report.summary.default_exports, 1);
        assert_eq!(report.summary.empty_modules, 1);
        assert_eq!(report.summary.skipped, 1);
        assert_eq!(report.summary.failed, 1);
        assert_eq!(report.failures[0].path, root.join("d.d.ts"));

        assert_eq!(fs::read_to_string(root.join("a.d.cts")).unwrap(), "export = foo;");
        assert_eq!(
            fs::read_to_string(root.join("c.d.cts")).unwrap(),
            "declare const x: 1;\n\nexport {};"
        );
    }
}
