//! Behaviour of the declaration rewriter on whole documents

use dts_cjs::{
    models::declaration::OutputShape,
    rewriter::{fixed_namespace, ExportScanner},
    rewrite, DeclarationDocument, DeclarationRewriter, RewriteOptions,
};

fn rewrite_default(text: &str, source: &str) -> String {
    rewrite(text, source, &RewriteOptions::default())
}

#[test]
fn test_document_without_exports_becomes_module() {
    let input = "declare const x: number;\n";
    let output = rewrite_default(input, "dist/globals.d.ts");

    assert_eq!(output, "declare const x: number;\n\n\nexport {};");
    assert_eq!(output.matches("export {};").count(), 1);
}

#[test]
fn test_named_exports_wrapped_in_namespace() {
    let input = "export declare function foo(): void;\nexport declare const bar: string;";
    let output = rewrite_default(input, "dist/index.d.ts");

    assert!(!output.contains("export declare"));
    assert!(output.contains("declare function foo(): void;"));
    assert!(output.contains("declare const bar: string;"));
    assert!(output.contains("declare namespace index {\n  export { foo, bar };\n}"));
    assert!(output.ends_with("export = index;"));
}

#[test]
fn test_aliased_reexport_list() {
    let input = "declare const foo: 1;\ndeclare const bar: 2;\nexport { foo, bar as baz };";

    let names: Vec<String> = ExportScanner::scan(input)
        .records
        .into_iter()
        .map(|record| record.name)
        .collect();
    assert_eq!(names, vec!["foo", "baz"]);

    let output = rewrite_default(input, "dist/index.d.ts");
    assert!(!output.contains("bar as baz"));
    assert!(output.contains("  export { foo, baz };"));
}

#[test]
fn test_default_export_takes_precedence() {
    let input = "export declare const a: 1;\ndeclare const Something: X;\nexport default Something;";
    let output = rewrite_default(input, "dist/index.d.ts");

    assert!(output.ends_with("export = Something;"));
    assert!(!output.contains("declare namespace"));
    assert!(output.contains("declare const a: 1;"));
    assert_eq!(output.matches("Something;").count(), 1);
}

#[test]
fn test_duplicate_names_collapse() {
    let input = "export declare function f(): void;\nexport declare function f(x: number): void;\nexport { f };";
    let output = rewrite_default(input, "dist/f.d.ts");

    assert!(output.contains("declare namespace f {\n  export { f };\n}"));
}

#[test]
fn test_namespace_name_sanitized() {
    let input = "export declare const a: 1;";
    let output = rewrite_default(input, "dist/123-my.pkg.d.ts");

    assert!(output.contains("declare namespace _123mypkg {"));
    assert!(output.ends_with("export = _123mypkg;"));
}

#[test]
fn test_reexport_from_module_is_not_recorded() {
    let input = "export { a } from './a';\n";
    let scan = ExportScanner::scan(input);
    assert!(scan.records.is_empty());

    // The line loses only its leading keyword
    let output = rewrite_default(input, "dist/index.d.ts");
    assert_eq!(output, "{ a } from './a';\n\n\nexport {};");
}

#[test]
fn test_export_list_with_trailing_comment() {
    let input = "declare const a: 1;\nexport { a } // public api\n";
    let output = rewrite_default(input, "dist/index.d.ts");

    assert!(output.ends_with("declare namespace index {\n  export { a };\n}\n\nexport = index;"));
}

#[test]
fn test_custom_namespace_hook() {
    let options = RewriteOptions::new().with_namespace_name(|source| format!("Pkg_{}", source.len()));
    let output = rewrite("export declare const a: 1;", "abc", &options);
    assert!(output.ends_with("export = Pkg_3;"));

    let rewriter = DeclarationRewriter::new(RewriteOptions {
        namespace_name: Some(fixed_namespace("Fixed")),
    });
    let rewritten = rewriter.rewrite_document(&DeclarationDocument::new("export declare type T = 1;", "dist/x.d.ts"));
    assert_eq!(rewritten.shape, OutputShape::Namespace);
    assert!(rewritten.text.ends_with("export = Fixed;"));
}

#[test]
fn test_default_payload_excludes_carriage_return() {
    let input = "declare const Thing: 1;\r\nexport default Thing;\r\n";
    let output = rewrite_default(input, "dist/index.d.ts");

    assert!(output.ends_with("export = Thing;"));
}

#[test]
fn test_shapes_reported() {
    let rewriter = DeclarationRewriter::default();
    let shape = |text: &str| {
        rewriter
            .rewrite_document(&DeclarationDocument::new(text, "dist/index.d.ts"))
            .shape
    };

    assert_eq!(shape("export default foo;"), OutputShape::DefaultExport);
    assert_eq!(shape("export declare const a: 1;"), OutputShape::Namespace);
    assert_eq!(shape("declare const a: 1;"), OutputShape::EmptyModule);
}
