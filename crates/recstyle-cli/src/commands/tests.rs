use std::fs;
use std::path::PathBuf;

use indoc::indoc;
use recstyle_lib::{Config, Linter, Style};
use tempfile::TempDir;

use super::ast::render;
use super::check::check_inputs;
use super::fix::{FixError, fix_input, validate};
use super::input::{Input, load_file};

fn inline(text: &str) -> Input {
    Input {
        path: None,
        text: text.to_string(),
    }
}

fn linter(style: Style) -> Linter {
    Linter::new(&Config::new(style))
}

#[test]
fn check_reports_each_finding_with_its_source_name() {
    let inputs = [
        inline("interface Dict { [key: string]: number }"),
        inline("type Ok = Record<string, number>;"),
        inline("type A = { [k: string]: 1 }; type B = { [k: number]: 2 };"),
    ];

    let report = check_inputs(&linter(Style::Record), &inputs, false);

    assert_eq!(report.findings, 3);
    assert_eq!(report.failures, 0);
    assert!(!report.is_clean());
    assert!(report.output.contains("A record is preferred over an index signature."));
    assert!(report.output.contains("<source>"));
    assert!(report.output.contains("convert to `Record`"));
}

#[test]
fn check_is_clean_for_preferred_style() {
    let inputs = [inline("type Dict = Record<string, number>;")];

    let report = check_inputs(&linter(Style::Record), &inputs, false);

    assert!(report.is_clean());
    assert!(report.output.is_empty());
}

#[test]
fn check_follows_configured_style() {
    let inputs = [inline("type Dict = Record<string, number>;")];

    let report = check_inputs(&linter(Style::IndexSignature), &inputs, false);

    assert_eq!(report.findings, 1);
    assert!(report.output.contains("An index signature is preferred over a record."));
}

#[test]
fn check_reports_syntax_errors_instead_of_findings() {
    let inputs = [inline("interface Dict { [key: string]: number")];

    let report = check_inputs(&linter(Style::Record), &inputs, false);

    assert!(!report.is_clean());
    assert_eq!(report.findings, 0);
    assert!(report.syntax_errors > 0);
    assert!(report.output.contains("error"));
    assert!(!report.output.contains("A record is preferred"));
}

#[test]
fn check_counts_inputs_that_exhaust_fuel() {
    let inputs = [inline("type A = ((((B))));")];
    let linter = linter(Style::Record).with_recursion_fuel(Some(2));

    let report = check_inputs(&linter, &inputs, false);

    assert_eq!(report.failures, 1);
    assert!(report.output.starts_with("error: <source>: "));
}

#[test]
fn fix_inline_source() {
    let result = fix_input(
        &linter(Style::Record),
        &inline("interface Dict { [key: string]: number }"),
        false,
    )
    .unwrap();

    assert_eq!(result.output, "type Dict = Record<string, number>;");
    assert_eq!(result.passes, 1);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn fix_keeps_findings_without_a_rewrite() {
    let input = inline("type T = { -readonly [K in string]: number };");

    let result = fix_input(&linter(Style::Record), &input, false).unwrap();

    assert_eq!(result.output, input.text);
    assert_eq!(result.passes, 0);
    assert_eq!(result.diagnostics.len(), 1);
}

#[test]
fn fix_write_rewrites_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("types.ts");
    fs::write(
        &path,
        indoc! {"
            export interface Dict { [key: string]: number }
            type Flags = { readonly [key: string]: boolean };
        "},
    )
    .unwrap();

    let input = load_file(&path).unwrap();
    let result = fix_input(&linter(Style::Record), &input, true).unwrap();

    assert_eq!(result.passes, 1);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        indoc! {"
            export type Dict = Record<string, number>;
            type Flags = Readonly<Record<string, boolean>>;
        "}
    );
}

#[test]
fn fix_write_leaves_clean_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("types.ts");
    fs::write(&path, "type Dict = Record<string, number>;\n").unwrap();

    let input = load_file(&path).unwrap();
    let result = fix_input(&linter(Style::Record), &input, true).unwrap();

    assert_eq!(result.passes, 0);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "type Dict = Record<string, number>;\n"
    );
}

#[test]
fn fix_without_write_does_not_touch_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("types.ts");
    fs::write(&path, "type Dict = Record<string, number>;").unwrap();

    let input = load_file(&path).unwrap();
    let result = fix_input(&linter(Style::IndexSignature), &input, false).unwrap();

    assert_eq!(result.output, "type Dict = { [key: string]: number };");
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "type Dict = Record<string, number>;"
    );
}

#[test]
fn fix_write_reports_unwritable_path() {
    let dir = TempDir::new().unwrap();
    let input = Input {
        path: Some(dir.path().join("missing").join("types.ts")),
        text: "interface Dict { [key: string]: number }".to_string(),
    };

    let err = fix_input(&linter(Style::Record), &input, true).unwrap_err();
    assert!(matches!(err, FixError::Write { .. }));
}

#[test]
fn fix_error_names_the_input() {
    let linter = linter(Style::Record).with_recursion_fuel(Some(2));

    let err = fix_input(&linter, &inline("type A = ((((B))));"), false).unwrap_err();
    assert_eq!(err.to_string(), "<source>: recursion limit exceeded");
}

#[test]
fn validate_write_needs_files() {
    let file = Input {
        path: Some(PathBuf::from("a.ts")),
        text: String::new(),
    };

    assert!(validate(&[file.clone(), file.clone()], true).is_ok());
    assert!(validate(&[inline("")], true).is_err());
}

#[test]
fn validate_printing_needs_single_input() {
    assert!(validate(&[inline("")], false).is_ok());
    assert!(validate(&[inline(""), inline("")], false).is_err());
}

#[test]
fn ast_dump_without_trivia() {
    let input = inline("type T = { [k: string]: 1 };");
    let (tree, diagnostics) = render(&input, false, false, false).unwrap();

    assert!(diagnostics.is_none());
    assert!(tree.starts_with("Root\n"));
    assert!(tree.contains("TypeAlias"));
    assert!(tree.contains("IndexSignature"));
    assert!(!tree.contains("Whitespace"));
}

#[test]
fn ast_dump_raw_includes_trivia() {
    let (tree, _) = render(&inline("type T = 1; // note"), true, false, false).unwrap();

    assert!(tree.contains("Whitespace"));
    assert!(tree.contains("LineComment"));
}

#[test]
fn ast_dump_reports_syntax_errors() {
    let (tree, diagnostics) = render(&inline("type T ="), false, false, false).unwrap();

    assert!(tree.contains("TypeAlias"));
    assert!(diagnostics.unwrap().contains("expected a type"));
}
