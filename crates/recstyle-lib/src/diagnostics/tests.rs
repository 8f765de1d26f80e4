use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Error), @"error");
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
}

#[test]
fn style_findings_are_warnings() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::PreferRecord, range(0, 5))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert!(!diagnostics.has_errors());
    assert_eq!(diagnostics.warning_count(), 1);
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedToken, range(0, 5))
        .message("`=` after type alias name")
        .emit();

    let msg = diagnostics.iter().next().unwrap();
    assert_eq!(msg.message(), "expected `=` after type alias name");
    assert!(msg.is_error());
}

#[test]
fn builder_with_related() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedBrace, range(0, 5))
        .message("primary")
        .related_to("related info", range(6, 10))
        .emit();

    let result = diagnostics.render("hello world!");
    insta::assert_snapshot!(result, @r"
    error: missing closing `}`; primary
      |
    1 | hello world!
      | ^^^^^ ---- related info
    ");
}

#[test]
fn builder_with_fix() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::PreferRecord, range(0, 5))
        .fix("convert to `Record`", "fixed")
        .emit();

    let fix = diagnostics.fixes().next().unwrap();
    assert_eq!(fix.range(), range(0, 5));
    assert_eq!(fix.replacement(), "fixed");

    let result = diagnostics.render("hello world");
    insta::assert_snapshot!(result, @r"
    warning: A record is preferred over an index signature.
      |
    1 | hello world
      | ^^^^^
      |
    help: convert to `Record`
      |
    1 - hello world
    1 + fixed world
      |
    ");
}

#[test]
fn finding_without_fix_is_labelled() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::PreferRecord, range(0, 5))
        .emit();

    let result = diagnostics.render("hello world");
    assert!(result.starts_with("warning: A record is preferred over an index signature."));
    assert!(result.contains("^^^^^ no safe rewrite, change this by hand"));
    assert!(!result.contains("help:"));
}

#[test]
fn maybe_fix_without_edit() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::PreferRecord, range(0, 5))
        .maybe_fix(None)
        .emit();
    diagnostics
        .report(DiagnosticKind::PreferIndexSignature, range(6, 11))
        .maybe_fix(Some(("convert to index signature", "{ [key: string]: T }".to_string())))
        .emit();

    assert_eq!(diagnostics.fixes().count(), 1);
    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    warning at 0..5: A record is preferred over an index signature.
    warning at 6..11: An index signature is preferred over a record. (fix: convert to index signature)
    ");
}

#[test]
fn printer_colored() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(0, 5))
        .message("test")
        .emit();

    let result = diagnostics.printer().source("hello").colored(true).render();
    assert!(result.contains("test"));
    assert!(result.contains('\x1b'));
}

#[test]
fn printer_empty_diagnostics() {
    let diagnostics = Diagnostics::new();
    let result = diagnostics.render("source");
    assert!(result.is_empty());
}

#[test]
fn printer_with_path() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedName, range(0, 5))
        .message("a property name")
        .emit();

    let result = diagnostics.printer().source("hello world").path("test.ts").render();
    insta::assert_snapshot!(result, @r"
    error: expected a name: a property name
     --> test.ts:1:1
      |
    1 | hello world
      | ^^^^^
    ");
}

#[test]
fn printer_zero_width_span() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedType, TextRange::empty(0.into()))
        .message("after `=`")
        .emit();

    let result = diagnostics.render("hello");
    insta::assert_snapshot!(result, @r"
    error: expected a type: after `=`
      |
    1 | hello
      | ^
    ");
}

#[test]
fn printer_multiple_diagnostics() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedParen, range(0, 5))
        .message("first error")
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(6, 10))
        .message("second error")
        .emit();

    let result = diagnostics.render("hello world!");
    insta::assert_snapshot!(result, @r"
    error: missing closing `)`; first error
      |
    1 | hello world!
      | ^^^^^

    error: unexpected token: second error
      |
    1 | hello world!
      |       ^^^^
    ");
}

#[test]
fn diagnostic_kind_suppression_order() {
    assert!(DiagnosticKind::UnclosedBrace.suppresses(&DiagnosticKind::ExpectedType));
    assert!(DiagnosticKind::ExpectedType.suppresses(&DiagnosticKind::UnexpectedToken));
    assert!(!DiagnosticKind::UnclosedBrace.suppresses(&DiagnosticKind::UnclosedBrace));
    assert!(!DiagnosticKind::UnexpectedToken.suppresses(&DiagnosticKind::UnclosedBrace));

    assert!(!DiagnosticKind::UnclosedBrace.suppresses(&DiagnosticKind::PreferRecord));
    assert!(!DiagnosticKind::PreferIndexSignature.suppresses(&DiagnosticKind::PreferRecord));
}

#[test]
fn diagnostic_kind_message_rendering() {
    assert_eq!(
        DiagnosticKind::UnclosedBrace.message(None),
        "missing closing `}`"
    );
    assert_eq!(
        DiagnosticKind::UnclosedBrace.message(Some("expected `}`")),
        "missing closing `}`; expected `}`"
    );
    assert_eq!(
        DiagnosticKind::ExpectedToken.message(Some("`;`")),
        "expected `;`"
    );
    assert_eq!(
        DiagnosticKind::PreferRecord.message(None),
        "A record is preferred over an index signature."
    );
}

#[test]
fn filtered_no_suppression_disjoint_spans() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedBrace, range(0, 5))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(10, 15))
        .emit();

    assert_eq!(diagnostics.filtered().len(), 2);
}

#[test]
fn filtered_suppresses_lower_priority_contained() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedBrace, range(0, 20))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(5, 15))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(
        filtered.iter().next().unwrap().kind(),
        DiagnosticKind::UnclosedBrace
    );
}

#[test]
fn filtered_root_cause_suppresses_structural_at_same_start() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedName, range(0, 1))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnclosedBrace, range(0, 20))
        .emit();

    let filtered = diagnostics.filtered();
    assert_eq!(filtered.len(), 1);
    assert_eq!(
        filtered.iter().next().unwrap().kind(),
        DiagnosticKind::ExpectedName
    );
}

#[test]
fn filtered_keeps_style_findings_inside_errors() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedBrace, range(0, 20))
        .emit();
    diagnostics
        .report(DiagnosticKind::PreferRecord, range(5, 15))
        .emit();

    assert_eq!(diagnostics.filtered().len(), 2);
}

#[test]
fn filtered_uses_suppression_range() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedType, range(2, 3))
        .suppression_range(range(0, 20))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnexpectedToken, range(5, 6))
        .emit();

    assert_eq!(diagnostics.filtered().len(), 1);
}
