mod mapped_tests;
mod record_style_tests;

use crate::{Config, Linter, Style};

fn linter(style: Style) -> Linter {
    Linter::new(&Config::new(style))
}

/// Plain rendering of every finding, one per line.
#[track_caller]
pub(crate) fn check(src: &str, style: Style) -> String {
    let result = linter(style).lint(src).unwrap();
    assert!(
        !result.has_syntax_errors,
        "unexpected syntax errors:\n{}",
        result.diagnostics.render(src)
    );
    result.diagnostics.printer().render()
}

/// Final text after applying fixes; asserts the result is a fixed point.
#[track_caller]
pub(crate) fn fix(src: &str, style: Style) -> String {
    let linter = linter(style);
    let fixed = linter.fix(src).unwrap();

    let again = linter.fix(&fixed.output).unwrap();
    assert_eq!(again.passes, 0, "fix is not idempotent:\n{}", fixed.output);
    assert_eq!(again.output, fixed.output);

    fixed.output
}
