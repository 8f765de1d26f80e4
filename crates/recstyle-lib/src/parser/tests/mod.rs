mod members_tests;
mod types_tests;

use crate::parser::{CstPrinter, parse};

#[track_caller]
pub(crate) fn expect_valid_cst(src: &str) -> String {
    let result = parse(src).unwrap();
    if !result.diagnostics.is_empty() {
        panic!(
            "Expected valid source, got error:\n{}",
            result.diagnostics.render(src)
        );
    }
    CstPrinter::new(result.root.as_cst()).dump()
}

#[track_caller]
pub(crate) fn expect_invalid(src: &str) -> String {
    let result = parse(src).unwrap();
    if result.diagnostics.is_empty() {
        panic!(
            "Expected invalid source, got valid:\n{}",
            CstPrinter::new(result.root.as_cst()).dump()
        );
    }
    result
        .diagnostics
        .filtered()
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
