//! Applying fixes to source text.

use rowan::TextRange;

use crate::diagnostics::Fix;

/// Applies the non-overlapping subset of `fixes` in source order.
///
/// An edit overlapping one already applied is left for a later pass.
/// Returns the new text and how many edits were applied.
pub fn apply_fixes<'a>(source: &str, fixes: impl IntoIterator<Item = &'a Fix>) -> (String, usize) {
    let mut fixes: Vec<&Fix> = fixes.into_iter().collect();
    fixes.sort_by_key(|fix| (fix.range().start(), fix.range().end()));

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;
    let mut applied = 0;
    let mut last: Option<TextRange> = None;

    for fix in fixes {
        let range = fix.range();
        if last.is_some_and(|prev| overlaps(prev, range)) {
            continue;
        }
        let start: usize = range.start().into();
        let end: usize = range.end().into();
        out.push_str(&source[cursor..start]);
        out.push_str(fix.replacement());
        cursor = end;
        applied += 1;
        last = Some(range);
    }

    out.push_str(&source[cursor..]);
    (out, applied)
}

fn overlaps(prev: TextRange, next: TextRange) -> bool {
    next.start() < prev.end() || (prev.is_empty() && next.start() == prev.start())
}
