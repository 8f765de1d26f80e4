//! Show the concrete syntax tree of a TypeScript source.

use std::path::PathBuf;

use recstyle_lib::parser::{CstPrinter, parse};

use super::input::{Input, load_inputs};

pub struct AstArgs {
    pub path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub raw: bool,
    pub spans: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let paths: Vec<PathBuf> = args.path.iter().cloned().collect();
    let input = match load_inputs(&paths, args.source_text.as_deref()) {
        Ok(mut inputs) if inputs.len() == 1 => inputs.remove(0),
        Ok(_) => {
            eprintln!("error: `ast` takes a single file");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match render(&input, args.raw, args.spans, args.color) {
        Ok((tree, diagnostics)) => {
            print!("{}", tree);
            // Syntax errors do not prevent the dump
            if let Some(diagnostics) = diagnostics {
                eprintln!("{}", diagnostics);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Tree dump plus rendered syntax diagnostics, if any.
pub fn render(
    input: &Input,
    raw: bool,
    spans: bool,
    color: bool,
) -> recstyle_lib::Result<(String, Option<String>)> {
    let parsed = parse(&input.text)?;
    let tree = CstPrinter::new(parsed.root.as_cst())
        .with_trivia(raw)
        .with_spans(spans)
        .dump();

    let diagnostics = parsed.diagnostics.filtered();
    if diagnostics.is_empty() {
        return Ok((tree, None));
    }
    let name = input.name();
    let rendered = diagnostics
        .printer()
        .source(&input.text)
        .path(&name)
        .colored(color)
        .render();
    Ok((tree, Some(rendered)))
}
