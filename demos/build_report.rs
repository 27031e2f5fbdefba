//! Write a small report to a file, then print it to stdout.
//!
//! Usage: cargo run --example build_report -- [path]

use latchprint::{Printer, build_file, prtfln, prtln};

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "report.txt".to_string());

    let scores = [("Thomas", 1976), ("Mause", 1971)];

    let result = build_file(&path, |p| {
        prtln!(p, "# Report");
        for (name, year) in scores {
            prtfln!(p, "{name:<8} {year}");
        }
    });

    if let Err(e) = result {
        eprintln!("build_report error: {e}");
        std::process::exit(1);
    }

    let mut out = Printer::stdout();
    prtln!(out, "wrote ", scores.len(), " rows to ", path);
    if let Err(e) = out.close() {
        eprintln!("build_report error: {e}");
        std::process::exit(1);
    }
}
