use inkpress::{GeneratorOptions, PdfGenerator};
use std::env;
use std::process;

/// A simple CLI to export a notebook archive's annotations as a PDF.
fn main() {
    env_logger::init();

    let mut options = GeneratorOptions::default();
    let mut paths = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--page-numbers" => options.add_page_numbers = true,
            "--all-pages" => options.all_pages = true,
            "--annotations-only" => options.annotations_only = true,
            "-h" | "--help" => {
                usage();
                return;
            }
            flag if flag.starts_with('-') => {
                eprintln!("unknown option: {flag}");
                usage();
                process::exit(2);
            }
            path => paths.push(path.to_string()),
        }
    }
    if paths.len() != 2 {
        usage();
        process::exit(2);
    }

    let generator = PdfGenerator::new(paths[0].as_str(), paths[1].as_str(), options);
    if let Err(err) = generator.generate() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn usage() {
    eprintln!("Export handwritten notebook annotations to PDF.");
    eprintln!();
    eprintln!("Usage: inkpress [OPTIONS] <notebook.zip> <output.pdf>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --page-numbers      draw the page index on each emitted page");
    eprintln!("  --all-pages         include pages without annotations as blanks");
    eprintln!("  --annotations-only  ignore the background document");
}
