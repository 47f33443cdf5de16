use std::env::args_os;
use std::io;

use huffman_text_stats::{analyze_text_file, render_report, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    let result = analyze_text_file(&arguments)
        .and_then(|report| render_report(&arguments, &report, &mut io::stdout().lock()));
    if let Err(e) = result {
        eprintln!("Analysis failed because of: {}", e);
        std::process::exit(1);
    }
}
