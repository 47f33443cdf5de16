use huffman_text_stats::{analyze_text_file, render_report, CLIParser, Symbol};
use std::path::PathBuf;

const INPUT_DOCUMENT_PATH: &str = "tests/story.txt";

fn get_project_root_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn get_input_document_path() -> PathBuf {
    let mut root_path = get_project_root_path();
    root_path.push(INPUT_DOCUMENT_PATH);
    root_path
}

#[test]
fn test_analyze_text_file() {
    let mut cli_parser = CLIParser::new();
    let arguments = cli_parser.parse(vec![
        "test",
        get_input_document_path().to_str().unwrap(),
        "-t",
        "3",
    ]);
    let report = analyze_text_file(&arguments).expect("Analysis failed");

    assert_eq!(report.code.len(), report.frequencies.len());
    assert!(report.code.is_prefix_free(), "Code is not prefix free");
    assert!(report.frequencies.get(&Symbol::Space).is_some());
    assert!(report.frequencies.get(&Symbol::from('\n')).is_none());
    assert!(report.average_bits_per_symbol >= report.entropy - 1e-6);
    assert!(report.average_bits_per_symbol < report.entropy + 1.0);
    assert_eq!(report.total_bits_fixed_width, report.total_symbol_count * 8);
    assert!(report.compression_percentage < 100.0);

    let probability_sum: f64 = report.probabilities.iter().map(|(_, p)| p).sum();
    assert!((probability_sum - 1.0).abs() < 1e-9);
}

#[test]
fn test_analyze_text_file_is_reproducible() {
    let mut cli_parser = CLIParser::new();
    let input_document_path = get_input_document_path();
    let arguments = cli_parser.parse(vec!["test", input_document_path.to_str().unwrap()]);
    let first = analyze_text_file(&arguments).expect("Analysis failed");
    let second = analyze_text_file(&arguments).expect("Analysis failed");
    assert_eq!(first.code, second.code);
    assert_eq!(first.entropy, second.entropy);
}

#[test]
fn test_render_report_of_text_file() {
    let mut cli_parser = CLIParser::new();
    let input_document_path = get_input_document_path();
    let arguments = cli_parser.parse(vec![
        "test",
        input_document_path.to_str().unwrap(),
        "-b",
        "7",
    ]);
    let report = analyze_text_file(&arguments).expect("Analysis failed");
    let mut output: Vec<u8> = Vec::new();
    render_report(&arguments, &report, &mut output).expect("Rendering failed");
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Total bits using 7-bit fixed width encoding"));
    assert!(output.contains("(space)"));
}

#[test]
fn test_analyze_missing_file() {
    let mut cli_parser = CLIParser::new();
    let mut missing_path = get_project_root_path();
    missing_path.push("tests/missing.txt");
    let arguments = cli_parser.parse(vec!["test", missing_path.to_str().unwrap()]);
    assert!(analyze_text_file(&arguments).is_err());
}
