//! Build script to generate embedded word lists
//!
//! Reads one word file per category and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const CATEGORIES: [(&str, &str, &str); 3] = [
    ("animals", "ANIMALS", "Animal names"),
    ("countries", "COUNTRIES", "Country names"),
    ("programming", "PROGRAMMING", "Programming vocabulary"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (file, const_name, doc_comment) in CATEGORIES {
        let input_path = format!("data/{file}.txt");
        generate_word_list(
            &input_path,
            &Path::new(&out_dir).join(format!("{file}.rs")),
            const_name,
            doc_comment,
        );

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_ascii_uppercase())
        .filter(|word| !word.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} words)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
}
