use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use ast::ASTParser;
use diagnostic::ErrorMessage;
use tokenizer::tokenize;

use super::printer::Printer;
use crate::{EnableAnsi, TreeFormat};

/// Run the whole pipeline for one source file: read, tokenize, parse,
/// generate, write `<input>.py`. A syntax error aborts the run before
/// anything is written, so no partial output ever exists.
pub fn translate(
    input: PathBuf,
    emit_tree: bool,
    tree_format: TreeFormat,
    ansi: EnableAnsi,
) -> ExitCode {
    let mut printer = Printer::new(ansi);

    let source = match fs::read_to_string(&input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("Failed to open {}: {err}", input.display());
            return ExitCode::FAILURE;
        }
    };

    let mut token_iter = tokenize(source.chars());
    let (program, errors) = ASTParser::new(&mut token_iter).parse();

    if !errors.is_empty() {
        for error in errors {
            let error_message =
                ErrorMessage::new(error, token_iter.lines_table().clone(), input.clone());
            if printer.error(error_message).is_err() {
                eprintln!("Failed to read {}", input.display());
            }
        }
        return ExitCode::FAILURE;
    }

    if emit_tree {
        match tree_format {
            TreeFormat::Json => {
                let json = serde_json::to_string_pretty(&program).unwrap();
                println!("{json}");
            }
            TreeFormat::Text => {
                print!("{program}");
            }
        }
    }

    let generated = codegen::generate(&program);
    let output_path = output_path_for(&input);
    if let Err(err) = fs::write(&output_path, generated) {
        eprintln!("Failed to write {}: {err}", output_path.display());
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// The output lands next to the input, with `.py` appended to the full file
/// name (`square.logo` becomes `square.logo.py`).
fn output_path_for(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".py");
    PathBuf::from(name)
}
