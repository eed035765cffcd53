use std::{env, fs::read_to_string, process::ExitCode, time::Instant};

use sonoparse::{lexer::lexer::tokenize, parser::parser::parse, render_error};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let (dump_tokens, file_path) = match args.as_slice() {
        [flag, path] if flag == "--tokens" => (true, path),
        [path] => (false, path),
        _ => {
            eprintln!("Usage: sonoparse [--tokens] <file>");
            return ExitCode::from(2);
        }
    };

    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);

    let file_contents = match read_to_string(file_path) {
        Ok(contents) => contents,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path, error);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    if dump_tokens {
        return match tokenize(&file_contents, Some(String::from(file_name))) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{}", token.debug());
                }
                println!("Tokenized in {:?}", start.elapsed());
                ExitCode::SUCCESS
            }
            Err(error) => {
                eprintln!("{}", render_error(&error, &file_contents));
                ExitCode::FAILURE
            }
        };
    }

    let parsed_ast = parse(&file_contents, Some(String::from(file_name)));

    println!("Parsed in {:?}", start.elapsed());

    match parsed_ast {
        Ok(ast) => {
            println!("{}", pretty_print(ast.to_string()));
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", render_error(&error, &file_contents));
            ExitCode::FAILURE
        }
    }
}

/// Breaks the one-line tuple notation into an indented tree, one form per
/// line. Quoted text is copied through untouched.
fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut in_quote = false;
    let mut escaped = false;

    for c in string.chars() {
        if in_quote {
            result.push(c);
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '\'' => in_quote = false,
                _ => {}
            }
            continue;
        }

        match c {
            '\'' => {
                in_quote = true;
                result.push(c);
            }
            '[' => {
                if indent > 0 {
                    result.truncate(result.trim_end().len());
                    result.push('\n');
                    result.push_str(&"  ".repeat(indent));
                }
                result.push(c);
                indent += 1;
            }
            ']' => {
                indent = indent.saturating_sub(1);
                result.push(c);
            }
            _ => result.push(c),
        }
    }

    result
}
