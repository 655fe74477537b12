//! Run one step on one line of input

use super::{CliError, Step};
use crate::{Lexer, Parser, output};

/// Runs `step` on `line` and returns the text to print.
///
/// Tokenizing yields one `KIND literal` line per token, without the final
/// EOF. Parsing yields the pretty JSON tree, or the parse error.
pub fn execute_line(step: Step, line: &str) -> Result<String, CliError> {
    execute_bytes(step, line.as_bytes())
}

/// Like [`execute_line`], for a line that may not be valid UTF-8.
pub fn execute_bytes(step: Step, line: &[u8]) -> Result<String, CliError> {
    let lexer = Lexer::from_bytes(line);

    match step {
        Step::Tokenize => {
            let mut out = String::new();
            for token in lexer {
                out.push_str(&output::format_token(&token));
                out.push('\n');
            }
            Ok(out)
        }
        Step::Parse => {
            let ast = Parser::new(lexer).parse()?;
            let mut out = output::to_json_pretty(&ast)?;
            out.push('\n');
            Ok(out)
        }
    }
}
