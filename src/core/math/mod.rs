//! Arithmetic: classification, tokenizing, evaluation, and result formatting.

mod classify;
mod error;
mod lexer;
mod parser;
mod vocabulary;

pub use classify::looks_like_math;
pub use error::EvaluationError;
pub use vocabulary::{Symbol, Vocabulary};

/// Tokenize and evaluate `expr` with the given name table.
pub fn evaluate(expr: &str, vocabulary: &Vocabulary) -> Result<f64, EvaluationError> {
    let tokens = lexer::tokenize(expr, vocabulary)?;
    parser::evaluate_tokens(&tokens)
}

/// Render a number the way a browser prints it: no ".0" on integers, no "-0",
/// and exponent notation only for very small or very large magnitudes.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        let s = format!("{:e}", value);
        // 1e21 -> "1e+21" like JS; negative exponents already carry a sign.
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }
    format!("{}", value)
}
