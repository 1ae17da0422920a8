//! Tokenizer for arithmetic expressions.
//!
//! Names are read as whole words and resolved through the [`Vocabulary`], so a
//! constant like `e` can never be confused with the letters of `sqrt` or `sin`.

use std::fmt;

use super::error::EvaluationError;
use super::vocabulary::{MathFn, Symbol, Vocabulary};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Constant(f64),
    Function(MathFn),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    Percent,
    LParen,
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "number {}", n),
            Token::Constant(c) => write!(f, "constant {}", c),
            Token::Function(func) => write!(f, "function {:?}", func),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::Caret => write!(f, "'^'"),
            Token::Percent => write!(f, "'%'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
        }
    }
}

/// Split `input` into tokens. `**` is read as `^`.
pub fn tokenize(input: &str, vocabulary: &Vocabulary) -> Result<Vec<Token>, EvaluationError> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let op = match c {
            '+' => Some(Token::Plus),
            '-' => Some(Token::Minus),
            '*' if chars.get(i + 1) == Some(&'*') => {
                i += 1;
                Some(Token::Caret)
            }
            '*' => Some(Token::Star),
            '/' => Some(Token::Slash),
            '^' => Some(Token::Caret),
            '%' => Some(Token::Percent),
            '(' => Some(Token::LParen),
            ')' => Some(Token::RParen),
            _ => None,
        };
        if let Some(tok) = op {
            out.push(tok);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let text: String = chars[start..i].iter().collect();
            let value = text
                .parse::<f64>()
                .map_err(|_| EvaluationError::InvalidNumber(text.clone()))?;
            out.push(Token::Number(value));
            continue;
        }

        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let tok = match vocabulary.lookup(&word) {
                Some(Symbol::Constant(v)) => Token::Constant(v),
                Some(Symbol::Function(func)) => Token::Function(func),
                None => return Err(EvaluationError::UnknownName(word)),
            };
            out.push(tok);
            continue;
        }

        return Err(EvaluationError::UnexpectedChar { ch: c, pos: i });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{E, PI};

    fn lex(s: &str) -> Result<Vec<Token>, EvaluationError> {
        tokenize(s, &Vocabulary::default())
    }

    #[test]
    fn numbers_and_operators() {
        assert_eq!(
            lex("12 + 3.5*(.5)").unwrap(),
            vec![
                Token::Number(12.0),
                Token::Plus,
                Token::Number(3.5),
                Token::Star,
                Token::LParen,
                Token::Number(0.5),
                Token::RParen,
            ]
        );
    }

    #[test]
    fn double_star_is_power() {
        assert_eq!(
            lex("2**3").unwrap(),
            vec![Token::Number(2.0), Token::Caret, Token::Number(3.0)]
        );
    }

    #[test]
    fn function_names_are_not_split_by_e() {
        assert_eq!(
            lex("sin(e)").unwrap(),
            vec![
                Token::Function(MathFn::Sin),
                Token::LParen,
                Token::Constant(E),
                Token::RParen,
            ]
        );
        assert_eq!(lex("SQRT").unwrap(), vec![Token::Function(MathFn::Sqrt)]);
    }

    #[test]
    fn pi_symbol_and_word() {
        assert_eq!(
            lex("π*pi").unwrap(),
            vec![Token::Constant(PI), Token::Star, Token::Constant(PI)]
        );
    }

    #[test]
    fn unknown_word_rejected() {
        assert_eq!(
            lex("tennis"),
            Err(EvaluationError::UnknownName("tennis".to_string()))
        );
    }

    #[test]
    fn malformed_number_rejected() {
        assert!(matches!(lex("1.2.3"), Err(EvaluationError::InvalidNumber(_))));
        assert!(matches!(lex("."), Err(EvaluationError::InvalidNumber(_))));
    }

    #[test]
    fn unexpected_char_reports_position() {
        assert_eq!(
            lex("1 + $"),
            Err(EvaluationError::UnexpectedChar { ch: '$', pos: 4 })
        );
    }
}
