//! Recursive-descent evaluator over lexer tokens.
//!
//! ```text
//! expr    := term (("+" | "-") term)*
//! term    := unary (("*" | "/") unary | "%")*
//! unary   := ("+" | "-") unary | power
//! power   := primary ("^" unary)?
//! primary := NUMBER | CONSTANT | FUNCTION "(" expr ")" | "(" expr ")"
//! ```

use super::error::EvaluationError;
use super::lexer::Token;

/// Max nesting of parentheses / unary operators before giving up.
const MAX_DEPTH: usize = 256;

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

/// Evaluate a token stream. Fails on trailing tokens and on non-finite results.
pub fn evaluate_tokens(tokens: &[Token]) -> Result<f64, EvaluationError> {
    if tokens.is_empty() {
        return Err(EvaluationError::Empty);
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if let Some(tok) = parser.peek() {
        return Err(EvaluationError::UnexpectedToken(tok.to_string()));
    }
    if !value.is_finite() {
        return Err(EvaluationError::NonFinite);
    }
    Ok(value)
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let tok = self.peek();
        if tok.is_some() {
            self.pos += 1;
        }
        tok
    }

    fn expect(&mut self, want: Token) -> Result<(), EvaluationError> {
        match self.next() {
            Some(tok) if tok == want => Ok(()),
            Some(tok) => Err(EvaluationError::UnexpectedToken(tok.to_string())),
            None => Err(EvaluationError::UnexpectedEnd),
        }
    }

    fn descend(&mut self) -> Result<(), EvaluationError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvaluationError::TooDeep);
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<f64, EvaluationError> {
        let mut acc = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.pos += 1;
                    acc += self.term()?;
                }
                Some(Token::Minus) => {
                    self.pos += 1;
                    acc -= self.term()?;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvaluationError> {
        let mut acc = self.unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.pos += 1;
                    acc *= self.unary()?;
                }
                Some(Token::Slash) => {
                    self.pos += 1;
                    acc /= self.unary()?;
                }
                Some(Token::Percent) => {
                    self.pos += 1;
                    acc /= 100.0;
                }
                _ => return Ok(acc),
            }
        }
    }

    fn unary(&mut self) -> Result<f64, EvaluationError> {
        match self.peek() {
            Some(Token::Minus) => {
                self.pos += 1;
                self.descend()?;
                let v = -self.unary()?;
                self.depth -= 1;
                Ok(v)
            }
            Some(Token::Plus) => {
                self.pos += 1;
                self.descend()?;
                let v = self.unary()?;
                self.depth -= 1;
                Ok(v)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64, EvaluationError> {
        let base = self.primary()?;
        if self.peek() == Some(Token::Caret) {
            self.pos += 1;
            self.descend()?;
            // Right-associative: the exponent may itself contain '^'.
            let exp = self.unary()?;
            self.depth -= 1;
            return Ok(base.powf(exp));
        }
        Ok(base)
    }

    fn primary(&mut self) -> Result<f64, EvaluationError> {
        match self.next() {
            Some(Token::Number(n)) | Some(Token::Constant(n)) => Ok(n),
            Some(Token::Function(func)) => {
                self.expect(Token::LParen)?;
                let arg = self.group()?;
                Ok(func.apply(arg))
            }
            Some(Token::LParen) => self.group(),
            Some(tok) => Err(EvaluationError::UnexpectedToken(tok.to_string())),
            None => Err(EvaluationError::UnexpectedEnd),
        }
    }

    /// Parse `expr ")"` after an opening parenthesis.
    fn group(&mut self) -> Result<f64, EvaluationError> {
        self.descend()?;
        let v = self.expr()?;
        self.expect(Token::RParen)?;
        self.depth -= 1;
        Ok(v)
    }
}
