use crate::ast::Operator;
use crate::error::{ExpressionError, Result};
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Identifier(char),
    Operator(Operator),
    LeftParen,
    RightParen,
    /// Text that is neither a number nor a single letter, such as `xy` or
    /// `1.2.3`. Kept as a token so parenthesis errors are still reported
    /// first; tree building rejects it.
    Invalid(String),
}

/// Splits `input` into tokens.
///
/// Runs of digits and decimal points form numbers and runs of letters form
/// identifiers. Where a number touches a letter (either way round) a `*` is
/// inserted, so `3x` lexes as `3 * x` and `x3` as `x * 3`. Adjacent letters
/// are never split; a run that is not one letter becomes [`Token::Invalid`].
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut lexer = Lexer::default();
    for c in input.chars() {
        lexer.push(c)?;
    }
    lexer.flush()?;

    debug!("Tokens for '{}': {:?}", input, lexer.tokens);
    Ok(lexer.tokens)
}

#[derive(Debug, Default)]
struct Lexer {
    tokens: Vec<Token>,
    buffer: String,
    in_number: bool,
}

impl Lexer {
    fn push(&mut self, c: char) -> Result<()> {
        match c {
            c if c.is_whitespace() => self.flush(),
            '(' => {
                self.flush()?;
                self.tokens.push(Token::LeftParen);
                Ok(())
            }
            ')' => {
                self.flush()?;
                self.tokens.push(Token::RightParen);
                Ok(())
            }
            '+' | '-' | '*' | '/' | '^' => {
                self.flush()?;
                self.tokens.push(Token::Operator(Operator::try_from(c)?));
                Ok(())
            }
            c if c.is_ascii_digit() || c == '.' => {
                if !self.in_number && !self.buffer.is_empty() {
                    self.flush_implicit_multiply()?;
                }
                self.buffer.push(c);
                self.in_number = true;
                Ok(())
            }
            c if c.is_alphabetic() => {
                if self.in_number && !self.buffer.is_empty() {
                    self.flush_implicit_multiply()?;
                }
                self.buffer.push(c);
                self.in_number = false;
                Ok(())
            }
            _ => Err(ExpressionError::malformed(format!(
                "invalid character '{}'",
                c
            ))),
        }
    }

    fn flush_implicit_multiply(&mut self) -> Result<()> {
        self.flush()?;
        self.tokens.push(Token::Operator(Operator::Multiply));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }

        let token = if self.in_number {
            match self.buffer.parse::<f64>() {
                Ok(value) if !value.is_finite() => {
                    return Err(ExpressionError::malformed(format!(
                        "number '{}' is out of range",
                        self.buffer
                    )))
                }
                Ok(value) => Token::Number(value),
                Err(_) => Token::Invalid(self.buffer.clone()),
            }
        } else {
            let mut letters = self.buffer.chars();
            match (letters.next(), letters.next()) {
                (Some(name), None) => Token::Identifier(name),
                _ => Token::Invalid(self.buffer.clone()),
            }
        };

        self.tokens.push(token);
        self.buffer.clear();
        self.in_number = false;
        Ok(())
    }
}
