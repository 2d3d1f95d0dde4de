use crate::ast::Token;
use crate::error::{ExpressionError, Result};
use log::debug;

/// Reorders infix tokens into postfix with the shunting-yard algorithm.
///
/// An incoming operator pops every stacked operator whose precedence is
/// greater than *or equal to* its own, which makes `^` left-associative:
/// `2 ^ 3 ^ 2` reads as `(2 ^ 3) ^ 2`.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Identifier(_) | Token::Invalid(_) => {
                output.push(token.clone())
            }
            Token::Operator(operator) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    if top.precedence() < operator.precedence() {
                        break;
                    }
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(token.clone());
            }
            Token::LeftParen => stack.push(Token::LeftParen),
            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => output.push(top),
                    None => return Err(ExpressionError::MismatchedParentheses),
                }
            },
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::LeftParen {
            return Err(ExpressionError::MismatchedParentheses);
        }
        output.push(top);
    }

    debug!("Postfix: {:?}", output);
    Ok(output)
}
