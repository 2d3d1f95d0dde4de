use crate::ast::{ExpressionNode, Token};
use crate::error::{ExpressionError, Result};
use log::debug;

/// Builds an expression tree from a postfix token sequence.
pub fn build(postfix: &[Token]) -> Result<ExpressionNode> {
    let mut stack: Vec<ExpressionNode> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(value) => stack.push(ExpressionNode::Constant(*value)),
            Token::Identifier(name) => stack.push(ExpressionNode::Variable(*name)),
            Token::Operator(operator) => {
                // Right operand sits on top of the stack.
                let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                    return Err(ExpressionError::malformed(format!(
                        "insufficient operands for operator '{}'",
                        operator
                    )));
                };
                stack.push(ExpressionNode::binary(left, *operator, right));
            }
            Token::Invalid(text) => {
                return Err(ExpressionError::malformed(format!(
                    "invalid token '{}', expected a number or a single-letter variable",
                    text
                )))
            }
            Token::LeftParen | Token::RightParen => {
                return Err(ExpressionError::malformed(
                    "unexpected parenthesis in postfix sequence",
                ))
            }
        }
    }

    let root = stack
        .pop()
        .ok_or_else(|| ExpressionError::malformed("empty expression"))?;
    if !stack.is_empty() {
        return Err(ExpressionError::malformed("too many operands"));
    }

    debug!("Built tree: {}", root);
    Ok(root)
}
