use crate::error::{ExpressionError, Result};
use std::collections::HashMap;
use std::fmt;

mod builder;
mod compiler;
mod evaluator;
mod lexer;
mod postfix;

pub use builder::build;
pub use compiler::*;
pub use lexer::{tokenize, Token};
pub use postfix::to_postfix;

/// Variable values supplied to a single evaluation call.
pub type Bindings = HashMap<char, f64>;

/// A compiled expression tree. Each node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    Constant(f64),
    Variable(char),
    BinaryOperation {
        left: Box<ExpressionNode>,
        operator: Operator,
        right: Box<ExpressionNode>,
    },
}

impl ExpressionNode {
    pub fn binary(left: ExpressionNode, operator: Operator, right: ExpressionNode) -> Self {
        ExpressionNode::BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Canonical fully-parenthesized infix form, e.g. `(2 + (3 * x))`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Distinct variable names referenced by the tree, in first-seen order.
    pub fn variables(&self) -> Vec<char> {
        let mut names = Vec::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut Vec<char>) {
        match self {
            ExpressionNode::Constant(_) => {}
            ExpressionNode::Variable(name) => {
                if !names.contains(name) {
                    names.push(*name);
                }
            }
            ExpressionNode::BinaryOperation { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }
}

impl fmt::Display for ExpressionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64's Display never uses exponent notation, so the output re-tokenizes.
            ExpressionNode::Constant(value) => write!(f, "{}", value),
            ExpressionNode::Variable(name) => write!(f, "{}", name),
            ExpressionNode::BinaryOperation {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub fn apply(&self, left: f64, right: f64) -> Result<f64> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(ExpressionError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Power => Ok(left.powf(right)),
        }
    }

    /// Binding strength used by the postfix conversion. Ties pop, so every
    /// operator (including `^`) associates to the left.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
            Operator::Power => 3,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operator {
    type Error = ExpressionError;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Subtract),
            '*' => Ok(Operator::Multiply),
            '/' => Ok(Operator::Divide),
            '^' => Ok(Operator::Power),
            _ => Err(ExpressionError::malformed(format!(
                "unknown operator '{}'",
                value
            ))),
        }
    }
}
