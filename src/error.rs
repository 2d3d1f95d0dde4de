use thiserror::Error;

/// Errors raised while compiling or evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    /// Empty input, invalid character, bad operand count or unknown operator.
    #[error("Malformed expression: {0}")]
    MalformedExpression(String),

    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    /// A variable referenced by the tree is missing from the bindings.
    #[error("Variable '{0}' not found in provided values")]
    UnboundVariable(char),

    #[error("Division by zero")]
    DivisionByZero,
}

impl ExpressionError {
    pub(crate) fn malformed(detail: impl Into<String>) -> Self {
        ExpressionError::MalformedExpression(detail.into())
    }
}

/// Errors raised by [`EquationStore`](crate::store::EquationStore).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    #[error("Invalid equation: {0}")]
    InvalidEquation(#[source] ExpressionError),

    #[error("Equation with ID {0} not found")]
    EquationNotFound(u64),

    #[error("Error evaluating equation: {0}")]
    Evaluation(#[source] ExpressionError),
}

/// Result type alias for expression operations
pub type Result<T> = std::result::Result<T, ExpressionError>;
