pub mod ast;
pub mod error;
pub mod store;

pub use ast::{compile, Bindings, ExpressionNode};
pub use error::{ExpressionError, Result, StoreError};
pub use store::{Equation, EquationStore};

/// Compiles and evaluates `expression` in one go.
pub fn evaluate_expression(expression: &str, bindings: &Bindings) -> Result<f64> {
    let tree = compile(expression)?;
    tree.evaluate(bindings)
}
