use crate::ast::{Bindings, ExpressionNode};
use crate::error::{ExpressionError, Result};
use log::trace;
use rayon::prelude::*;

impl ExpressionNode {
    /// Evaluates the tree against `bindings`.
    ///
    /// # Errors
    ///
    /// * `UnboundVariable` if a variable is missing from `bindings`.
    /// * `DivisionByZero` if the right side of a `/` evaluates to zero.
    ///
    /// The tree is left untouched either way, so a failed call can be retried
    /// with corrected bindings.
    pub fn evaluate(&self, bindings: &Bindings) -> Result<f64> {
        match self {
            ExpressionNode::Constant(value) => Ok(*value),

            ExpressionNode::Variable(name) => bindings
                .get(name)
                .copied()
                .ok_or(ExpressionError::UnboundVariable(*name)),

            ExpressionNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_value = left.evaluate(bindings)?;
                let right_value = right.evaluate(bindings)?;
                let result = operator.apply(left_value, right_value)?;
                trace!("{} {} {} = {}", left_value, operator, right_value, result);
                Ok(result)
            }
        }
    }

    /// Evaluates the same tree against many binding sets in parallel.
    ///
    /// Results come back in input order and fail independently.
    pub fn evaluate_batch(&self, contexts: &[Bindings]) -> Vec<Result<f64>> {
        contexts
            .par_iter()
            .map(|bindings| self.evaluate(bindings))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Operator;

    fn bindings(pairs: &[(char, f64)]) -> Bindings {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_constant() {
        assert_eq!(ExpressionNode::Constant(7.25).evaluate(&Bindings::new()), Ok(7.25));
    }

    #[test]
    fn test_variable_lookup() {
        let node = ExpressionNode::Variable('x');
        assert_eq!(node.evaluate(&bindings(&[('x', 3.0)])), Ok(3.0));
    }

    #[test]
    fn test_unbound_variable() {
        let node = ExpressionNode::binary(
            ExpressionNode::Variable('x'),
            Operator::Add,
            ExpressionNode::Variable('y'),
        );
        assert_eq!(
            node.evaluate(&bindings(&[('x', 2.0)])),
            Err(ExpressionError::UnboundVariable('y'))
        );
    }

    #[test]
    fn test_variable_names_are_case_sensitive() {
        let node = ExpressionNode::Variable('X');
        assert_eq!(
            node.evaluate(&bindings(&[('x', 1.0)])),
            Err(ExpressionError::UnboundVariable('X'))
        );
    }

    #[test]
    fn test_left_operand_fails_first() {
        let node = ExpressionNode::binary(
            ExpressionNode::Variable('a'),
            Operator::Divide,
            ExpressionNode::Constant(0.0),
        );
        assert_eq!(
            node.evaluate(&Bindings::new()),
            Err(ExpressionError::UnboundVariable('a'))
        );
    }

    #[test]
    fn test_division_by_zero_from_subexpression() {
        let node = ExpressionNode::binary(
            ExpressionNode::Constant(1.0),
            Operator::Divide,
            ExpressionNode::binary(
                ExpressionNode::Variable('x'),
                Operator::Subtract,
                ExpressionNode::Constant(2.0),
            ),
        );
        assert_eq!(
            node.evaluate(&bindings(&[('x', 2.0)])),
            Err(ExpressionError::DivisionByZero)
        );
        // The same tree is still usable with different bindings.
        assert_eq!(node.evaluate(&bindings(&[('x', 4.0)])), Ok(0.5));
    }

    #[test]
    fn test_zero_numerator_is_fine() {
        let node = ExpressionNode::binary(
            ExpressionNode::Constant(0.0),
            Operator::Divide,
            ExpressionNode::Constant(5.0),
        );
        assert_eq!(node.evaluate(&Bindings::new()), Ok(0.0));
    }

    #[test]
    fn test_evaluate_is_repeatable() {
        let node = ExpressionNode::binary(
            ExpressionNode::Variable('x'),
            Operator::Power,
            ExpressionNode::Constant(0.5),
        );
        let values = bindings(&[('x', 2.0)]);
        assert_eq!(node.evaluate(&values), node.evaluate(&values));
    }

    #[test]
    fn test_evaluate_batch_preserves_order() {
        let node = ExpressionNode::binary(
            ExpressionNode::Constant(10.0),
            Operator::Divide,
            ExpressionNode::Variable('x'),
        );
        let contexts = vec![
            bindings(&[('x', 2.0)]),
            bindings(&[('x', 0.0)]),
            Bindings::new(),
            bindings(&[('x', 4.0)]),
        ];

        let results = node.evaluate_batch(&contexts);
        assert_eq!(
            results,
            vec![
                Ok(5.0),
                Err(ExpressionError::DivisionByZero),
                Err(ExpressionError::UnboundVariable('x')),
                Ok(2.5),
            ]
        );
    }

    #[test]
    fn test_evaluate_batch_large() {
        let node = ExpressionNode::binary(
            ExpressionNode::Variable('n'),
            Operator::Multiply,
            ExpressionNode::Constant(2.0),
        );
        let contexts: Vec<Bindings> = (0..1000).map(|i| bindings(&[('n', i as f64)])).collect();

        let results = node.evaluate_batch(&contexts);
        for (i, result) in results.into_iter().enumerate() {
            assert_eq!(result, Ok(i as f64 * 2.0));
        }
    }
}
