use equation_solver_rs::ast::Bindings;
use equation_solver_rs::evaluate_expression;

fn main() {
    pretty_env_logger::init();

    let contexts = vec![
        Bindings::from([('x', 2.0), ('y', 3.0), ('z', 1.0)]),
        Bindings::from([('x', -1.5), ('y', 0.5), ('z', 4.0)]),
        Bindings::from([('x', 2.0)]),
    ];

    let expression = "3x + 2y - z";

    for (i, context) in contexts.iter().enumerate() {
        match evaluate_expression(expression, context) {
            Ok(result) => println!("Result {}: {}", i, result),
            Err(err) => println!("Error {}: {}", i, err),
        }
    }
}
