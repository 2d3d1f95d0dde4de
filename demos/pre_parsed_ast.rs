use equation_solver_rs::ast::{compile, Bindings};

fn main() {
    pretty_env_logger::init();

    let expression = "(x^2 + y^2) / (x - y)";
    let tree = compile(expression).expect("Failed to parse");
    println!("Compiled: {}", tree.render());
    println!("Variables: {:?}", tree.variables());

    let context = Bindings::from([('x', 3.0), ('y', 4.0)]);
    match tree.evaluate(&context) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }

    let context = Bindings::from([('x', 2.0), ('y', 2.0)]);
    match tree.evaluate(&context) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }
}
