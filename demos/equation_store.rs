use equation_solver_rs::ast::Bindings;
use equation_solver_rs::EquationStore;

fn main() {
    pretty_env_logger::init();

    let store = EquationStore::new();

    for text in ["3x + 2y - z", "x^2 + y^2", "(2 + 3", "2 + @ 3"] {
        match store.store(text) {
            Ok(id) => println!("Stored {} as {}", text, id),
            Err(err) => println!("Rejected {}: {}", text, err),
        }
    }

    for equation in store.all() {
        println!("{}: {} => {}", equation.id, equation.text, equation.tree.render());
    }

    let bindings = Bindings::from([('x', 2.0), ('y', 3.0), ('z', 1.0)]);
    for id in [1, 2, 3] {
        match store.evaluate(id, &bindings) {
            Ok(result) => println!("Equation {}: {}", id, result),
            Err(err) => println!("Equation {}: {}", id, err),
        }
    }
}
