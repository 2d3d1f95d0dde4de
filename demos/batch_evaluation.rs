use equation_solver_rs::ast::{compile, Bindings};

fn main() {
    pretty_env_logger::init();

    let tree = compile("100 / (t + 1) ^ 2").unwrap();

    let contexts: Vec<Bindings> = (0..10).map(|t| Bindings::from([('t', t as f64)])).collect();

    for (context, result) in contexts.iter().zip(tree.evaluate_batch(&contexts)) {
        println!("t = {}: {:?}", context[&'t'], result);
    }
}
