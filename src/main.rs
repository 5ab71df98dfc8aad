// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]
use RustedNewton::numerical::NR::{NR, SolveResult};

fn main() {
    // find the root of x^2 - 4 starting from 3
    let mut NR_instanse = NR::new();
    NR_instanse
        .eq_generate_from_str("x**2 - 4", None, 3.0, 1e-6, 50)
        .expect("expression must parse");
    let result = NR_instanse.solve();
    match &result {
        SolveResult::Solved(report) => {
            println!("\n {} root = {:?}", report.message, report.root);
            println!("{}", NR_instanse.history_table());
        }
        SolveResult::Failed(descr) => println!("solve failed: {}", descr),
    }

    // transcendental equation, the Dottie number
    let mut NR_instanse = NR::new();
    NR_instanse
        .eq_generate_from_str("cos(x) - x", None, 1.0, 1e-10, 100)
        .expect("expression must parse");
    let result = NR_instanse.solve();
    println!("\n cos(x) = x root = {:?}", result.root());
    println!("{}", NR_instanse.history_table());

    // zero derivative: no progress is possible
    let mut NR_instanse = NR::new();
    NR_instanse
        .eq_generate_from_str("5", None, 1.0, 1e-6, 50)
        .expect("expression must parse");
    let result = NR_instanse.solve();
    println!("\n constant equation: {:?}", result.message());
}
