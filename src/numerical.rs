#![allow(non_snake_case)]
///  Example#1
/// ```
/// use RustedNewton::numerical::NR::solve_from_str;
/// // use the shortest way to find a root
/// let result = solve_from_str("x^2 - 4", 3.0, 1e-6, 50);
/// println!("root = {:?}, converged = {}", result.root(), result.is_converged());
/// ```
/// Example#2
/// ```
///    // or more verbose way...
///    // first define the equation
///    use RustedNewton::numerical::NR::NR;
///    use RustedNewton::symbolic::symbolic_engine::Expr;
///    let equation = Expr::parse_expression("cos(x) - x").unwrap();
///    let mut NR_instanse = NR::new();
///    NR_instanse.set_equation(equation, Some("x".to_string()), 1.0, 1e-9, 100);
///    NR_instanse.set_solver_params(Some("off".to_string()));
///    let result = NR_instanse.solve();
///    println!("result = {:?} \n", result.root());
///    println!("{}", NR_instanse.history_table());
/// ```
pub mod NR;
