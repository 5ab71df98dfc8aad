#![allow(non_camel_case_types)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedNewton::symbolic::symbolic_engine::Expr;
/// let input = "x^2.3 * ln(x + 1)";
/// let parsed_expression = Expr::parse_expression(input).unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) turns a String expression into a symbolic expression
/// 2) turns a symbolic expression into a Rust function
/// 3) turns a symbolic expression into a string expression for printing and control of results
///# Example#
/// ```
/// use RustedNewton::symbolic::symbolic_engine::Expr;
/// let input = "ln(x)";
/// let f = Expr::parse_expression(input).unwrap();
/// // differentiate with respect to x
/// let df_dx = f.diff("x");
/// //convert symbolic expression to a Rust function and evaluate the function
/// let f_res = f.lambdify1D()(1.0);
/// println!("df_dx = {}, ln(1) = {}", df_dx, f_res);
/// // return vec of all arguments
/// let all = f.all_arguments_are_variables();
/// println!("all arguments are variables {:?}", all);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod symbolic_engine;
pub mod symbolic_engine_derivatives;
pub mod symbolic_lambdify;
#[cfg(test)]
mod symbolic_engine_tests;
