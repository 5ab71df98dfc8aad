///  Example#1
/// ```
/// use RustedNewton::numerical::NR::NR;
/// //use the shortest way to find a root
///    // first define the equation and initial guess
///    let mut NR_instanse = NR::new();
///    NR_instanse.eq_generate_from_str("x^2 - 4", None, 3.0, 1e-6, 50).unwrap();
///    let result = NR_instanse.main_loop().unwrap();
///    println!("root = {:?} \n", result.root);
/// ```
/// Example#2
/// ```
///    // or more verbose way...
///    use RustedNewton::numerical::NR::NR;
///    use RustedNewton::symbolic::symbolic_engine::Expr;
///    let equation = Expr::parse_expression("x^3 - x - 2").unwrap();
///    let mut NR_instanse = NR::new();
///    NR_instanse.set_equation(equation, Some("x".to_string()), 1.5, 1e-9, 100);
///    NR_instanse.set_solver_params(Some("off".to_string()));
///    let result = NR_instanse.solve();
///    assert!(result.is_converged());
///    println!("root = {:?} \n", result.root());
/// ```
use crate::symbolic::symbolic_engine::Expr;
use log::{error, info, warn};
use simplelog::LevelFilter;
use simplelog::*;
use std::time::{Duration, Instant};
use tabled::{Table, Tabled, builder::Builder, settings::Style};

/// One pass of the Newton-Raphson loop: the estimate and the function and
/// derivative values computed at it. Records are appended to the history in
/// execution order before the exit conditions are tested, so the trace always
/// contains the final accepted or rejected estimate.
#[derive(Clone, Debug, PartialEq, Tabled)]
pub struct IterationRecord {
    /// 1-based position in the trace
    pub index: usize,
    /// current estimate
    pub x: f64,
    /// f(x)
    pub fx: f64,
    /// f'(x)
    pub dfx: f64,
}

/// Terminal outcome of a solve that ran the iteration loop: either converged,
/// stopped on a zero derivative, or ran out of iterations.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveReport {
    /// the root estimate; None when the derivative vanished
    pub root: Option<f64>,
    pub converged: bool,
    /// full per-iteration trace, one record per executed pass
    pub history: Vec<IterationRecord>,
    /// human-readable outcome description
    pub message: String,
}

/// Result of a solve call. `Failed` replaces the whole result when the
/// expression cannot be parsed or compiled, or when evaluation produces a
/// non-finite value mid-loop: no root, no history, no convergence flag, only
/// the error description. The two variants are mutually exclusive by
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub enum SolveResult {
    Solved(SolveReport),
    Failed(String),
}

impl SolveResult {
    pub fn root(&self) -> Option<f64> {
        match self {
            SolveResult::Solved(report) => report.root,
            SolveResult::Failed(_) => None,
        }
    }

    pub fn is_converged(&self) -> bool {
        match self {
            SolveResult::Solved(report) => report.converged,
            SolveResult::Failed(_) => false,
        }
    }

    pub fn history(&self) -> &[IterationRecord] {
        match self {
            SolveResult::Solved(report) => &report.history,
            SolveResult::Failed(_) => &[],
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SolveResult::Solved(report) => Some(&report.message),
            SolveResult::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SolveResult::Solved(_) => None,
            SolveResult::Failed(descr) => Some(descr),
        }
    }
}

/// Newton-Raphson solver for a single equation f(x) = 0.
///
/// The equation is supplied as a symbolic expression (or a string that parses
/// into one); the derivative is obtained analytically and both are lambdified
/// into plain Rust closures before the loop starts. Each invocation of the
/// loop rebuilds its own history, so instances may be reused and separate
/// instances share nothing.
pub struct NR {
    pub equation: Option<Expr>,  // equation to solve, f(x) = 0
    pub variable: Option<String>, // name of the unknown
    pub initial_guess: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
    pub derivative: Option<Expr>, // symbolic derivative of the equation
    pub i: usize,                 // iteration counter
    pub history: Vec<IterationRecord>,
    pub result: Option<SolveResult>,
    pub loglevel: Option<String>,

    fun: Option<Box<dyn Fn(f64) -> f64>>,
    deriv_fun: Option<Box<dyn Fn(f64) -> f64>>,
    max_residual: f64,
}

impl NR {
    pub fn new() -> NR {
        NR {
            equation: None,
            variable: None,
            initial_guess: 0.0,
            tolerance: 1e-6,
            max_iterations: 50,
            derivative: None,
            i: 0,
            history: Vec::new(),
            result: None,
            loglevel: Some("info".to_string()),
            fun: None,
            deriv_fun: None,
            max_residual: 0.0,
        }
    }
    ////////////////////////////SETTERS///////////////////////////////////////////////////////////////////
    /// Basic method to set the equation
    pub fn set_equation(
        &mut self,
        equation: Expr,
        variable: Option<String>,
        initial_guess: f64,
        tolerance: f64,
        max_iterations: usize,
    ) {
        assert!(
            initial_guess.is_finite(),
            "Initial guess should be a finite number."
        );
        assert!(
            tolerance >= 0.0,
            "Tolerance should be a non-negative number."
        );
        assert!(
            max_iterations > 0,
            "Max iterations should be a positive number."
        );
        self.equation = Some(equation);
        self.variable = variable;
        self.initial_guess = initial_guess;
        self.tolerance = tolerance;
        self.max_iterations = max_iterations;
    }

    /// Parses the equation from a string and sets it together with the solver
    /// parameters. Returns a parse error description on malformed input.
    pub fn eq_generate_from_str(
        &mut self,
        equation_string: &str,
        variable: Option<&str>,
        initial_guess: f64,
        tolerance: f64,
        max_iterations: usize,
    ) -> Result<(), String> {
        let equation = Expr::parse_expression(equation_string)?;
        self.set_equation(
            equation,
            variable.map(|v| v.to_string()),
            initial_guess,
            tolerance,
            max_iterations,
        );
        self.eq_generate()
    }

    pub fn set_solver_params(&mut self, loglevel: Option<String>) {
        self.loglevel = if let Some(level) = loglevel {
            assert!(
                level == "debug"
                    || level == "info"
                    || level == "warn"
                    || level == "error"
                    || level == "off"
                    || level == "none",
                "loglevel must be debug/info, warn, error or off/none"
            );
            Some(level.to_string())
        } else {
            self.loglevel.clone()
        };
    }

    /// Discovers the unknown, differentiates the equation analytically and
    /// lambdifies both the equation and its derivative into Rust closures.
    ///
    /// Fails if no equation was set, if the expression contains variables
    /// other than the declared one, or if it contains more than one distinct
    /// variable when none was declared. A constant expression is allowed and
    /// compiles to closures that ignore their argument.
    pub fn eq_generate(&mut self) -> Result<(), String> {
        let equation = self
            .equation
            .clone()
            .ok_or_else(|| "No equation is set.".to_string())?;
        let found_vars = equation.all_arguments_are_variables();
        let variable = match &self.variable {
            Some(declared) => {
                let undefined: Vec<String> = found_vars
                    .iter()
                    .filter(|v| *v != declared)
                    .cloned()
                    .collect();
                if !undefined.is_empty() {
                    return Err(format!(
                        "undefined variable(s) {:?} in equation '{}', expected only '{}'",
                        undefined, equation, declared
                    ));
                }
                declared.clone()
            }
            None => match found_vars.len() {
                0 => "x".to_string(), // constant equation, variable name is irrelevant
                1 => found_vars[0].clone(),
                _ => {
                    return Err(format!(
                        "equation '{}' contains more than one variable: {:?}",
                        equation, found_vars
                    ));
                }
            },
        };
        let derivative = equation.diff(&variable);
        info!(
            "equation: {}, d/d{} = {}",
            equation, variable, derivative
        );
        self.variable = Some(variable);
        self.fun = Some(equation.lambdify1D());
        self.deriv_fun = Some(derivative.lambdify1D());
        self.derivative = Some(derivative);
        Ok(())
    }
    /////////////////////////////////////////////////////////////////////////////////////////////
    //                ITERATIONS
    /////////////////////////////////////////////////////////////////////////////////////////////
    /// The Newton-Raphson control loop.
    ///
    /// Each pass evaluates f and f' at the current estimate, appends the
    /// record to the history, then tests the exit conditions in fixed order:
    /// convergence (|f(x)| < tolerance) strictly before the zero-derivative
    /// check, so an estimate already within tolerance wins even if the
    /// derivative vanishes on the same pass. The derivative test is exact
    /// equality with zero: a near-zero derivative passes through and may throw
    /// the next estimate far away, which the max_iterations bound absorbs.
    ///
    /// A non-finite f(x) or f'(x) aborts the whole call with Err: no partial
    /// result survives, matching the setup-failure policy.
    pub fn main_loop(&mut self) -> Result<SolveReport, String> {
        let f = self
            .fun
            .as_ref()
            .ok_or_else(|| "Equation is not compiled, call eq_generate first.".to_string())?;
        let df = self
            .deriv_fun
            .as_ref()
            .ok_or_else(|| "Derivative is not compiled, call eq_generate first.".to_string())?;
        self.history = Vec::new();
        self.i = 0;
        self.max_residual = 0.0;
        let mut x = self.initial_guess;
        for i in 1..=self.max_iterations {
            let fx = f(x);
            let dfx = df(x);
            if !fx.is_finite() || !dfx.is_finite() {
                self.history = Vec::new();
                return Err(format!(
                    "evaluation failed at x = {}: f(x) = {}, f'(x) = {}",
                    x, fx, dfx
                ));
            }
            self.history.push(IterationRecord { index: i, x, fx, dfx });
            self.i = i;
            let residual = fx.abs();
            if (residual > self.max_residual) && (i > 1) {
                warn!("Residual is increasing");
            }
            self.max_residual = residual;
            if residual < self.tolerance {
                info!("converged at iteration {}: x = {}, |f(x)| = {:e}", i, x, residual);
                return Ok(SolveReport {
                    root: Some(x),
                    converged: true,
                    history: self.history.clone(),
                    message: "Converged within tolerance.".to_string(),
                });
            }
            if dfx == 0.0 {
                error!("Derivative is zero at x = {}, iteration {}", x, i);
                return Ok(SolveReport {
                    root: None,
                    converged: false,
                    history: self.history.clone(),
                    message: "Error: Derivative is zero. No solution found.".to_string(),
                });
            }
            x = x - fx / dfx;
            info!("iteration = {}, x = {}, residual = {:e}", i, x, residual);
        }
        error!("Maximum number of iterations reached. No solution found.");
        Ok(SolveReport {
            root: Some(x),
            converged: false,
            history: self.history.clone(),
            message: "Max iterations reached without full convergence.".to_string(),
        })
    }
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
    //                                       main functions to start the solver and calculate statistics
    ////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

    pub fn solver(&mut self) -> SolveResult {
        let begin = Instant::now();
        let result = match self.eq_generate() {
            Ok(()) => match self.main_loop() {
                Ok(report) => SolveResult::Solved(report),
                Err(descr) => SolveResult::Failed(descr),
            },
            Err(descr) => SolveResult::Failed(descr),
        };
        self.calc_statistics(begin.elapsed(), &result);
        self.result = Some(result.clone());
        result
    }

    // wrapper around solver function to implement logging
    pub fn solve(&mut self) -> SolveResult {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);

        if is_logging_disabled {
            self.solver()
        } else {
            let loglevel = self.loglevel.clone();
            let log_option = if let Some(level) = loglevel {
                match level.as_str() {
                    "debug" => LevelFilter::Info,
                    "info" => LevelFilter::Info,
                    "warn" => LevelFilter::Warn,
                    "error" => LevelFilter::Error,
                    _ => panic!("loglevel must be debug, info, warn or error"),
                }
            } else {
                LevelFilter::Info
            };
            let logger_instance = CombinedLogger::init(vec![TermLogger::new(
                log_option,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]);

            match logger_instance {
                Ok(()) => {
                    let res = self.solver();
                    info!("Program ended");
                    res
                }
                // logger already installed by an earlier call
                Err(_) => self.solver(),
            }
        }
    }

    pub fn get_result(&self) -> Option<&SolveResult> {
        self.result.as_ref()
    }

    pub fn get_history(&self) -> &[IterationRecord] {
        &self.history
    }

    /// Renders the iteration trace as a text table.
    pub fn history_table(&self) -> String {
        let mut table = Table::new(&self.history);
        table.with(Style::modern_rounded());
        table.to_string()
    }

    fn calc_statistics(&self, elapsed: Duration, result: &SolveResult) {
        let outcome = match result {
            SolveResult::Solved(report) => report.message.clone(),
            SolveResult::Failed(descr) => format!("Failed: {}", descr),
        };
        let mut builder = Builder::default();
        builder.push_record(["time elapsed, ms", &elapsed.as_millis().to_string()]);
        builder.push_record(["number of iterations", &self.i.to_string()]);
        builder.push_record(["outcome", &outcome]);
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        info!("\n \n CALC STATISTICS \n \n {}", table);
    }
}

impl Default for NR {
    fn default() -> Self {
        NR::new()
    }
}

/// One-shot solve of f(x) = 0 from an expression string.
///
/// The conventional defaults are `tolerance = 1e-6` and `max_iterations = 50`
/// (the initial values of a fresh [`NR`] instance). The free variable is
/// discovered from the expression. No logger is installed; use the [`NR`]
/// struct API for the logging wrapper.
pub fn solve_from_str(
    expression: &str,
    initial_guess: f64,
    tolerance: f64,
    max_iterations: usize,
) -> SolveResult {
    let mut nr = NR::new();
    match Expr::parse_expression(expression) {
        Ok(equation) => {
            nr.set_equation(equation, None, initial_guess, tolerance, max_iterations);
            nr.solver()
        }
        Err(descr) => SolveResult::Failed(descr),
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////////////////
//                                     TESTS
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[test]
fn test_NR_converges_on_parabola() {
    use approx::assert_abs_diff_eq;
    let result = solve_from_str("x**2 - 4", 3.0, 1e-6, 50);
    assert!(result.is_converged());
    let root = result.root().unwrap();
    assert_abs_diff_eq!(root, 2.0, epsilon = 1e-6);
    assert_eq!(result.message(), Some("Converged within tolerance."));
    let history = result.history();
    assert!(!history.is_empty());
    for (k, record) in history.iter().enumerate() {
        assert_eq!(record.index, k + 1);
    }
}

#[test]
fn test_NR_history_is_complete() {
    let result = solve_from_str("x^2 - 4", 3.0, 1e-6, 50);
    let history = result.history();
    assert_eq!(history.len(), history.last().unwrap().index);
    // last record holds the estimate that was accepted as the root
    assert_eq!(Some(history.last().unwrap().x), result.root());
}

#[test]
fn test_NR_singular_derivative() {
    let result = solve_from_str("5", 1.0, 1e-6, 50);
    assert!(!result.is_converged());
    assert_eq!(result.root(), None);
    assert_eq!(
        result.message(),
        Some("Error: Derivative is zero. No solution found.")
    );
    assert_eq!(result.history().len(), 1);
    let record = &result.history()[0];
    assert_eq!((record.index, record.fx, record.dfx), (1, 5.0, 0.0));
}

#[test]
fn test_NR_max_iterations_reached() {
    // x^2 + 1 has no real root, the iterates wander forever
    let result = solve_from_str("x^2 + 1", 0.5, 1e-6, 5);
    assert!(!result.is_converged());
    assert_eq!(
        result.message(),
        Some("Max iterations reached without full convergence.")
    );
    let history = result.history();
    assert_eq!(history.len(), 5);
    // exhausted outcome still reports the last computed estimate
    let last = history.last().unwrap();
    let expected = last.x - last.fx / last.dfx;
    assert_eq!(result.root(), Some(expected));
}

#[test]
fn test_NR_malformed_expression() {
    let result = solve_from_str("not a valid expr @@", 1.0, 1e-6, 50);
    assert!(result.error().is_some());
    assert!(!result.error().unwrap().is_empty());
    assert_eq!(result.root(), None);
    assert!(result.history().is_empty());
    assert_eq!(result.message(), None);
}

#[test]
fn test_NR_is_deterministic() {
    let first = solve_from_str("cos(x) - x", 1.0, 1e-9, 100);
    let second = solve_from_str("cos(x) - x", 1.0, 1e-9, 100);
    assert_eq!(first, second);
    assert!(first.is_converged());
}

#[test]
fn test_NR_convergence_checked_before_singularity() {
    // at x = 0 both f(x) = 0 and f'(x) = 0; convergence must win
    let result = solve_from_str("x^2", 0.0, 1e-6, 50);
    assert!(result.is_converged());
    assert_eq!(result.root(), Some(0.0));
    assert_eq!(result.history().len(), 1);
}

#[test]
fn test_NR_cubic_with_struct_api() {
    use approx::assert_abs_diff_eq;
    let equation = Expr::parse_expression("x^3 - x - 2").unwrap();
    let mut NR_instanse = NR::new();
    NR_instanse.set_equation(equation, Some("x".to_string()), 1.5, 1e-9, 100);
    NR_instanse.set_solver_params(Some("off".to_string()));
    let result = NR_instanse.solve();
    assert!(result.is_converged());
    assert_abs_diff_eq!(result.root().unwrap(), 1.5213797068045676, epsilon = 1e-8);
    assert_eq!(NR_instanse.get_history().len(), result.history().len());
}

#[test]
fn test_NR_undefined_variable_is_an_error() {
    let mut NR_instanse = NR::new();
    let outcome = NR_instanse.eq_generate_from_str("x + y", None, 1.0, 1e-6, 50);
    assert!(outcome.is_err());

    let mut NR_instanse = NR::new();
    let equation = Expr::parse_expression("x + y").unwrap();
    NR_instanse.set_equation(equation, Some("x".to_string()), 1.0, 1e-6, 50);
    let result = NR_instanse.solver();
    assert!(result.error().unwrap().contains("undefined variable"));
}

#[test]
fn test_NR_evaluation_failure_discards_history() {
    // ln(x) with a negative guess: f(x) is NaN on the very first pass
    let result = solve_from_str("ln(x)", -1.0, 1e-6, 50);
    assert!(result.error().is_some());
    assert!(result.history().is_empty());
}

#[test]
fn test_NR_transcendental_equation() {
    use approx::assert_abs_diff_eq;
    // Dottie number, the fixed point of cos
    let result = solve_from_str("cos(x) - x", 1.0, 1e-10, 100);
    assert!(result.is_converged());
    assert_abs_diff_eq!(result.root().unwrap(), 0.7390851332151607, epsilon = 1e-9);
}

#[test]
fn test_NR_history_table_renders() {
    let mut NR_instanse = NR::new();
    NR_instanse
        .eq_generate_from_str("x^2 - 2", None, 1.0, 1e-9, 50)
        .unwrap();
    NR_instanse.main_loop().unwrap();
    let table = NR_instanse.history_table();
    assert!(table.contains("index"));
    assert!(table.contains("dfx"));
}
