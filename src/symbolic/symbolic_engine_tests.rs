use crate::symbolic::symbolic_engine::Expr;
//___________________________________TESTS____________________________________

mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_add_overload() {
        let expr = Expr::Var("x".to_string()) + Expr::Const(2.0);
        let expected = Expr::Add(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_neg_overload() {
        let expr = -Expr::Var("x".to_string());
        let expected = Expr::Mul(
            Box::new(Expr::Const(-1.0)),
            Box::new(Expr::Var("x".to_string())),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_display() {
        let expr = Expr::Var("x".to_string()).pow(Expr::Const(2.0)) - Expr::Const(4.0);
        assert_eq!(format!("{}", expr), "((x ^ 2) - 4)");
    }

    #[test]
    fn test_parse_simple() {
        let parsed = Expr::parse_expression("x + 2").unwrap();
        let expected = Expr::Add(
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_precedence() {
        // 2 + 3 * 4 = 14, not 20
        let parsed = Expr::parse_expression("2 + 3 * 4").unwrap();
        assert_abs_diff_eq!(parsed.lambdify1D()(0.0), 14.0);
        // (2 + 3) * 4 = 20
        let parsed = Expr::parse_expression("(2 + 3) * 4").unwrap();
        assert_abs_diff_eq!(parsed.lambdify1D()(0.0), 20.0);
    }

    #[test]
    fn test_parse_power_is_right_associative() {
        // 2^3^2 = 2^9 = 512
        let parsed = Expr::parse_expression("2^3^2").unwrap();
        assert_abs_diff_eq!(parsed.lambdify1D()(0.0), 512.0);
    }

    #[test]
    fn test_parse_python_power_synonym() {
        let caret = Expr::parse_expression("x^2 - 4").unwrap();
        let stars = Expr::parse_expression("x**2 - 4").unwrap();
        assert_eq!(caret, stars);
    }

    #[test]
    fn test_parse_unary_minus() {
        // -x^2 is -(x^2)
        let parsed = Expr::parse_expression("-x^2").unwrap();
        assert_abs_diff_eq!(parsed.lambdify1D()(3.0), -9.0, epsilon = 1e-12);
        let parsed = Expr::parse_expression("2 * -3").unwrap();
        assert_abs_diff_eq!(parsed.lambdify1D()(0.0), -6.0);
    }

    #[test]
    fn test_parse_function_aliases() {
        let tan = Expr::parse_expression("tan(x)").unwrap();
        let tg = Expr::parse_expression("tg(x)").unwrap();
        assert_eq!(tan, tg);
        let log = Expr::parse_expression("log(x)").unwrap();
        let ln = Expr::parse_expression("ln(x)").unwrap();
        assert_eq!(log, ln);
        // sqrt is rewritten as a power
        let sqrt = Expr::parse_expression("sqrt(x)").unwrap();
        assert_abs_diff_eq!(sqrt.lambdify1D()(9.0), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_parse_named_constants() {
        let parsed = Expr::parse_expression("sin(pi / 2)").unwrap();
        assert_abs_diff_eq!(parsed.lambdify1D()(0.0), 1.0, epsilon = 1e-15);
        let parsed = Expr::parse_expression("ln(e)").unwrap();
        assert_abs_diff_eq!(parsed.lambdify1D()(0.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_parse_scientific_notation() {
        let parsed = Expr::parse_expression("1e-6 + x").unwrap();
        assert_abs_diff_eq!(parsed.lambdify1D()(0.0), 1e-6);
    }

    #[test]
    fn test_parse_malformed_inputs() {
        assert!(Expr::parse_expression("not a valid expr @@").is_err());
        assert!(Expr::parse_expression("").is_err());
        assert!(Expr::parse_expression("x +").is_err());
        assert!(Expr::parse_expression("(x + 1").is_err());
        assert!(Expr::parse_expression("x + * 2").is_err());
        assert!(Expr::parse_expression("foo(x)").is_err());
    }

    #[test]
    fn test_lambdify1D() {
        let f = Expr::parse_expression("x^2 + 3*x + 1").unwrap();
        let fn_closure = f.lambdify1D();
        assert_abs_diff_eq!(fn_closure(2.0), 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(fn_closure(0.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_lambdify1D_constant_expression() {
        let f = Expr::parse_expression("5").unwrap();
        let fn_closure = f.lambdify1D();
        assert_abs_diff_eq!(fn_closure(123.0), 5.0);
    }

    #[test]
    fn test_diff_polynomial() {
        let f = Expr::parse_expression("x^3 - x - 2").unwrap();
        let df = f.diff("x");
        // d/dx = 3x^2 - 1
        let df_fn = df.lambdify1D();
        assert_abs_diff_eq!(df_fn(2.0), 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(df_fn(0.0), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_diff_product_and_quotient() {
        let f = Expr::parse_expression("x * sin(x)").unwrap();
        let df_fn = f.diff("x").lambdify1D();
        // d/dx = sin(x) + x*cos(x)
        let x = 1.3;
        assert_abs_diff_eq!(df_fn(x), x.sin() + x * x.cos(), epsilon = 1e-12);

        let f = Expr::parse_expression("sin(x) / x").unwrap();
        let df_fn = f.diff("x").lambdify1D();
        // d/dx = (x*cos(x) - sin(x)) / x^2
        assert_abs_diff_eq!(df_fn(x), (x * x.cos() - x.sin()) / (x * x), epsilon = 1e-12);
    }

    #[test]
    fn test_diff_chain_rule() {
        let f = Expr::parse_expression("exp(x^2)").unwrap();
        let df_fn = f.diff("x").lambdify1D();
        // d/dx = 2x * exp(x^2)
        let x = 0.7;
        assert_abs_diff_eq!(df_fn(x), 2.0 * x * (x * x).exp(), epsilon = 1e-12);

        let f = Expr::parse_expression("ln(cos(x))").unwrap();
        let df_fn = f.diff("x").lambdify1D();
        // d/dx = -tan(x)
        assert_abs_diff_eq!(df_fn(x), -x.tan(), epsilon = 1e-12);
    }

    #[test]
    fn test_diff_constant_is_zero() {
        let f = Expr::parse_expression("5").unwrap();
        assert!(f.diff("x").is_zero());
        let f = Expr::Var("y".to_string());
        assert!(f.diff("x").is_zero());
    }

    #[test]
    fn test_all_arguments_are_variables() {
        let f = Expr::parse_expression("x^2 + x - 1").unwrap();
        assert_eq!(f.all_arguments_are_variables(), vec!["x".to_string()]);
        let f = Expr::parse_expression("x + y").unwrap();
        assert_eq!(
            f.all_arguments_are_variables(),
            vec!["x".to_string(), "y".to_string()]
        );
        let f = Expr::parse_expression("3.5").unwrap();
        assert!(f.all_arguments_are_variables().is_empty());
    }

    #[test]
    fn test_inverse_trig_derivatives() {
        let x = 0.4;
        let f = Expr::parse_expression("arcsin(x)").unwrap();
        assert_abs_diff_eq!(
            f.diff("x").lambdify1D()(x),
            1.0 / (1.0 - x * x).sqrt(),
            epsilon = 1e-12
        );
        let f = Expr::parse_expression("arctg(x)").unwrap();
        assert_abs_diff_eq!(
            f.diff("x").lambdify1D()(x),
            1.0 / (1.0 + x * x),
            epsilon = 1e-12
        );
    }
}
