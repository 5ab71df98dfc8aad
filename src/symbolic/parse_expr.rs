//! a module turns a String expression into a symbolic expression
//!
//! Tokenizer plus recursive descent with the usual precedence ladder:
//! addition < multiplication < unary minus < power < atoms. Power is
//! right-associative; `**` is accepted as a synonym for `^` so that
//! Python-style input like `x**2 - 4` parses unchanged. Unary minus is
//! rewritten as `(-1.0) * e`.
//!
//! # Example
//! ```rust, ignore
//! use RustedNewton::symbolic::symbolic_engine::Expr;
//! let parsed_expression = Expr::parse_expression("x^2.3 * ln(x + 1)")?;
//! println!("parsed_expression {}", parsed_expression);
//! ```

use crate::symbolic::symbolic_engine::Expr;
use std::f64::consts::{E, PI};

#[derive(Clone, Debug, PartialEq)]
enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                i += 1;
            }
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                // '**' is the Python power operator
                if i + 1 < chars.len() && chars[i + 1] == '*' {
                    tokens.push(Token::Caret);
                    i += 2;
                } else {
                    tokens.push(Token::Star);
                    i += 1;
                }
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                // scientific notation: 1e-6, 2.5E+3
                if i < chars.len()
                    && (chars[i] == 'e' || chars[i] == 'E')
                    && i + 1 < chars.len()
                    && (chars[i + 1].is_ascii_digit()
                        || ((chars[i + 1] == '+' || chars[i + 1] == '-')
                            && i + 2 < chars.len()
                            && chars[i + 2].is_ascii_digit()))
                {
                    i += 2;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
                let text: String = chars[start..i].iter().collect();
                let num = text
                    .parse::<f64>()
                    .map_err(|_| format!("invalid number literal '{}'", text))?;
                tokens.push(Token::Num(num));
            }
            _ if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            _ => return Err(format!("unexpected character '{}' in expression", c)),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, token: Token) -> Result<(), String> {
        match self.next() {
            Some(ref t) if *t == token => Ok(()),
            Some(t) => Err(format!("expected {:?}, found {:?}", token, t)),
            None => Err(format!("expected {:?}, found end of input", token)),
        }
    }

    // expr := term (('+'|'-') term)*
    fn parse_expr(&mut self) -> Result<Expr, String> {
        let mut lhs = self.parse_term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.next();
                    let rhs = self.parse_term()?;
                    lhs = Expr::Add(lhs.boxed(), rhs.boxed());
                }
                Some(Token::Minus) => {
                    self.next();
                    let rhs = self.parse_term()?;
                    lhs = Expr::Sub(lhs.boxed(), rhs.boxed());
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    // term := unary (('*'|'/') unary)*
    fn parse_term(&mut self) -> Result<Expr, String> {
        let mut lhs = self.parse_unary()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.next();
                    let rhs = self.parse_unary()?;
                    lhs = Expr::Mul(lhs.boxed(), rhs.boxed());
                }
                Some(Token::Slash) => {
                    self.next();
                    let rhs = self.parse_unary()?;
                    lhs = Expr::Div(lhs.boxed(), rhs.boxed());
                }
                _ => break,
            }
        }
        Ok(lhs)
    }

    // unary := '-' unary | power
    // -x^2 parses as -(x^2)
    fn parse_unary(&mut self) -> Result<Expr, String> {
        if let Some(Token::Minus) = self.peek() {
            self.next();
            let inner = self.parse_unary()?;
            return Ok(Expr::Mul(Expr::Const(-1.0).boxed(), inner.boxed()));
        }
        self.parse_power()
    }

    // power := atom ('^' unary)?   right-associative, exponent may be negative
    fn parse_power(&mut self) -> Result<Expr, String> {
        let base = self.parse_atom()?;
        if let Some(Token::Caret) = self.peek() {
            self.next();
            let exp = self.parse_unary()?;
            return Ok(Expr::Pow(base.boxed(), exp.boxed()));
        }
        Ok(base)
    }

    // atom := number | ident | ident '(' expr ')' | '(' expr ')'
    fn parse_atom(&mut self) -> Result<Expr, String> {
        match self.next() {
            Some(Token::Num(val)) => Ok(Expr::Const(val)),
            Some(Token::LParen) => {
                let inner = self.parse_expr()?;
                self.expect(Token::RParen)?;
                Ok(inner)
            }
            Some(Token::Ident(name)) => {
                if let Some(Token::LParen) = self.peek() {
                    self.next();
                    let arg = self.parse_expr()?;
                    self.expect(Token::RParen)?;
                    function_call(&name, arg)
                } else {
                    Ok(named_atom(&name))
                }
            }
            Some(t) => Err(format!("unexpected token {:?}", t)),
            None => Err("unexpected end of expression".to_string()),
        }
    }
}

/// Known function names, including the aliases used by common computer algebra
/// systems: log/ln, tan/tg, atan/arctg and so on. sqrt(e) is rewritten as
/// e^0.5 since the expression tree has no dedicated square root node.
fn function_call(name: &str, arg: Expr) -> Result<Expr, String> {
    let expr = match name {
        "exp" => Expr::Exp(arg.boxed()),
        "ln" | "log" => Expr::Ln(arg.boxed()),
        "sqrt" => Expr::Pow(arg.boxed(), Expr::Const(0.5).boxed()),
        "sin" => Expr::sin(arg.boxed()),
        "cos" => Expr::cos(arg.boxed()),
        "tg" | "tan" => Expr::tg(arg.boxed()),
        "ctg" | "cot" => Expr::ctg(arg.boxed()),
        "arcsin" | "asin" => Expr::arcsin(arg.boxed()),
        "arccos" | "acos" => Expr::arccos(arg.boxed()),
        "arctg" | "arctan" | "atan" => Expr::arctg(arg.boxed()),
        "arcctg" | "arccot" | "acot" => Expr::arcctg(arg.boxed()),
        _ => return Err(format!("unknown function '{}'", name)),
    };
    Ok(expr)
}

/// A bare identifier is either a named constant or a variable.
fn named_atom(name: &str) -> Expr {
    match name {
        "pi" | "PI" => Expr::Const(PI),
        "e" | "E" => Expr::Const(E),
        _ => Expr::Var(name.to_string()),
    }
}

/// Parses an infix expression string into a symbolic expression tree.
///
/// Returns a descriptive error for malformed input: unknown characters,
/// unbalanced parentheses, dangling operators, unknown function names or
/// trailing garbage. Never panics on user input.
pub fn parse_expression_str(input: &str) -> Result<Expr, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("empty expression".to_string());
    }
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr()?;
    if let Some(t) = parser.peek() {
        return Err(format!("unexpected trailing token {:?}", t));
    }
    Ok(expr)
}
