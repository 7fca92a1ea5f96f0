//! An ordered system of equations.

use crate::equation::Equation;
use crate::error::Error;
use crate::eval::evaluate;
use crate::expr::Expr;
use crate::solve::resolve_symbol;
use std::collections::HashMap;
use std::fmt;

/// An ordered, positionally-indexed sequence of equations.
///
/// The system is constructed once from an initial list. Resolving never changes it; substituting
/// replaces one equation with a freshly built one. Equations are never deleted.
///
/// Indexes out of range panic, as slice indexing does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equations {
    equations: Vec<Equation>,
}

impl Equations {
    /// Creates a system from the given equations.
    pub fn new(equations: Vec<Equation>) -> Self {
        Self { equations }
    }

    /// Returns the number of equations in the system.
    pub fn len(&self) -> usize {
        self.equations.len()
    }

    /// Returns true if the system contains no equations.
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// Returns the equation at the given index, if any.
    pub fn get(&self, index: usize) -> Option<&Equation> {
        self.equations.get(index)
    }

    /// Produces a closed-form expression for `symbol` from the equation at `index`.
    pub fn resolve_from_equation(&self, index: usize, symbol: &str) -> Result<Expr, Error> {
        resolve_symbol(symbol, &self.equations[index])
    }

    /// Substitutes `value` for every occurrence of `symbol` in the equation at `index`, storing
    /// the resulting equation in its place.
    pub fn replace(&mut self, index: usize, symbol: &str, value: Expr) -> Result<(), Error> {
        let bindings = HashMap::from([(symbol.to_string(), value)]);
        let equation = &self.equations[index];
        let left = evaluate(&equation.left, &bindings)?;
        let right = evaluate(&equation.right, &bindings)?;
        self.equations[index] = Equation::new(left, right);
        Ok(())
    }

    /// Writes every rendered equation, in sequence order, to standard output.
    ///
    /// This is a diagnostic aid, not part of the computational contract; use the [`Display`](fmt::Display)
    /// implementation to write to a different sink.
    pub fn display(&self) {
        print!("{}", self);
    }
}

/// Renders every equation in sequence order, one per line.
impl fmt::Display for Equations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for equation in &self.equations {
            writeln!(f, "{}", equation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// The first two equations of the chain this engine was built to solve:
    ///
    /// ```text
    /// 30  = 43*e + -73*f
    /// -24 = 67*f + -43*g
    /// ```
    fn sample() -> Equations {
        let linear = |a: i64, x: &str, b: i64, y: &str| {
            Expr::sum(vec![
                Expr::product(vec![Expr::number(a), Expr::symbol(x)]),
                Expr::product(vec![Expr::number(b), Expr::symbol(y)]),
            ])
        };
        Equations::new(vec![
            Equation::new(Expr::number(30), linear(43, "e", -73, "f")),
            Equation::new(Expr::number(-24), linear(67, "f", -43, "g")),
        ])
    }

    #[test]
    fn resolves_from_an_equation() {
        let equations = sample();
        let f = equations.resolve_from_equation(0, "f").unwrap();
        assert_eq!(f.to_string(), "43/73*e + -30/73");
    }

    #[test]
    fn replace_eliminates_the_symbol() {
        let mut equations = sample();
        let f = equations.resolve_from_equation(0, "f").unwrap();
        equations.replace(1, "f", f).unwrap();

        let replaced = equations.get(1).unwrap();
        assert!(!replaced.contains_symbol("f"));
        assert!(replaced.contains_symbol("e"));
        assert!(replaced.contains_symbol("g"));
        // the untouched equation still mentions f
        assert!(equations.get(0).unwrap().contains_symbol("f"));
    }

    #[test]
    fn replace_stores_a_fresh_equation() {
        let mut equations = sample();
        let before = equations.get(1).unwrap().clone();
        let f = equations.resolve_from_equation(0, "f").unwrap();
        equations.replace(1, "f", f).unwrap();
        assert_ne!(*equations.get(1).unwrap(), before);
        assert_eq!(equations.len(), 2);
    }

    #[test]
    fn fmt_lists_equations_in_order() {
        let rendered = sample().to_string();
        assert_eq!(rendered, "30 = 43*e + -73*f\n-24 = 67*f + -43*g\n");
    }
}
