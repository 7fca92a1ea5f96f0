//! An equality between two expressions.

use crate::expr::Expr;
use std::collections::BTreeSet;
use std::fmt;

/// An equation `left = right`.
///
/// Equations are plain values: substitution produces a fresh [`Equation`] rather than mutating
/// one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    /// The left-hand side.
    pub left: Expr,

    /// The right-hand side.
    pub right: Expr,
}

impl Equation {
    /// Creates an equation from its two sides.
    pub fn new(left: Expr, right: Expr) -> Self {
        Self { left, right }
    }

    /// Returns true if the given symbol occurs on either side.
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.left.contains_symbol(symbol) || self.right.contains_symbol(symbol)
    }

    /// Collects the names of every symbol occurring on either side, deduplicated.
    pub fn symbols(&self) -> BTreeSet<String> {
        let mut symbols = self.left.symbols();
        symbols.extend(self.right.symbols());
        symbols
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn sample() -> Equation {
        // 30 = 43*e + -73*f
        Equation::new(
            Expr::number(30),
            Expr::sum(vec![
                Expr::product(vec![Expr::number(43), Expr::symbol("e")]),
                Expr::product(vec![Expr::number(-73), Expr::symbol("f")]),
            ]),
        )
    }

    #[test]
    fn fmt_equation() {
        assert_eq!(sample().to_string(), "30 = 43*e + -73*f");
    }

    #[test]
    fn symbols_union_both_sides() {
        let eq = Equation::new(
            Expr::sum(vec![Expr::symbol("x"), Expr::symbol("y")]),
            Expr::product(vec![Expr::symbol("y"), Expr::symbol("z")]),
        );
        assert_eq!(
            eq.symbols().into_iter().collect::<Vec<_>>(),
            vec!["x".to_string(), "y".to_string(), "z".to_string()],
        );
    }

    #[test]
    fn contains_symbol_checks_both_sides() {
        let eq = sample();
        assert!(eq.contains_symbol("e"));
        assert!(eq.contains_symbol("f"));
        assert!(!eq.contains_symbol("g"));
    }
}
