//! Isolation of a symbol in a linear equation.
//!
//! [`resolve_symbol`] rearranges an equation that is linear in the target symbol (degree exactly
//! 1, never inside a denominator) into a closed-form expression for that symbol. The algorithm
//! mirrors what is done by hand:
//!
//! 1. restructure both sides so the symbol sits at the top level (symbol-bearing terms first
//!    within sums, symbol factors last within products);
//! 2. split each side into the part that contains the symbol and the part that does not;
//! 3. collect every symbol-bearing part on the left and everything else on the right, i.e.
//!    rewrite `A(x) + B = C + D(x)` as `A(x) - D(x) = C - B`, and simplify;
//! 4. factor the symbol out of the left side to obtain its coefficient;
//! 5. divide: the result is `simplify(right / coefficient)`.
//!
//! Every way the equation can fail to be linear in the symbol is a hard error; see
//! [`crate::error`]. These signal a modeling error by the caller and are never recovered from.

use crate::equation::Equation;
use crate::error::{CannotExtract, CannotRearrange, Error, MissingSymbol, NonLinear};
use crate::expr::{Expr, SumBuilder};
use crate::simplify::simplify;
use crate::step_collector::StepCollector;
use std::fmt;

/// A stage of the solver, with the intermediate equation it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveStep {
    /// The symbol was moved to the top level of both sides.
    MoveToTop {
        /// The symbol being isolated.
        symbol: String,
        /// The restructured equation.
        equation: Equation,
    },

    /// Every symbol-bearing term was collected on the left side, everything else on the right.
    Rearrange {
        /// The symbol being isolated.
        symbol: String,
        /// The rearranged equation.
        equation: Equation,
    },
}

impl fmt::Display for SolveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MoveToTop { symbol, equation } => {
                write!(f, "moved `{}` to the top level of both sides: {}", symbol, equation)
            },
            Self::Rearrange { symbol, equation } => {
                write!(f, "collected every `{}` term on the left side: {}", symbol, equation)
            },
        }
    }
}

/// Produces a closed-form expression for `symbol`, assuming `equation` is linear in it.
pub fn resolve_symbol(symbol: &str, equation: &Equation) -> Result<Expr, Error> {
    resolve_symbol_with(symbol, equation, &mut ())
}

/// Produces a closed-form expression for `symbol`, reporting each stage of the rearrangement to
/// the given collector.
pub fn resolve_symbol_with(
    symbol: &str,
    equation: &Equation,
    steps: &mut dyn StepCollector<SolveStep>,
) -> Result<Expr, Error> {
    if !equation.contains_symbol(symbol) {
        return Err(Error::new(
            equation.to_string(),
            MissingSymbol {
                symbol: symbol.to_string(),
                available: equation.symbols().into_iter().collect(),
            },
        ));
    }

    let left = move_symbol_to_top(symbol, &equation.left)?;
    let right = move_symbol_to_top(symbol, &equation.right)?;
    steps.push(SolveStep::MoveToTop {
        symbol: symbol.to_string(),
        equation: Equation::new(left.clone(), right.clone()),
    });

    let (left_has, left_not) = split_by_symbol(symbol, &left);
    let (right_has, right_not) = split_by_symbol(symbol, &right);

    // A(x) + B = C + D(x)  ->  A(x) - D(x) = C - B
    let collected_left = simplify(&Expr::Sum(vec![left_has, -right_has]))?;
    let collected_right = simplify(&Expr::Sum(vec![right_not, -left_not]))?;
    steps.push(SolveStep::Rearrange {
        symbol: symbol.to_string(),
        equation: Equation::new(collected_left.clone(), collected_right.clone()),
    });

    let coefficient = extract_coefficient(symbol, &collected_left)?;
    simplify(&Expr::fraction(collected_right, coefficient))
}

/// Restructures an expression so that the symbol sits at the top level: within sums,
/// symbol-bearing terms sort first (stable otherwise); within a parenthesis-free product, bare
/// symbol factors move to the last position. An expression without the symbol is returned
/// unchanged.
fn move_symbol_to_top(symbol: &str, expr: &Expr) -> Result<Expr, Error> {
    if !expr.contains_symbol(symbol) {
        return Ok(expr.clone());
    }

    match expr {
        Expr::Symbol(_) => Ok(expr.clone()),
        Expr::Sum(terms) => {
            let mut flattened = Vec::new();
            for term in terms {
                match move_symbol_to_top(symbol, term)? {
                    Expr::Sum(inner) => flattened.extend(inner),
                    other => flattened.push(other),
                }
            }
            flattened.sort_by_key(|term| !term.contains_symbol(symbol));
            Ok(Expr::Sum(flattened))
        },
        Expr::Product(factors) if !expr.has_grouped_sum() => {
            let (symbol_factors, mut reordered): (Vec<Expr>, Vec<Expr>) = factors
                .iter()
                .cloned()
                .partition(|factor| factor.as_symbol() == Some(symbol));
            reordered.extend(symbol_factors);
            Ok(Expr::Product(reordered))
        },
        _ => Err(Error::new(
            expr.to_string(),
            CannotRearrange { symbol: symbol.to_string() },
        )),
    }
}

/// Partitions an expression into the part that contains the symbol and the part that does not.
///
/// Sums distribute their terms between two accumulators; every other node is leaf-like and goes
/// wholly to one side, with an empty sum standing in for the other.
fn split_by_symbol(symbol: &str, expr: &Expr) -> (Expr, Expr) {
    match expr {
        Expr::Sum(terms) => {
            let mut has = SumBuilder::new();
            let mut has_not = SumBuilder::new();
            for term in terms {
                if term.contains_symbol(symbol) {
                    has.push(term.clone());
                } else {
                    has_not.push(term.clone());
                }
            }
            (Expr::from(has), Expr::from(has_not))
        },
        expr if expr.contains_symbol(symbol) => (expr.clone(), Expr::Sum(Vec::new())),
        expr => (Expr::Sum(Vec::new()), expr.clone()),
    }
}

/// Factors the symbol out of the collected left side, returning its coefficient.
///
/// The bare symbol yields the empty product (a coefficient of 1). A product must contain the
/// symbol in exactly one factor; the remaining factors form the coefficient. A sum is only
/// extractable when every addend bears the symbol and there is exactly one addend.
fn extract_coefficient(symbol: &str, expr: &Expr) -> Result<Expr, Error> {
    if !expr.contains_symbol(symbol) {
        return Err(Error::new(
            expr.to_string(),
            MissingSymbol {
                symbol: symbol.to_string(),
                available: expr.symbols().into_iter().collect(),
            },
        ));
    }

    match expr {
        Expr::Symbol(_) => Ok(Expr::Product(Vec::new())),
        Expr::Product(factors) => {
            let (with_symbol, without_symbol): (Vec<Expr>, Vec<Expr>) = factors
                .iter()
                .cloned()
                .partition(|factor| factor.contains_symbol(symbol));

            if with_symbol.len() == 1 {
                Ok(Expr::Product(without_symbol))
            } else {
                Err(Error::new(
                    expr.to_string(),
                    NonLinear { symbol: symbol.to_string() },
                ))
            }
        },
        Expr::Sum(terms) => {
            let (with_symbol, without_symbol): (Vec<Expr>, Vec<Expr>) = terms
                .iter()
                .cloned()
                .partition(|term| term.contains_symbol(symbol));

            if !without_symbol.is_empty() || with_symbol.len() != 1 {
                return Err(Error::new(
                    expr.to_string(),
                    CannotExtract { symbol: symbol.to_string() },
                ));
            }
            extract_coefficient(symbol, &with_symbol[0])
        },
        _ => Err(Error::new(
            expr.to_string(),
            CannotExtract { symbol: symbol.to_string() },
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::eval::evaluate;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use super::*;

    /// `30 = 43*e + -73*f`
    fn sample() -> Equation {
        Equation::new(
            Expr::number(30),
            Expr::sum(vec![
                Expr::product(vec![Expr::number(43), Expr::symbol("e")]),
                Expr::product(vec![Expr::number(-73), Expr::symbol("f")]),
            ]),
        )
    }

    #[test]
    fn resolves_symbol_with_coefficient() {
        let f = resolve_symbol("f", &sample()).unwrap();
        assert_eq!(f.to_string(), "43/73*e + -30/73");
    }

    #[test]
    fn resolves_symbol_on_the_left() {
        // 43*e + -73*f = 30, solved for e: e = 30/43 + 73/43*f
        let eq = Equation::new(sample().right, sample().left);
        let e = resolve_symbol("e", &eq).unwrap();
        assert_eq!(e.to_string(), "30/43 + 73/43*f");
    }

    #[test]
    fn resolves_symbol_with_unit_coefficient() {
        // 30 = x + 12, solved for x: x = 18
        let eq = Equation::new(
            Expr::number(30),
            Expr::sum(vec![Expr::symbol("x"), Expr::number(12)]),
        );
        assert_eq!(resolve_symbol("x", &eq).unwrap(), Expr::number(18));
    }

    #[test]
    fn substituting_the_resolution_back_zeroes_the_equation() {
        let eq = sample();
        let f = resolve_symbol("f", &eq).unwrap();

        for e in [1i64, 2, 5, 73, -40] {
            // pin e, then substitute both into the original equation
            let f_value =
                evaluate(&f, &HashMap::from([("e".to_string(), Expr::number(e))])).unwrap();
            let bindings = HashMap::from([
                ("e".to_string(), Expr::number(e)),
                ("f".to_string(), f_value),
            ]);
            let left = evaluate(&eq.left, &bindings).unwrap();
            let right = evaluate(&eq.right, &bindings).unwrap();

            let difference = simplify(&Expr::Sum(vec![left, -right])).unwrap();
            assert_eq!(difference, Expr::number(0), "left - right != 0 for e = {}", e);
        }
    }

    #[test]
    fn narrates_the_rearrangement() {
        let mut steps = Vec::new();
        resolve_symbol_with("f", &sample(), &mut steps).unwrap();

        assert_eq!(steps.len(), 2);
        assert_eq!(
            steps[0].to_string(),
            "moved `f` to the top level of both sides: 30 = -73*f + 43*e",
        );
        assert_eq!(
            steps[1].to_string(),
            "collected every `f` term on the left side: 73*f = 43*e + -30",
        );
    }

    #[test]
    fn missing_symbol_is_an_error() {
        let err = resolve_symbol("z", &sample()).unwrap_err();
        assert_eq!(err.kind.message(), "there is no symbol `z` in this equation");
        assert_eq!(err.expr, "30 = 43*e + -73*f");
    }

    #[test]
    fn nonlinear_symbol_is_an_error() {
        // x*x = 4 is quadratic in x
        let eq = Equation::new(
            Expr::product(vec![Expr::symbol("x"), Expr::symbol("x")]),
            Expr::number(4),
        );
        let err = resolve_symbol("x", &eq).unwrap_err();
        assert_eq!(err.kind.message(), "the equation is not linear in `x`");
    }

    #[test]
    fn grouped_sum_product_is_an_error() {
        // y*(x + 1) = 4 cannot be restructured by the solver
        let eq = Equation::new(
            Expr::product(vec![
                Expr::symbol("y"),
                Expr::sum(vec![Expr::symbol("x"), Expr::number(1)]),
            ]),
            Expr::number(4),
        );
        let err = resolve_symbol("x", &eq).unwrap_err();
        assert_eq!(
            err.kind.message(),
            "cannot move `x` to the top level of this expression",
        );
        assert_eq!(err.expr, "y*x + 1");
    }

    #[test]
    fn mixed_addend_extraction_is_an_error() {
        // 2*x + 3*x is linear but the accumulator keeps the terms apart, so the
        // coefficient cannot be extracted
        let eq = Equation::new(
            Expr::sum(vec![
                Expr::product(vec![Expr::number(2), Expr::symbol("x")]),
                Expr::product(vec![Expr::number(3), Expr::symbol("x")]),
            ]),
            Expr::number(10),
        );
        let err = resolve_symbol("x", &eq).unwrap_err();
        assert!(err.kind.message().contains("cannot extract"));
    }
}
