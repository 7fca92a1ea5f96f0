//! Substitution of symbols by expressions.

use crate::error::Error;
use crate::expr::{Expr, ProductBuilder, SumBuilder};
use crate::primitive::int;
use crate::simplify::simplify;
use std::collections::HashMap;

/// Replaces every bound symbol in the expression by a clone of its binding, rebuilding and
/// re-simplifying the surrounding sums, products, and fractions bottom-up.
///
/// Unbound symbols pass through unchanged. Substitution is a single pass: symbols occurring
/// inside a binding's value are not themselves replaced.
pub fn evaluate(expr: &Expr, bindings: &HashMap<String, Expr>) -> Result<Expr, Error> {
    match expr {
        Expr::Number(_) => Ok(expr.clone()),
        Expr::Symbol(name) => {
            Ok(bindings.get(name).cloned().unwrap_or_else(|| expr.clone()))
        },
        Expr::Sum(terms) => {
            if terms.is_empty() {
                return Ok(Expr::Number(int(0)));
            }
            let mut sum = SumBuilder::new();
            for term in terms {
                sum.push(evaluate(term, bindings)?);
            }
            simplify(&Expr::from(sum))
        },
        Expr::Product(factors) => {
            if factors.is_empty() {
                return Ok(Expr::Number(int(1)));
            }
            let mut product = ProductBuilder::new();
            for factor in factors {
                product.push(evaluate(factor, bindings)?);
            }
            simplify(&Expr::from(product))
        },
        Expr::Fraction(numerator, denominator) => simplify(&Expr::fraction(
            evaluate(numerator, bindings)?,
            evaluate(denominator, bindings)?,
        )),
    }
}
