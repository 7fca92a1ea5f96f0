//! Reduction of [`Expr::Fraction`] nodes.
//!
//! Only the shapes that a linear equation can produce are handled: numeric fractions, sum
//! numerators (the division distributes), and product numerators with a numeric factor (the
//! factor divides separately). Everything else is outside the solver's scope and reduces to an
//! error rather than an approximation.

use crate::error::{CannotSimplify, Error, IndeterminateFraction};
use crate::expr::{Expr, ProductBuilder};
use crate::primitive::int;
use crate::step_collector::StepCollector;
use rug::Integer;
use super::{simplify_with, Step};

/// Simplifies a fraction with the given (unsimplified) numerator and denominator.
pub(super) fn simplify_fraction(
    numerator: &Expr,
    denominator: &Expr,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let top = simplify_with(numerator, steps)?;
    let bottom = simplify_with(denominator, steps)?;

    if let (Expr::Number(t), Expr::Number(b)) = (&top, &bottom) {
        return reduce_numeric(t, b, steps);
    }

    match &top {
        // (a + b)/d = a/d + b/d
        Expr::Sum(terms) => {
            steps.push(Step::DistributeFraction);
            let distributed = terms
                .iter()
                .map(|term| simplify_fraction(term, &bottom, steps))
                .collect::<Result<Vec<_>, _>>()?;
            simplify_with(&Expr::Sum(distributed), steps)
        },

        // (n*a)/d = (n/d)*a, where n is the product's numeric factor
        Expr::Product(factors) => {
            let idx = match factors.iter().position(Expr::is_number) {
                Some(idx) => idx,
                // no constant to separate; the quotient is already as reduced as it gets
                None => return Ok(Expr::fraction(top.clone(), bottom)),
            };

            steps.push(Step::ExtractConstantFactor);
            let constant = simplify_fraction(&factors[idx], &bottom, steps)?;
            let mut product = ProductBuilder::new();
            product.push(constant);
            for (i, factor) in factors.iter().enumerate() {
                if i != idx {
                    product.push(factor.clone());
                }
            }
            simplify_with(&Expr::from(product), steps)
        },

        _ => Err(Error::new(
            Expr::fraction(top.clone(), bottom.clone()).to_string(),
            CannotSimplify,
        )),
    }
}

/// Reduces a fraction of two integers by their greatest common divisor.
///
/// The GCD is non-negative; the signs of the two integers are preserved by the division. A
/// reduced denominator of exactly 1 collapses the fraction to a bare number.
fn reduce_numeric(
    top: &Integer,
    bottom: &Integer,
    steps: &mut dyn StepCollector<Step>,
) -> Result<Expr, Error> {
    let gcd = top.clone().gcd(bottom);
    if gcd.cmp0() == std::cmp::Ordering::Equal {
        return Err(Error::new(format!("{}/{}", top, bottom), IndeterminateFraction));
    }

    let mut reduced_top = int(top / &gcd);
    let mut reduced_bottom = int(bottom / &gcd);
    // keep the sign in the numerator
    let flipped = reduced_bottom < 0;
    if flipped {
        reduced_top = -reduced_top;
        reduced_bottom = -reduced_bottom;
    }

    if reduced_bottom == 1 {
        steps.push(Step::ReduceFraction);
        Ok(Expr::Number(reduced_top))
    } else {
        if gcd != 1 || flipped {
            steps.push(Step::ReduceFraction);
        }
        Ok(Expr::fraction(Expr::Number(reduced_top), Expr::Number(reduced_bottom)))
    }
}

#[cfg(test)]
mod tests {
    use crate::simplify::simplify;
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn reduces_by_gcd() {
        let expr = Expr::fraction(Expr::number(6), Expr::number(4));
        assert_eq!(
            simplify(&expr).unwrap(),
            Expr::fraction(Expr::number(3), Expr::number(2)),
        );
    }

    #[test]
    fn collapses_to_number_when_denominator_divides() {
        let expr = Expr::fraction(Expr::number(6), Expr::number(3));
        assert_eq!(simplify(&expr).unwrap(), Expr::number(2));
    }

    #[test]
    fn sign_moves_to_the_numerator() {
        let expr = Expr::fraction(Expr::number(6), Expr::number(-4));
        assert_eq!(
            simplify(&expr).unwrap(),
            Expr::fraction(Expr::number(-3), Expr::number(2)),
        );
    }

    #[test]
    fn zero_numerator_collapses_to_zero() {
        let expr = Expr::fraction(Expr::number(0), Expr::number(5));
        assert_eq!(simplify(&expr).unwrap(), Expr::number(0));
    }

    #[test]
    fn distributes_over_sum_numerator() {
        // (43*e + -30)/73 = 43/73*e + -30/73
        let expr = Expr::fraction(
            Expr::sum(vec![
                Expr::product(vec![Expr::number(43), Expr::symbol("e")]),
                Expr::number(-30),
            ]),
            Expr::number(73),
        );
        assert_eq!(
            simplify(&expr).unwrap(),
            Expr::sum(vec![
                Expr::product(vec![
                    Expr::fraction(Expr::number(43), Expr::number(73)),
                    Expr::symbol("e"),
                ]),
                Expr::fraction(Expr::number(-30), Expr::number(73)),
            ]),
        );
    }

    #[test]
    fn separates_constant_factor_of_product_numerator() {
        // (6*x)/4 = 3/2*x
        let expr = Expr::fraction(
            Expr::product(vec![Expr::number(6), Expr::symbol("x")]),
            Expr::number(4),
        );
        assert_eq!(
            simplify(&expr).unwrap(),
            Expr::product(vec![
                Expr::fraction(Expr::number(3), Expr::number(2)),
                Expr::symbol("x"),
            ]),
        );
    }

    #[test]
    fn product_numerator_without_constant_is_kept() {
        let expr = Expr::fraction(
            Expr::product(vec![Expr::symbol("x"), Expr::symbol("y")]),
            Expr::number(3),
        );
        assert_eq!(simplify(&expr).unwrap(), expr);
    }

    #[test]
    fn symbolic_denominator_is_an_error() {
        let expr = Expr::fraction(Expr::number(1), Expr::symbol("d"));
        let err = simplify(&expr).unwrap_err();
        assert!(err.kind.message().contains("cannot simplify"));
        assert_eq!(err.expr, "1/d");
    }

    #[test]
    fn zero_over_zero_is_an_error() {
        let expr = Expr::fraction(Expr::number(0), Expr::number(0));
        let err = simplify(&expr).unwrap_err();
        assert!(err.kind.message().contains("indeterminate"));
    }
}
