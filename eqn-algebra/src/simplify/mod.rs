//! Reduction of expressions to canonical form.
//!
//! The canonical form produced by [`simplify`] has no empty or single-element sums and products,
//! no same-kind nesting, at most one constant per sum or product, products distributed over sums,
//! and numeric fractions reduced by their greatest common divisor. Simplification is idempotent:
//! simplifying a canonical expression returns it unchanged.
//!
//! Simplification is a pure function of its input. The only knob is diagnostic verbosity, which
//! is injected rather than ambient: [`simplify_with`] reports every rewrite it applies to a
//! [`StepCollector`], [`simplify_with_steps`] gathers the rewrites into a vector, and
//! [`simplify`] discards them.
//!
//! The simplifier is scoped to the shapes a linear equation can produce. Fractions with symbolic
//! denominators (or other shapes outside that scope) are a hard error, not an approximation; see
//! [`crate::error`].

mod fraction;
mod step;

pub use step::Step;

use crate::error::Error;
use crate::expr::{Expr, ProductBuilder, SumBuilder};
use crate::primitive::int;
use crate::step_collector::StepCollector;

/// Simplifies an expression into canonical form, discarding the steps taken.
pub fn simplify(expr: &Expr) -> Result<Expr, Error> {
    simplify_with(expr, &mut ())
}

/// Simplifies an expression into canonical form, returning the steps taken along the way.
pub fn simplify_with_steps(expr: &Expr) -> Result<(Expr, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let result = simplify_with(expr, &mut steps)?;
    Ok((result, steps))
}

/// Simplifies an expression into canonical form, reporting each rewrite to the given collector.
pub fn simplify_with(expr: &Expr, steps: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    match expr {
        Expr::Number(_) | Expr::Symbol(_) => Ok(expr.clone()),
        Expr::Sum(terms) => simplify_sum(terms, steps),
        Expr::Product(factors) => simplify_product(factors, steps),
        Expr::Fraction(top, bottom) => fraction::simplify_fraction(top, bottom, steps),
    }
}

fn simplify_sum(terms: &[Expr], steps: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    if terms.is_empty() {
        steps.push(Step::EmptySum);
        return Ok(Expr::Number(int(0)));
    }
    if terms.len() == 1 {
        steps.push(Step::UnwrapSingleton);
        return simplify_with(&terms[0], steps);
    }

    let mut sum = SumBuilder::new();
    for term in terms {
        let term = simplify_with(term, steps)?;
        if term.is_zero() {
            steps.push(Step::AddZero);
            continue;
        }
        sum.push(term);
    }
    Ok(Expr::from(sum))
}

fn simplify_product(factors: &[Expr], steps: &mut dyn StepCollector<Step>) -> Result<Expr, Error> {
    if factors.is_empty() {
        steps.push(Step::EmptyProduct);
        return Ok(Expr::Number(int(1)));
    }
    if factors.len() == 1 {
        steps.push(Step::UnwrapSingleton);
        return simplify_with(&factors[0], steps);
    }

    // collapse multiple constant factors into one
    if factors.iter().filter(|f| f.is_number()).count() > 1 {
        steps.push(Step::CollapseConstants);
        let mut constant = int(1);
        let mut collapsed = Vec::with_capacity(factors.len());
        for factor in factors {
            match factor {
                Expr::Number(n) => constant *= n,
                other => collapsed.push(other.clone()),
            }
        }
        collapsed.insert(0, Expr::Number(constant));
        return simplify_with(&Expr::Product(collapsed), steps);
    }

    // distribute the remaining factors over the first sum factor; repeated application works
    // through multiple sum factors one at a time
    if let Some(idx) = factors.iter().position(|f| matches!(f, Expr::Sum(_))) {
        steps.push(Step::DistributiveProperty);
        let sum_factor = simplify_with(&factors[idx], steps)?;
        if sum_factor.is_zero() {
            return Ok(Expr::Number(int(0)));
        }

        let others = factors
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, f)| f.clone())
            .collect::<Vec<_>>();
        let terms = match sum_factor {
            Expr::Sum(terms) => terms,
            other => vec![other],
        };

        let mut sum = SumBuilder::new();
        for term in terms {
            if term.is_zero() {
                continue;
            }
            let mut product = ProductBuilder::new();
            for factor in &others {
                product.push(factor.clone());
            }
            product.push(term);
            sum.push(Expr::from(product));
        }
        return simplify_with(&Expr::from(sum), steps);
    }

    // flatten nested products
    if factors.iter().any(|f| matches!(f, Expr::Product(_))) {
        steps.push(Step::FlattenProduct);
        let mut product = ProductBuilder::new();
        for factor in factors {
            match factor {
                Expr::Product(_) => product.push(simplify_with(factor, steps)?),
                other => product.push(other.clone()),
            }
        }
        return simplify_with(&Expr::from(product), steps);
    }

    // fold the constant factor (or another numeric fraction) into a numeric fraction factor, so
    // that products like 73 * 43/73 reduce all the way down to a constant
    if let Some((combined, rest)) = combine_numeric_fractions(factors) {
        steps.push(Step::CombineNumericFractions);
        let combined = simplify_with(&combined, steps)?;
        if combined.is_zero() {
            return Ok(Expr::Number(int(0)));
        }

        let mut product = ProductBuilder::new();
        if !combined.is_one() {
            product.push(combined);
        }
        for factor in rest {
            product.push(factor);
        }
        return simplify_with(&Expr::from(product), steps);
    }

    Ok(Expr::Product(factors.to_vec()))
}

/// Finds a numeric fraction factor and a partner (a constant, or a second numeric fraction) and
/// multiplies them into a single unreduced fraction. Returns the fraction and the remaining
/// factors, or `None` if no such pair exists.
fn combine_numeric_fractions(factors: &[Expr]) -> Option<(Expr, Vec<Expr>)> {
    let fraction_idx = factors.iter().position(Expr::is_numeric_fraction)?;
    let partner_idx = factors
        .iter()
        .enumerate()
        .position(|(i, f)| i != fraction_idx && (f.is_number() || f.is_numeric_fraction()))?;

    let (top, bottom) = match &factors[fraction_idx] {
        Expr::Fraction(top, bottom) => match (&**top, &**bottom) {
            (Expr::Number(t), Expr::Number(b)) => (t, b),
            _ => unreachable!(),
        },
        _ => unreachable!(),
    };

    let combined = match &factors[partner_idx] {
        Expr::Number(n) => Expr::fraction(
            Expr::Number(int(top * n)),
            Expr::Number(bottom.clone()),
        ),
        Expr::Fraction(partner_top, partner_bottom) => {
            match (&**partner_top, &**partner_bottom) {
                (Expr::Number(t), Expr::Number(b)) => Expr::fraction(
                    Expr::Number(int(top * t)),
                    Expr::Number(int(bottom * b)),
                ),
                _ => unreachable!(),
            }
        },
        _ => unreachable!(),
    };

    let rest = factors
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != fraction_idx && *i != partner_idx)
        .map(|(_, f)| f.clone())
        .collect();
    Some((combined, rest))
}
