//! Builders that fold terms into an in-progress sum or product.
//!
//! These are the single point in the crate where numeric coefficients are combined. Each builder
//! owns a freshly constructed list of children that no other tree references, so merging a number
//! into an existing child mutates only state exclusively owned by the current call frame; the
//! node escapes through [`From`] once folding is finished.

use super::Expr;
use crate::primitive::int;

/// An in-progress [`Expr::Sum`].
///
/// [`SumBuilder::push`] keeps the terms canonical with respect to numeric constants: pushing
/// another sum folds its elements one by one, any pushed number is added into the number term
/// that was already present when the push started, and the additive identity 0 is never stored.
/// At no point can a second number term appear next to an existing one.
#[derive(Debug, Default)]
pub struct SumBuilder {
    terms: Vec<Expr>,
}

impl SumBuilder {
    /// Creates an empty sum builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a term into the sum.
    pub fn push(&mut self, term: Expr) {
        let slot = self.terms.iter().position(Expr::is_number);
        match term {
            Expr::Sum(elements) => {
                for element in elements {
                    self.push_term(slot, element);
                }
            },
            term => self.push_term(slot, term),
        }
    }

    fn push_term(&mut self, slot: Option<usize>, term: Expr) {
        match (slot, term) {
            (Some(idx), Expr::Number(n)) => {
                if let Expr::Number(acc) = &mut self.terms[idx] {
                    *acc += n;
                } else {
                    unreachable!()
                }
            },
            (None, Expr::Number(n)) => {
                if n.cmp0() != std::cmp::Ordering::Equal {
                    self.terms.push(Expr::Number(n));
                }
            },
            (_, term) => self.terms.push(term),
        }
    }
}

impl From<SumBuilder> for Expr {
    fn from(builder: SumBuilder) -> Self {
        let mut terms = builder.terms;
        match terms.len() {
            0 => Expr::Number(int(0)),
            1 => terms.remove(0),
            _ => Expr::Sum(terms),
        }
    }
}

/// An in-progress [`Expr::Product`]. The multiplicative counterpart of [`SumBuilder`]: pushed
/// numbers multiply into the existing number factor, and the multiplicative identity 1 is never
/// stored.
#[derive(Debug, Default)]
pub struct ProductBuilder {
    factors: Vec<Expr>,
}

impl ProductBuilder {
    /// Creates an empty product builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a factor into the product.
    pub fn push(&mut self, factor: Expr) {
        let slot = self.factors.iter().position(Expr::is_number);
        match factor {
            Expr::Product(elements) => {
                for element in elements {
                    self.push_factor(slot, element);
                }
            },
            factor => self.push_factor(slot, factor),
        }
    }

    fn push_factor(&mut self, slot: Option<usize>, factor: Expr) {
        match (slot, factor) {
            (Some(idx), Expr::Number(n)) => {
                if let Expr::Number(acc) = &mut self.factors[idx] {
                    *acc *= n;
                } else {
                    unreachable!()
                }
            },
            (None, Expr::Number(n)) => {
                if n != 1 {
                    self.factors.push(Expr::Number(n));
                }
            },
            (_, factor) => self.factors.push(factor),
        }
    }
}

impl From<ProductBuilder> for Expr {
    fn from(builder: ProductBuilder) -> Self {
        let mut factors = builder.factors;
        match factors.len() {
            0 => Expr::Number(int(1)),
            1 => factors.remove(0),
            _ => Expr::Product(factors),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn sum_merges_numbers() {
        let mut sum = SumBuilder::new();
        sum.push(Expr::number(2));
        sum.push(Expr::symbol("x"));
        sum.push(Expr::number(3));
        assert_eq!(
            Expr::from(sum),
            Expr::sum(vec![Expr::number(5), Expr::symbol("x")]),
        );
    }

    #[test]
    fn sum_flattens_nested_sums() {
        let mut sum = SumBuilder::new();
        sum.push(Expr::number(1));
        sum.push(Expr::sum(vec![
            Expr::symbol("x"),
            Expr::number(0),
            Expr::number(4),
        ]));
        assert_eq!(
            Expr::from(sum),
            Expr::sum(vec![Expr::number(5), Expr::symbol("x")]),
        );
    }

    #[test]
    fn sum_never_holds_two_numbers() {
        let mut sum = SumBuilder::new();
        sum.push(Expr::number(2));
        sum.push(Expr::number(3));
        sum.push(Expr::number(-5));
        assert_eq!(Expr::from(sum), Expr::number(0));
    }

    #[test]
    fn product_merges_numbers() {
        let mut product = ProductBuilder::new();
        product.push(Expr::number(2));
        product.push(Expr::symbol("x"));
        product.push(Expr::number(3));
        assert_eq!(
            Expr::from(product),
            Expr::product(vec![Expr::number(6), Expr::symbol("x")]),
        );
    }

    #[test]
    fn product_flattens_and_skips_ones() {
        let mut product = ProductBuilder::new();
        product.push(Expr::number(2));
        product.push(Expr::product(vec![
            Expr::number(1),
            Expr::symbol("y"),
            Expr::number(3),
        ]));
        assert_eq!(
            Expr::from(product),
            Expr::product(vec![Expr::number(6), Expr::symbol("y")]),
        );
    }

    #[test]
    fn bare_identities_are_dropped() {
        let mut sum = SumBuilder::new();
        sum.push(Expr::number(0));
        sum.push(Expr::symbol("x"));
        assert_eq!(Expr::from(sum), Expr::symbol("x"));

        let mut product = ProductBuilder::new();
        product.push(Expr::number(1));
        product.push(Expr::symbol("x"));
        assert_eq!(Expr::from(product), Expr::symbol("x"));
    }

    #[test]
    fn empty_builders_downgrade_to_identities() {
        assert_eq!(Expr::from(SumBuilder::new()), Expr::number(0));
        assert_eq!(Expr::from(ProductBuilder::new()), Expr::number(1));
    }

    #[test]
    fn single_element_downgrades_to_element() {
        let mut sum = SumBuilder::new();
        sum.push(Expr::symbol("x"));
        assert_eq!(Expr::from(sum), Expr::symbol("x"));
    }
}
