//! A tree representation of arithmetic expressions that is easy to manipulate algebraically.
//!
//! Expressions are built programmatically (there is no parser) out of five node kinds: integer
//! constants, named symbols, variadic sums, variadic products, and exact fractions. Sums and
//! products store *flattened* lists of children: the expression `x + (y + z)` is intended to be a
//! single [`Expr::Sum`] with three children, and the simplifier restores this shape whenever an
//! operation nests same-kind nodes.
//!
//! # Strict equality
//!
//! Deciding whether two expressions are *mathematically* equal is hard in general: `2x + 6` and
//! `2(x + 3)` are the same value but different trees, and telling them apart requires the very
//! simplification machinery that wants to use equality as a building block.
//!
//! The [`PartialEq`] implementation for [`Expr`] therefore implements a cheap subset called
//! **strict equality**: two expressions are strictly equal if they are the same kind of node, with
//! strictly equal values, and (for sums and products) strictly equal children *in any order*.
//! Strict equality never reports a false positive, does not depend on simplification, and is what
//! every test in this crate compares with; canonicalize with [`simplify`](crate::simplify) first
//! when semantic comparison is needed.
//!
//! # Rendering
//!
//! [`Expr`] implements [`Display`](std::fmt::Display) with minimal parenthesization: sums
//! parenthesize any child whose own rendering contains a space, products never parenthesize at
//! their own level, and fractions parenthesize either part when it would otherwise read
//! ambiguously. The output is meant for diagnostics, not for re-parsing.

mod builder;
mod visit;

pub use builder::{ProductBuilder, SumBuilder};
pub use visit::{traverse, Order, Visitor};

use crate::primitive::int;
use rug::Integer;
use std::fmt;
use std::ops::Neg;

/// An arithmetic expression tree.
///
/// `Sum` and `Product` are variadic: an empty `Sum` denotes the additive identity 0, and an empty
/// `Product` denotes the multiplicative identity 1. A `Fraction` is exact division and is not
/// reduced on construction; reduction is the simplifier's job.
#[derive(Debug, Clone, Eq)]
pub enum Expr {
    /// A literal integer constant, such as `2` or `-73`.
    Number(Integer),

    /// A named unknown, such as `x`. Identity is by name equality.
    Symbol(String),

    /// Multiple terms added together.
    Sum(Vec<Expr>),

    /// Multiple factors multiplied together.
    Product(Vec<Expr>),

    /// An exact quotient of two expressions.
    Fraction(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Creates a [`Expr::Number`] with the given value.
    pub fn number(n: impl Into<Integer>) -> Self {
        Self::Number(n.into())
    }

    /// Creates a [`Expr::Symbol`] with the given name.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Creates a [`Expr::Sum`] of the given terms.
    pub fn sum(terms: Vec<Expr>) -> Self {
        Self::Sum(terms)
    }

    /// Creates a [`Expr::Product`] of the given factors.
    pub fn product(factors: Vec<Expr>) -> Self {
        Self::Product(factors)
    }

    /// Creates a [`Expr::Fraction`] with the given numerator and denominator.
    pub fn fraction(numerator: Expr, denominator: Expr) -> Self {
        Self::Fraction(Box::new(numerator), Box::new(denominator))
    }

    /// If the expression is a [`Expr::Number`], returns a reference to the contained integer.
    pub fn as_number(&self) -> Option<&Integer> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns true if the expression is a [`Expr::Number`].
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// Returns true if the expression is the literal constant 0.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Number(n) if n.cmp0() == std::cmp::Ordering::Equal)
    }

    /// Returns true if the expression is the literal constant 1.
    pub fn is_one(&self) -> bool {
        matches!(self, Self::Number(n) if *n == 1)
    }

    /// If the expression is a [`Expr::Symbol`], returns the contained name.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is a numeric fraction, i.e. a [`Expr::Fraction`] whose
    /// numerator and denominator are both [`Expr::Number`]s.
    pub fn is_numeric_fraction(&self) -> bool {
        matches!(self, Self::Fraction(top, bottom) if top.is_number() && bottom.is_number())
    }

    /// Returns true if the expression contains a sum grouped inside a product, which renders with
    /// parentheses.
    ///
    /// The solver refuses to isolate a symbol out of such a product, and the renderer uses this to
    /// decide whether a fraction's denominator needs its own parentheses.
    pub fn has_grouped_sum(&self) -> bool {
        match self {
            Self::Product(factors) => {
                factors.iter().any(|f| matches!(f, Self::Sum(_)) || f.has_grouped_sum())
            },
            Self::Fraction(top, bottom) => top.has_grouped_sum() || bottom.has_grouped_sum(),
            _ => false,
        }
    }
}

/// Checks if two expressions are **strictly** equal.
///
/// For more information about strict equality, see the [module-level documentation](self).
impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::Symbol(lhs), Self::Symbol(rhs)) => lhs == rhs,
            (Self::Sum(lhs), Self::Sum(rhs)) | (Self::Product(lhs), Self::Product(rhs)) => {
                lhs.len() == rhs.len()
                    && lhs.iter().all(|lhs| rhs.contains(lhs))
            },
            (Self::Fraction(lhs_top, lhs_bottom), Self::Fraction(rhs_top, rhs_bottom)) => {
                lhs_top == rhs_top && lhs_bottom == rhs_bottom
            },
            _ => false,
        }
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a [`Expr::Number`], in which case the number is negated directly.
impl Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Number(n) => Self::Number(-n),
            expr => Self::Product(vec![Self::Number(int(-1)), expr]),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Symbol(name) => write!(f, "{}", name),
            Self::Sum(terms) => {
                let mut iter = terms.iter();
                if let Some(term) = iter.next() {
                    write_sum_term(f, term)?;
                    for term in iter {
                        write!(f, " + ")?;
                        write_sum_term(f, term)?;
                    }
                }
                Ok(())
            },
            Self::Product(factors) => {
                let mut iter = factors.iter();
                if let Some(factor) = iter.next() {
                    write!(f, "{}", factor)?;
                    for factor in iter {
                        write!(f, "*{}", factor)?;
                    }
                }
                Ok(())
            },
            Self::Fraction(top, bottom) => {
                let rendered = top.to_string();
                if rendered.contains(' ') || rendered.contains('+') {
                    write!(f, "({})", rendered)?;
                } else {
                    write!(f, "{}", rendered)?;
                }

                write!(f, "/")?;

                let rendered = bottom.to_string();
                if bottom.has_grouped_sum() || rendered.contains('+') || rendered.contains('*') {
                    write!(f, "({})", rendered)
                } else {
                    write!(f, "{}", rendered)
                }
            },
        }
    }
}

/// Writes one term of a sum, parenthesizing it if its rendering contains a space.
fn write_sum_term(f: &mut fmt::Formatter<'_>, term: &Expr) -> fmt::Result {
    let rendered = term.to_string();
    if rendered.contains(' ') {
        write!(f, "({})", rendered)
    } else {
        write!(f, "{}", rendered)
    }
}
