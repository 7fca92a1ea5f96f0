//! The rewrite steps reported by the simplifier.

use std::fmt;

/// A single rewrite applied while simplifying an expression.
///
/// Pushed into a [`StepCollector`](crate::step_collector::StepCollector) by
/// [`simplify_with`](crate::simplify::simplify_with); the [`Display`](fmt::Display)
/// implementation gives the human-readable narration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A sum or product with a single element was unwrapped to that element.
    UnwrapSingleton,

    /// An empty sum was replaced with the constant 0.
    EmptySum,

    /// An empty product was replaced with the constant 1.
    EmptyProduct,

    /// A term that simplified to 0 was dropped from a sum.
    AddZero,

    /// Multiple constant factors of a product were collapsed into one.
    CollapseConstants,

    /// A product was distributed over one of its sum factors.
    DistributiveProperty,

    /// A product nested inside a product was flattened into its parent.
    FlattenProduct,

    /// A numeric fraction factor was combined with a constant or another numeric fraction.
    CombineNumericFractions,

    /// A numeric fraction was divided through by its greatest common divisor.
    ReduceFraction,

    /// A fraction was distributed over the terms of its sum numerator.
    DistributeFraction,

    /// The constant factor of a fraction's product numerator was divided separately.
    ExtractConstantFactor,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::UnwrapSingleton => "unwrapping a single-element sum or product",
            Self::EmptySum => "replacing an empty sum with 0",
            Self::EmptyProduct => "replacing an empty product with 1",
            Self::AddZero => "dropping a zero term",
            Self::CollapseConstants => "collapsing the constants in a product",
            Self::DistributiveProperty => "distributing a product over a sum",
            Self::FlattenProduct => "flattening a nested product",
            Self::CombineNumericFractions => "combining numeric fractions in a product",
            Self::ReduceFraction => "reducing a numeric fraction",
            Self::DistributeFraction => "distributing a fraction over its numerator's terms",
            Self::ExtractConstantFactor => "separating the constant factor out of a fraction",
        };
        write!(f, "{}", description)
    }
}
