//! Error kinds produced by the simplifier, the solver, and the evaluator.
//!
//! Every kind is fatal: it reports that the input does not satisfy the linear-equation
//! precondition, not a transient condition, so nothing here is ever retried.

use eqn_error::ErrorKind;
use levenshtein::levenshtein;

pub use eqn_error::Error;

/// The simplifier encountered a fraction shape it does not know how to reduce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannotSimplify;

impl ErrorKind for CannotSimplify {
    fn message(&self) -> String {
        "cannot simplify this expression".to_string()
    }

    fn label(&self) -> String {
        "this fraction cannot be reduced".to_string()
    }

    fn help(&self) -> Option<String> {
        Some(
            "division is only supported for numeric fractions, sums, \
             and products with a numeric factor"
                .to_string(),
        )
    }
}

/// The simplifier was asked to reduce `0/0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndeterminateFraction;

impl ErrorKind for IndeterminateFraction {
    fn message(&self) -> String {
        "cannot reduce the indeterminate fraction `0/0`".to_string()
    }

    fn label(&self) -> String {
        "both parts of this fraction are zero".to_string()
    }
}

/// The solver could not move the target symbol to the top level of an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannotRearrange {
    /// The symbol being isolated.
    pub symbol: String,
}

impl ErrorKind for CannotRearrange {
    fn message(&self) -> String {
        format!("cannot move `{}` to the top level of this expression", self.symbol)
    }

    fn label(&self) -> String {
        format!("`{}` is nested inside a grouped sum here", self.symbol)
    }

    fn help(&self) -> Option<String> {
        Some(format!(
            "the equation must be linear in `{}`; products containing \
             a parenthesized sum are not supported",
            self.symbol
        ))
    }
}

/// The equation is not linear in the target symbol: it appears in more than one factor of a
/// single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonLinear {
    /// The symbol being isolated.
    pub symbol: String,
}

impl ErrorKind for NonLinear {
    fn message(&self) -> String {
        format!("the equation is not linear in `{}`", self.symbol)
    }

    fn label(&self) -> String {
        format!("`{}` appears in more than one factor of this product", self.symbol)
    }

    fn help(&self) -> Option<String> {
        Some(format!("only equations of degree exactly 1 in `{}` can be solved", self.symbol))
    }
}

/// The solver could not factor the target symbol out of the collected left side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CannotExtract {
    /// The symbol being isolated.
    pub symbol: String,
}

impl ErrorKind for CannotExtract {
    fn message(&self) -> String {
        format!("cannot extract a coefficient for `{}` from this expression", self.symbol)
    }

    fn label(&self) -> String {
        format!("`{}` cannot be factored out here", self.symbol)
    }
}

/// The caller asked to isolate or substitute a symbol that does not occur in the equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingSymbol {
    /// The name of the symbol that was requested.
    pub symbol: String,

    /// The symbols that do occur in the equation.
    pub available: Vec<String>,
}

impl ErrorKind for MissingSymbol {
    fn message(&self) -> String {
        format!("there is no symbol `{}` in this equation", self.symbol)
    }

    fn label(&self) -> String {
        format!("`{}` does not occur here", self.symbol)
    }

    fn help(&self) -> Option<String> {
        let close = self
            .available
            .iter()
            .filter(|name| levenshtein(name, &self.symbol) < 2)
            .map(|name| format!("`{}`", name))
            .collect::<Vec<_>>();

        if !close.is_empty() {
            Some(format!("did you mean one of these symbols? {}", close.join(", ")))
        } else if !self.available.is_empty() {
            Some(format!(
                "the equation contains these symbols: {}",
                self.available
                    .iter()
                    .map(|name| format!("`{}`", name))
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_symbol_suggests_close_names() {
        let kind = MissingSymbol {
            symbol: "gg".to_string(),
            available: vec!["g".to_string(), "xyz".to_string()],
        };
        let help = kind.help().unwrap();
        assert!(help.contains("did you mean"));
        assert!(help.contains("`g`"));
        assert!(!help.contains("`xyz`"));
    }

    #[test]
    fn missing_symbol_lists_available_names() {
        let kind = MissingSymbol {
            symbol: "velocity".to_string(),
            available: vec!["e".to_string(), "f".to_string()],
        };
        let help = kind.help().unwrap();
        assert!(help.contains("the equation contains these symbols"));
        assert!(help.contains("`e`"));
        assert!(help.contains("`f`"));
    }
}
