//! Symbolic expression trees and linear equation solving.
//!
//! This crate implements a small algebra engine: arithmetic expressions are represented as trees
//! of [`Expr`] nodes (integer constants, named symbols, variadic sums and products, and exact
//! fractions), built programmatically by the caller. On top of the tree sit four operations:
//!
//! - [`simplify`] rewrites a tree into canonical reduced form: constants collapsed, products
//!   distributed over sums, nested same-kind nodes flattened, numeric fractions reduced by their
//!   greatest common divisor.
//! - [`resolve_symbol`](solve::resolve_symbol) isolates a chosen symbol in an equation that is
//!   linear in it, producing a closed-form expression for that symbol in terms of the others.
//! - [`evaluate`](eval::evaluate) substitutes expressions for symbols and re-simplifies.
//! - [`Equations`] holds an ordered system of equations and combines the above: resolve a symbol
//!   from one equation, substitute the result into another, repeat until a symbol's value falls
//!   out.
//!
//! The engine is deliberately scoped to the linear case: no exponents, no transcendental
//! functions, no symbols in denominators. Inputs outside that scope fail fast with a descriptive
//! [`error::Error`] carrying the rendering of the offending subexpression; nothing is silently
//! approximated.
//!
//! # Simplification
//!
//! ```
//! use eqn_algebra::{simplify, Expr};
//!
//! // 2*(x + 3)
//! let expr = Expr::product(vec![
//!     Expr::number(2),
//!     Expr::sum(vec![Expr::symbol("x"), Expr::number(3)]),
//! ]);
//! assert_eq!(simplify(&expr).unwrap().to_string(), "2*x + 6");
//! ```
//!
//! # Solving and substituting
//!
//! ```
//! use eqn_algebra::{Equation, Equations, Expr};
//!
//! // 30 = 43*e + -73*f
//! let equation = Equation::new(
//!     Expr::number(30),
//!     Expr::sum(vec![
//!         Expr::product(vec![Expr::number(43), Expr::symbol("e")]),
//!         Expr::product(vec![Expr::number(-73), Expr::symbol("f")]),
//!     ]),
//! );
//!
//! let mut equations = Equations::new(vec![equation]);
//! let f = equations.resolve_from_equation(0, "f").unwrap();
//! assert_eq!(f.to_string(), "43/73*e + -30/73");
//!
//! // eliminate f from the system
//! equations.replace(0, "f", f).unwrap();
//! assert!(!equations.get(0).unwrap().contains_symbol("f"));
//! ```
//!
//! # Diagnostics
//!
//! The simplifier and the solver can narrate their work: [`simplify_with`] and
//! [`resolve_symbol_with`](solve::resolve_symbol_with) report each rewrite to a
//! [`StepCollector`], which callers can collect into a vector, stream to a writer, or (with
//! `()`) discard at zero cost.

pub mod equation;
pub mod error;
pub mod eval;
pub mod expr;
pub mod primitive;
pub mod simplify;
pub mod solve;
pub mod step_collector;
pub mod system;

pub use equation::Equation;
pub use eval::evaluate;
pub use expr::Expr;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use solve::{resolve_symbol, resolve_symbol_with};
pub use step_collector::StepCollector;
pub use system::Equations;
