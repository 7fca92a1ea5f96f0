//! A generic work-list traversal over expression trees.
//!
//! Every analysis in this crate that needs to look at a whole tree (symbol presence, symbol
//! collection) is built on [`traverse`], a single walk parameterized by a [`Visitor`] and an
//! [`Order`]. Any visitor method can short-circuit the walk by returning
//! [`ControlFlow::Break`] with a value, which [`traverse`] returns immediately without visiting
//! further nodes.

use rug::Integer;
use std::collections::{BTreeSet, VecDeque};
use std::ops::ControlFlow;
use super::Expr;

/// The order in which [`traverse`] visits nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Visit each node's children before its siblings, using the work-list as a stack.
    #[default]
    DepthFirst,

    /// Visit each level of the tree before the next, using the work-list as a queue.
    BreadthFirst,
}

/// A set of callbacks fired while walking an expression tree.
///
/// [`Visitor::visit_expr`] fires for every node before the node's kind-specific callback. All
/// callbacks default to [`ControlFlow::Continue`], so implementors only override the ones they
/// care about.
#[allow(unused_variables)]
pub trait Visitor<T> {
    /// Fired for every node, before its kind-specific callback.
    fn visit_expr(&mut self, expr: &Expr) -> ControlFlow<T> {
        ControlFlow::Continue(())
    }

    /// Fired for every [`Expr::Number`].
    fn visit_number(&mut self, value: &Integer) -> ControlFlow<T> {
        ControlFlow::Continue(())
    }

    /// Fired for every [`Expr::Symbol`].
    fn visit_symbol(&mut self, name: &str) -> ControlFlow<T> {
        ControlFlow::Continue(())
    }

    /// Fired for every [`Expr::Sum`].
    fn visit_sum(&mut self, terms: &[Expr]) -> ControlFlow<T> {
        ControlFlow::Continue(())
    }

    /// Fired for every [`Expr::Product`].
    fn visit_product(&mut self, factors: &[Expr]) -> ControlFlow<T> {
        ControlFlow::Continue(())
    }

    /// Fired for every [`Expr::Fraction`].
    fn visit_fraction(&mut self, numerator: &Expr, denominator: &Expr) -> ControlFlow<T> {
        ControlFlow::Continue(())
    }
}

/// Walks the tree rooted at `root`, firing the visitor's callbacks for every node reached.
///
/// Children of sums and products are enqueued in list order; a fraction enqueues its numerator,
/// then its denominator. Returns `Some(value)` as soon as any callback breaks with `value`, or
/// `None` if the walk visits every node.
pub fn traverse<T>(root: &Expr, visitor: &mut impl Visitor<T>, order: Order) -> Option<T> {
    let mut tasks = VecDeque::from([root]);

    while let Some(task) = match order {
        Order::DepthFirst => tasks.pop_back(),
        Order::BreadthFirst => tasks.pop_front(),
    } {
        if let ControlFlow::Break(value) = visitor.visit_expr(task) {
            return Some(value);
        }

        let flow = match task {
            Expr::Number(value) => visitor.visit_number(value),
            Expr::Symbol(name) => visitor.visit_symbol(name),
            Expr::Sum(terms) => {
                tasks.extend(terms.iter());
                visitor.visit_sum(terms)
            },
            Expr::Product(factors) => {
                tasks.extend(factors.iter());
                visitor.visit_product(factors)
            },
            Expr::Fraction(numerator, denominator) => {
                tasks.push_back(numerator);
                tasks.push_back(denominator);
                visitor.visit_fraction(numerator, denominator)
            },
        };

        if let ControlFlow::Break(value) = flow {
            return Some(value);
        }
    }

    None
}

impl Expr {
    /// Returns true if the given symbol occurs anywhere in the expression.
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        struct Finder<'a>(&'a str);

        impl Visitor<bool> for Finder<'_> {
            fn visit_symbol(&mut self, name: &str) -> ControlFlow<bool> {
                if name == self.0 {
                    ControlFlow::Break(true)
                } else {
                    ControlFlow::Continue(())
                }
            }
        }

        traverse(self, &mut Finder(symbol), Order::DepthFirst).unwrap_or(false)
    }

    /// Collects the names of every symbol occurring in the expression, deduplicated.
    pub fn symbols(&self) -> BTreeSet<String> {
        struct Collector(BTreeSet<String>);

        impl Visitor<()> for Collector {
            fn visit_symbol(&mut self, name: &str) -> ControlFlow<()> {
                self.0.insert(name.to_string());
                ControlFlow::Continue(())
            }
        }

        let mut collector = Collector(BTreeSet::new());
        traverse(self, &mut collector, Order::DepthFirst);
        collector.0
    }
}
