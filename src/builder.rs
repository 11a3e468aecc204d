//! Statement construction.
//!
//! The builder creates primitive statements from a registry connective and
//! merges statements pairwise into composites. Every n-ary expression
//! decomposes into nested two-input merges, so repeated merging builds
//! arbitrarily deep trees.

use std::rc::Rc;

use log::debug;

use crate::connective::{Arity, Connective};
use crate::error::Error;
use crate::shape::{Shape, Values};
use crate::statement::Statement;

/// A builder input: either a connective token (auto-wrapped into a primitive)
/// or an already-built statement.
#[derive(Debug, Clone)]
pub enum Operand {
    Op(String),
    Node(Statement),
}

impl From<&str> for Operand {
    fn from(token: &str) -> Self {
        Operand::Op(token.to_string())
    }
}

impl From<String> for Operand {
    fn from(token: String) -> Self {
        Operand::Op(token)
    }
}

impl From<Statement> for Operand {
    fn from(statement: Statement) -> Self {
        Operand::Node(statement)
    }
}

impl From<&Statement> for Operand {
    fn from(statement: &Statement) -> Self {
        Operand::Node(statement.clone())
    }
}

/// Factory for [`Statement`]s.
///
/// Construction is pure: the same inputs always produce a statement with
/// identical behavior, and no state is kept between calls.
#[derive(Debug, Default)]
pub struct StatementBuilder;

impl StatementBuilder {
    pub fn new() -> Self {
        StatementBuilder
    }

    /// General construction entry point.
    ///
    /// With `connector` and `right` absent, builds a primitive: `left` must
    /// be a unary connective token and `shape` a single variable. With both
    /// present, merges `left` and `right` through the binary `connector`.
    /// Supplying only one of `connector`/`right` is invalid.
    pub fn build(
        &self,
        left: impl Into<Operand>,
        connector: Option<&str>,
        right: Option<Operand>,
        shape: Shape,
    ) -> Result<Statement, Error> {
        match (connector, right) {
            (None, None) => {
                let Operand::Op(token) = left.into() else {
                    return Err(Error::InvalidArguments(
                        "primitive construction requires a connective token".to_string(),
                    ));
                };
                self.primitive(&token, shape)
            }
            (Some(connector), Some(right)) => self.compose(left, connector, right, shape),
            _ => Err(Error::InvalidArguments(
                "connector and right operand must be supplied together".to_string(),
            )),
        }
    }

    /// Build a primitive (unary) statement bound to a single-variable shape.
    pub fn primitive(&self, token: &str, shape: Shape) -> Result<Statement, Error> {
        let connective = Connective::lookup(token)?;
        if connective.arity() != Arity::Unary {
            return Err(Error::InvalidArguments(format!(
                "{:?} cannot form a primitive statement",
                token
            )));
        }
        debug!("primitive(token = {}, shape = {})", token, shape);
        let mut statement = unary_statement(connective);
        statement.bind_shape(shape)?;
        Ok(statement)
    }

    /// Merge two statements into a composite through a binary connective.
    ///
    /// `left` and `right` may be connective tokens, which are auto-wrapped
    /// into unbound unary primitives. `shape` must be a pair whose sides are
    /// structurally compatible with the corresponding operands. The composite
    /// captures the operands' compute and naming functions; the operands
    /// themselves are not referenced afterwards.
    pub fn compose(
        &self,
        left: impl Into<Operand>,
        connector: &str,
        right: impl Into<Operand>,
        shape: Shape,
    ) -> Result<Statement, Error> {
        let connective = Connective::lookup(connector)?;
        if connective.arity() != Arity::Binary {
            return Err(Error::InvalidArguments(format!(
                "{:?} cannot connect two statements",
                connector
            )));
        }

        let left = self.resolve(left.into())?;
        let right = self.resolve(right.into())?;

        let Shape::Pair(left_shape, right_shape) = &shape else {
            return Err(Error::ShapeMismatch {
                expected: "a two-part shape".to_string(),
                supplied: shape.to_string(),
            });
        };
        check_side(&left, left_shape)?;
        check_side(&right, right_shape)?;

        debug!("compose(connector = {}, shape = {})", connector, shape);

        let compute_left = left.compute_fn();
        let compute_right = right.compute_fn();
        let compute = Rc::new(move |values: &Values| match values {
            Values::Pair(left_values, right_values) => Ok(connective.apply(
                compute_left(left_values)?,
                compute_right(right_values)?,
            )),
            leaf => Err(Error::ShapeMismatch {
                expected: "a two-part value bundle".to_string(),
                supplied: leaf.to_string(),
            }),
        });

        let render_left = left.render_fn();
        let render_right = right.render_fn();
        let render = Rc::new(move |shape: &Shape| match shape {
            Shape::Pair(left_shape, right_shape) => Ok(connective.render(
                &render_left(left_shape)?,
                &render_right(right_shape)?,
            )),
            leaf => Err(Error::ShapeMismatch {
                expected: "a two-part shape".to_string(),
                supplied: leaf.to_string(),
            }),
        });

        Ok(Statement::new(compute, render, Some(shape), true))
    }

    /// Resolve an operand: statements pass through, tokens become unbound
    /// unary primitives.
    fn resolve(&self, operand: Operand) -> Result<Statement, Error> {
        match operand {
            Operand::Node(statement) => Ok(statement),
            Operand::Op(token) => {
                let connective = Connective::lookup(&token)?;
                if connective.arity() != Arity::Unary {
                    return Err(Error::InvalidArguments(format!(
                        "{:?} cannot stand in operand position",
                        token
                    )));
                }
                Ok(unary_statement(connective))
            }
        }
    }
}

/// Check that a side shape is structurally compatible with the operand it
/// routes into: an unbound primitive takes a single variable, a bound
/// statement takes any shape isomorphic to its own.
fn check_side(statement: &Statement, side: &Shape) -> Result<(), Error> {
    match statement.shape() {
        None => {
            if !side.is_leaf() {
                return Err(Error::ShapeMismatch {
                    expected: "a single variable".to_string(),
                    supplied: side.to_string(),
                });
            }
        }
        Some(bound) => {
            if !bound.isomorphic(side) {
                return Err(Error::ShapeMismatch {
                    expected: bound.to_string(),
                    supplied: side.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn unary_statement(connective: &'static Connective) -> Statement {
    let compute = Rc::new(move |values: &Values| match values {
        // Unary rules ignore the second operand.
        Values::Leaf(value) => Ok(connective.apply(*value, *value)),
        pair => Err(Error::ShapeMismatch {
            expected: "a single boolean".to_string(),
            supplied: pair.to_string(),
        }),
    });
    let render = Rc::new(move |shape: &Shape| match shape {
        Shape::Leaf(name) => Ok(connective.render(name, "")),
        pair => Err(Error::ShapeMismatch {
            expected: "a single variable".to_string(),
            supplied: pair.to_string(),
        }),
    });
    Statement::new(compute, render, None, false)
}
