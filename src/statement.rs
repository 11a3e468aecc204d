//! Expression nodes.
//!
//! A [`Statement`] is one node of a logical expression tree: a primitive
//! variable reference (through `IDENTITY`/`NOT`) or the merge of two
//! sub-expressions through a binary connective. A merged statement does not
//! keep references to its constituents; it captures their compute and naming
//! functions by closure and stands on its own.

use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use crate::error::Error;
use crate::shape::{Shape, Values};

pub(crate) type ComputeFn = dyn Fn(&Values) -> Result<bool, Error>;
pub(crate) type RenderFn = dyn Fn(&Shape) -> Result<String, Error>;

/// One logical expression: a compute function, a naming function, and the
/// parameter shape routing inputs to its sub-expressions.
///
/// Statements are created by [`StatementBuilder`][crate::builder::StatementBuilder]
/// and immutable afterwards, except that a primitive created without a shape
/// may be bound exactly once via [`bind_shape`][Statement::bind_shape].
///
/// Cloning is cheap: the captured functions are shared.
#[derive(Clone)]
pub struct Statement {
    compute: Rc<ComputeFn>,
    render: Rc<RenderFn>,
    shape: Option<Shape>,
    composite: bool,
}

impl Statement {
    pub(crate) fn new(
        compute: Rc<ComputeFn>,
        render: Rc<RenderFn>,
        shape: Option<Shape>,
        composite: bool,
    ) -> Self {
        Self {
            compute,
            render,
            shape,
            composite,
        }
    }

    pub(crate) fn compute_fn(&self) -> Rc<ComputeFn> {
        Rc::clone(&self.compute)
    }

    pub(crate) fn render_fn(&self) -> Rc<RenderFn> {
        Rc::clone(&self.render)
    }

    /// The fully qualified human-readable name, e.g. `"(P AND [NOT Q])"`.
    ///
    /// Pure: repeated calls return the same string.
    pub fn name(&self) -> Result<String, Error> {
        let shape = self
            .shape
            .as_ref()
            .ok_or_else(|| Error::InvalidState("statement has no bound parameter shape".to_string()))?;
        (self.render)(shape)
    }

    /// Evaluate the statement against a value bundle shaped like the bound
    /// parameter shape.
    ///
    /// The bundle's nesting is validated explicitly before evaluation.
    pub fn compute(&self, values: &Values) -> Result<bool, Error> {
        if let Some(shape) = &self.shape {
            if !shape.matches(values) {
                return Err(Error::ShapeMismatch {
                    expected: shape.to_string(),
                    supplied: values.to_string(),
                });
            }
        }
        (self.compute)(values)
    }

    /// The bound parameter shape, if any.
    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn is_composite(&self) -> bool {
        self.composite
    }

    /// One-time shape bind for primitives.
    ///
    /// Composites are bound at creation; rebinding one would desynchronize
    /// the shape from the captured expression tree, so it is rejected, as is
    /// rebinding an already-bound primitive.
    pub fn bind_shape(&mut self, shape: Shape) -> Result<(), Error> {
        if self.composite {
            return Err(Error::InvalidState(
                "cannot rebind the shape of a composite statement".to_string(),
            ));
        }
        if self.shape.is_some() {
            return Err(Error::InvalidState(
                "statement already has a bound parameter shape".to_string(),
            ));
        }
        if !shape.is_leaf() {
            return Err(Error::ShapeMismatch {
                expected: "a single variable".to_string(),
                supplied: shape.to_string(),
            });
        }
        self.shape = Some(shape);
        Ok(())
    }
}

impl Debug for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Statement")
            .field("shape", &self.shape)
            .field("composite", &self.composite)
            .finish()
    }
}
