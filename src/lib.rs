//! # truthtable-rs: Propositional Truth Tables in Rust
//!
//! **`truthtable-rs`** is a small library for building propositional-logic expressions
//! over named boolean variables and rendering full truth tables for inspection.
//!
//! ## How it works
//!
//! Expressions are built from a fixed registry of connectives (AND, OR, XOR, IDENTITY,
//! NOT, `->`, `<->`) by merging statements pairwise: every n-ary expression decomposes
//! into nested two-input merges. Each statement carries a **parameter shape** describing
//! which variables feed which sub-expression, so any statement can be evaluated against
//! an arbitrary row of variable assignments. A [`TruthTable`][crate::table::TruthTable]
//! enumerates all 2^n assignments and grows one named column per added statement.
//!
//! ## Key Features
//!
//! - **Compositional construction**: merge statements through any binary connective;
//!   names like `"((P OR Q) AND [NOT Q])"` are synthesized to mirror the nesting.
//! - **Shape-routed evaluation**: a recursive parameter shape routes the right subset
//!   of each assignment row into each sub-expression.
//! - **Full enumeration**: all 2^n rows, generated eagerly in a fixed order
//!   (all-True first, all-False last).
//! - **Analysis helpers**: satisfying-assignment counts, tautology and contradiction
//!   checks.
//!
//! ## Basic Usage
//!
//! ```rust
//! use truthtable_rs::builder::StatementBuilder;
//! use truthtable_rs::shape::Shape;
//! use truthtable_rs::table::TruthTable;
//!
//! # fn main() -> Result<(), truthtable_rs::error::Error> {
//! // 1. Declare the variables
//! let mut table = TruthTable::new(["P", "Q"])?;
//!
//! // 2. Build statements
//! let builder = StatementBuilder::new();
//! let not_q = builder.primitive("NOT", Shape::leaf("Q"))?;
//! let p_or_q = builder.compose(
//!     "IDENTITY",
//!     "OR",
//!     "IDENTITY",
//!     Shape::pair(Shape::leaf("P"), Shape::leaf("Q")),
//! )?;
//! assert_eq!(p_or_q.name()?, "(P OR Q)");
//!
//! // 3. Evaluate them against every assignment
//! table.add_column(&not_q)?.add_column(&p_or_q)?;
//! assert_eq!(table.shape(), (4, 4));
//!
//! // 4. Inspect
//! println!("{}", table.view());
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Components
//!
//! - **[`connective`]**: the fixed registry of logical operations.
//! - **[`shape`]**: recursive parameter shapes and shaped value bundles.
//! - **[`statement`]**: expression nodes exposing `name()` and `compute()`.
//! - **[`builder`]**: the factory that creates primitives and merges statements.
//! - **[`table`]**: assignment enumeration, column store, and grid rendering.

pub mod builder;
pub mod connective;
pub mod error;
pub mod shape;
pub mod statement;
pub mod table;
