//! Truth tables.
//!
//! A [`TruthTable`] owns the full enumeration of variable assignments (the
//! base matrix, 2^n rows for n variables) and a growing list of derived
//! columns, one per added statement. Rows are immutable once generated;
//! the table only ever grows, one column at a time.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use log::debug;
use num_bigint::BigUint;

use crate::error::Error;
use crate::shape::{Shape, Values};
use crate::statement::Statement;

#[derive(Debug, Clone)]
struct Column {
    name: String,
    values: Vec<bool>,
}

/// A shape with its variable references resolved to row positions.
enum Slots {
    Leaf(usize),
    Pair(Box<Slots>, Box<Slots>),
}

/// The full enumeration of assignment rows plus derived statement columns.
pub struct TruthTable {
    variables: Vec<String>,
    rows: Vec<Vec<bool>>,
    columns: Vec<Column>,
}

impl TruthTable {
    /// Declare the variable set and eagerly generate all 2^n assignment rows.
    ///
    /// Names are order-preserving and must be non-empty and unique.
    pub fn new<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variables: Vec<String> = names.into_iter().map(Into::into).collect();
        if variables.is_empty() {
            return Err(Error::InvalidArguments(
                "at least one variable is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for name in &variables {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateVariable(name.clone()));
            }
        }

        let rows = enumerate_assignments(variables.len());
        debug!("new(variables = {:?}, rows = {})", variables, rows.len());

        Ok(Self {
            variables,
            rows,
            columns: Vec::new(),
        })
    }

    /// Declared variable names, in declaration order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// The base assignment matrix: 2^n rows over the declared variables.
    pub fn assignments(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Table dimensions as `(rows, columns)`, derived columns included.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.variables.len() + self.columns.len())
    }

    /// All column names: declared variables first, then derived columns in
    /// addition order.
    pub fn column_names(&self) -> Vec<&str> {
        self.variables
            .iter()
            .map(String::as_str)
            .chain(self.columns.iter().map(|c| c.name.as_str()))
            .collect()
    }

    /// The values of a column by name, or `None` if no such column exists.
    pub fn column(&self, name: &str) -> Option<Vec<bool>> {
        if let Some(index) = self.variables.iter().position(|v| v == name) {
            return Some(self.rows.iter().map(|row| row[index]).collect());
        }
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.clone())
    }

    /// Evaluate a statement against every row and store the results under the
    /// statement's name.
    ///
    /// A column with the same name is overwritten in place (its position is
    /// kept). Returns the table itself so additions can be chained.
    pub fn add_column(&mut self, statement: &Statement) -> Result<&mut Self, Error> {
        let shape = statement.shape().ok_or_else(|| {
            Error::InvalidState("statement has no bound parameter shape".to_string())
        })?;
        let slots = self.resolve(shape)?;
        let name = statement.name()?;

        let mut values = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            values.push(statement.compute(&extract(&slots, row))?);
        }

        debug!("add_column(name = {:?})", name);
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(column) => column.values = values,
            None => self.columns.push(Column { name, values }),
        }
        Ok(self)
    }

    /// Count the assignments under which the statement holds.
    pub fn sat_count(&self, statement: &Statement) -> Result<BigUint, Error> {
        let shape = statement.shape().ok_or_else(|| {
            Error::InvalidState("statement has no bound parameter shape".to_string())
        })?;
        let slots = self.resolve(shape)?;

        let mut count = BigUint::ZERO;
        for row in &self.rows {
            if statement.compute(&extract(&slots, row))? {
                count += 1u32;
            }
        }
        Ok(count)
    }

    /// Check that the statement holds under every assignment.
    pub fn is_tautology(&self, statement: &Statement) -> Result<bool, Error> {
        Ok(self.sat_count(statement)? == BigUint::from(self.rows.len()))
    }

    /// Check that the statement holds under no assignment.
    pub fn is_contradiction(&self, statement: &Statement) -> Result<bool, Error> {
        Ok(self.sat_count(statement)? == BigUint::ZERO)
    }

    /// A read-only, printable view of the current table.
    pub fn view(&self) -> TableView<'_> {
        TableView { table: self }
    }

    /// Resolve a shape's variable references to row positions.
    fn resolve(&self, shape: &Shape) -> Result<Slots, Error> {
        match shape {
            Shape::Leaf(name) => {
                let index = self
                    .variables
                    .iter()
                    .position(|v| v == name)
                    .ok_or_else(|| Error::UnknownVariable(name.clone()))?;
                Ok(Slots::Leaf(index))
            }
            Shape::Pair(left, right) => Ok(Slots::Pair(
                Box::new(self.resolve(left)?),
                Box::new(self.resolve(right)?),
            )),
        }
    }
}

impl std::fmt::Debug for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TruthTable")
            .field("variables", &self.variables)
            .field("rows", &self.rows.len())
            .field("columns", &self.columns.len())
            .finish()
    }
}

/// Pick the values a shape routes to out of one assignment row.
fn extract(slots: &Slots, row: &[bool]) -> Values {
    match slots {
        Slots::Leaf(index) => Values::Leaf(row[*index]),
        Slots::Pair(left, right) => Values::pair(extract(left, row), extract(right, row)),
    }
}

/// Generate all length-n boolean sequences depth-first, branching True before
/// False: the first row is all-True, the last is all-False.
fn enumerate_assignments(n: usize) -> Vec<Vec<bool>> {
    fn walk(branch: &mut Vec<bool>, n: usize, rows: &mut Vec<Vec<bool>>) {
        if branch.len() == n {
            rows.push(branch.clone());
            return;
        }
        for value in [true, false] {
            branch.push(value);
            walk(branch, n, rows);
            branch.pop();
        }
    }

    let mut rows = Vec::with_capacity(1 << n);
    walk(&mut Vec::with_capacity(n), n, &mut rows);
    rows
}

/// Read-only view over a [`TruthTable`]. `Display` renders an aligned grid
/// with one header per column.
pub struct TableView<'a> {
    table: &'a TruthTable,
}

impl TableView<'_> {
    fn cell(&self, row: usize, col: usize) -> bool {
        let num_vars = self.table.variables.len();
        if col < num_vars {
            self.table.rows[row][col]
        } else {
            self.table.columns[col - num_vars].values[row]
        }
    }
}

impl Display for TableView<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names = self.table.column_names();
        // Wide enough for the header and for "false".
        let widths: Vec<usize> = names.iter().map(|name| name.len().max(5)).collect();

        let mut line = String::new();
        for (name, &width) in names.iter().zip(&widths) {
            line.push_str(&format!("{:<width$}  ", name, width = width));
        }
        writeln!(f, "{}", line.trim_end())?;

        for row in 0..self.table.rows.len() {
            line.clear();
            for (col, &width) in widths.iter().enumerate() {
                line.push_str(&format!("{:<width$}  ", self.cell(row, col), width = width));
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
