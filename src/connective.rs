//! The fixed registry of logical connectives.
//!
//! Each connective pairs a compute rule with a naming rule. The registry is a
//! static table: it is read-only, process-wide, and needs no initialization.

use crate::error::Error;

/// Number of operands a connective consumes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Arity {
    Unary,
    Binary,
}

/// A named logical operation: a boolean compute rule plus a naming rule.
///
/// Unary rules (`IDENTITY`, `NOT`) ignore the second operand.
pub struct Connective {
    token: &'static str,
    arity: Arity,
    apply: fn(bool, bool) -> bool,
    render: fn(&'static str, &str, &str) -> String,
}

impl Connective {
    /// The canonical token of this connective (e.g. `"AND"` or `"->"`).
    pub fn token(&self) -> &'static str {
        self.token
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Apply the compute rule to the given operands.
    pub fn apply(&self, a: bool, b: bool) -> bool {
        (self.apply)(a, b)
    }

    /// Render the human-readable name from the operand name(s).
    ///
    /// Unary connectives ignore `right`.
    pub fn render(&self, left: &str, right: &str) -> String {
        (self.render)(self.token, left, right)
    }

    /// Look up a connective by its token.
    pub fn lookup(token: &str) -> Result<&'static Connective, Error> {
        CONNECTIVES
            .iter()
            .find(|c| c.token == token)
            .ok_or_else(|| Error::UnknownOperation(token.to_string()))
    }

    /// All registered connectives, in registry order.
    pub fn all() -> &'static [Connective] {
        &CONNECTIVES
    }
}

impl std::fmt::Debug for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connective")
            .field("token", &self.token)
            .field("arity", &self.arity)
            .finish()
    }
}

fn and(a: bool, b: bool) -> bool {
    a && b
}
fn or(a: bool, b: bool) -> bool {
    a || b
}
fn xor(a: bool, b: bool) -> bool {
    a ^ b
}
fn identity(a: bool, _b: bool) -> bool {
    a
}
fn not(a: bool, _b: bool) -> bool {
    !a
}
fn implies(a: bool, b: bool) -> bool {
    !a || b
}
fn iff(a: bool, b: bool) -> bool {
    a == b
}

fn render_bare(_token: &'static str, left: &str, _right: &str) -> String {
    left.to_string()
}
fn render_prefix(token: &'static str, left: &str, _right: &str) -> String {
    format!("[{} {}]", token, left)
}
fn render_infix(token: &'static str, left: &str, right: &str) -> String {
    format!("({} {} {})", left, token, right)
}

static CONNECTIVES: [Connective; 7] = [
    Connective {
        token: "AND",
        arity: Arity::Binary,
        apply: and,
        render: render_infix,
    },
    Connective {
        token: "OR",
        arity: Arity::Binary,
        apply: or,
        render: render_infix,
    },
    Connective {
        token: "XOR",
        arity: Arity::Binary,
        apply: xor,
        render: render_infix,
    },
    Connective {
        token: "IDENTITY",
        arity: Arity::Unary,
        apply: identity,
        render: render_bare,
    },
    Connective {
        token: "NOT",
        arity: Arity::Unary,
        apply: not,
        render: render_prefix,
    },
    Connective {
        token: "->",
        arity: Arity::Binary,
        apply: implies,
        render: render_infix,
    },
    Connective {
        token: "<->",
        arity: Arity::Binary,
        apply: iff,
        render: render_infix,
    },
];
