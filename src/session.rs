use std::collections::HashMap;

use thiserror::Error;

use crate::expr::{classify, Line};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("syntax error")]
    Syntax,

    #[error("variable '{0}' is not defined")]
    Undefined(String),

    #[error("'{0}' overflows the integer range")]
    Overflow(String),
}

pub type Result<T> = std::result::Result<T, EvalError>;

/// Variable bindings for one interactive session. The store starts empty
/// and lives as long as the session; there is no way to delete a binding.
#[derive(Debug, Default)]
pub struct Session {
    vars: HashMap<String, i64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates one whitespace-free line. This is the only entry point
    /// that accepts an assignment, and a successful assignment is the
    /// only thing that writes to the store; the write happens after the
    /// right-hand side evaluates, so a failing line changes nothing.
    pub fn eval_line(&mut self, line: &str) -> Result<i64> {
        match classify(line) {
            Line::Assign { name, rhs } => {
                let value = self.eval_expr(rhs)?;
                self.vars.insert(name.to_owned(), value);
                Ok(value)
            }
            other => self.eval_classified(other),
        }
    }

    /// Evaluates an expression with assignment excluded. Both bare
    /// expressions and assignment right-hand sides go through here, so
    /// `a=b=1` is a syntax error rather than a chained assignment.
    fn eval_expr(&self, expr: &str) -> Result<i64> {
        self.eval_classified(classify(expr))
    }

    fn eval_classified(&self, line: Line<'_>) -> Result<i64> {
        match line {
            Line::Int(text) => parse_int(text),
            Line::Var(name) => self.lookup(name),
            Line::Sum(atoms) => self.eval_chain(&atoms, false),
            Line::Difference(atoms) => self.eval_chain(&atoms, true),
            Line::Assign { .. } | Line::Invalid => Err(EvalError::Syntax),
        }
    }

    fn lookup(&self, name: &str) -> Result<i64> {
        self.vars
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::Undefined(name.to_owned()))
    }

    fn eval_atom(&self, token: &str) -> Result<i64> {
        match classify(token) {
            Line::Int(text) => parse_int(text),
            Line::Var(name) => self.lookup(name),
            _ => Err(EvalError::Syntax),
        }
    }

    /// Sums the atoms left to right, failing fast on the first bad one.
    /// With `negate_rest` the first atom keeps its sign and every later
    /// one is negated before adding, which is the same as left-associative
    /// repeated subtraction: `10-3-2` is `10 + (-3) + (-2)`.
    fn eval_chain(&self, atoms: &[&str], negate_rest: bool) -> Result<i64> {
        let mut total = 0i64;
        for (i, atom) in atoms.iter().enumerate() {
            let mut value = self.eval_atom(atom)?;
            if negate_rest && i > 0 {
                value = value
                    .checked_neg()
                    .ok_or_else(|| EvalError::Overflow((*atom).to_owned()))?;
            }
            total = total
                .checked_add(value)
                .ok_or_else(|| EvalError::Overflow((*atom).to_owned()))?;
        }
        Ok(total)
    }
}

/// The classifier guarantees the text is `-?[0-9]+`, so the only way a
/// parse can fail is a value outside the `i64` range.
fn parse_int(text: &str) -> Result<i64> {
    text.parse().map_err(|_| EvalError::Overflow(text.to_owned()))
}
