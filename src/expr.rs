use std::sync::LazyLock;

use regex::Regex;

static INTEGER: LazyLock<Regex> = LazyLock::new(|| Regex::new("^-?[0-9]+$").unwrap());
static VARIABLE: LazyLock<Regex> = LazyLock::new(|| Regex::new("^[a-zA-Z][a-zA-Z0-9_]*$").unwrap());

/// One input line sorted into its syntactic shape. Exactly one of these
/// matches any string, so classification never fails.
#[derive(Debug, PartialEq, Eq)]
pub enum Line<'a> {
    Int(&'a str),
    Var(&'a str),
    Assign { name: &'a str, rhs: &'a str },
    Sum(Vec<&'a str>),
    Difference(Vec<&'a str>),
    Invalid,
}

/// Classifies a whitespace-free line. Assignment is checked before the
/// chains because an assignment right-hand side may itself contain `+`
/// or `-`. A chain mixing the two operators matches neither chain rule
/// and comes out `Invalid`.
pub fn classify(line: &str) -> Line<'_> {
    if INTEGER.is_match(line) {
        return Line::Int(line);
    }
    if VARIABLE.is_match(line) {
        return Line::Var(line);
    }
    if let Some((name, rhs)) = line.split_once('=') {
        if VARIABLE.is_match(name) && !rhs.is_empty() {
            return Line::Assign { name, rhs };
        }
    }
    if let Some(atoms) = chain(line, '+') {
        return Line::Sum(atoms);
    }
    if let Some(atoms) = chain(line, '-') {
        return Line::Difference(atoms);
    }
    Line::Invalid
}

/// Splits on every occurrence of `op` and accepts only if each segment
/// is an atom. An empty segment (leading, trailing, or doubled operator)
/// is never an atom, so `1+`, `+1` and `1--2` all fail here.
fn chain(line: &str, op: char) -> Option<Vec<&str>> {
    if !line.contains(op) {
        return None;
    }
    let atoms: Vec<&str> = line.split(op).collect();
    atoms.iter().all(|atom| is_atom(atom)).then_some(atoms)
}

fn is_atom(token: &str) -> bool {
    INTEGER.is_match(token) || VARIABLE.is_match(token)
}

/// Removes every whitespace character, wherever it appears. Stripping is
/// whole-string on purpose: `a b = 1` and `ab=1` are indistinguishable
/// afterwards, matching the observed behavior this tool preserves.
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(classify("0"), Line::Int("0"));
        assert_eq!(classify("-12"), Line::Int("-12"));
        assert_eq!(classify("--1"), Line::Invalid);
        assert_eq!(classify("1.5"), Line::Invalid);
        assert_eq!(classify(""), Line::Invalid);
    }

    #[test]
    fn variables() {
        assert_eq!(classify("x"), Line::Var("x"));
        assert_eq!(classify("Ab_2"), Line::Var("Ab_2"));
        assert_eq!(classify("_x"), Line::Invalid);
        assert_eq!(classify("9a"), Line::Invalid);
    }

    #[test]
    fn assignments_split_on_first_equals() {
        assert_eq!(classify("a=1+2"), Line::Assign { name: "a", rhs: "1+2" });
        assert_eq!(classify("a=b=1"), Line::Assign { name: "a", rhs: "b=1" });
        assert_eq!(classify("=5"), Line::Invalid);
        assert_eq!(classify("1=2"), Line::Invalid);
        assert_eq!(classify("a="), Line::Invalid);
    }

    #[test]
    fn chains() {
        assert_eq!(classify("1+2+3"), Line::Sum(vec!["1", "2", "3"]));
        assert_eq!(classify("a+1"), Line::Sum(vec!["a", "1"]));
        assert_eq!(classify("10-3-2"), Line::Difference(vec!["10", "3", "2"]));
        // a negative literal is a fine atom on the right of a '+'
        assert_eq!(classify("1+-2"), Line::Sum(vec!["1", "-2"]));
    }

    #[test]
    fn malformed_chains() {
        assert_eq!(classify("1+2-3"), Line::Invalid);
        assert_eq!(classify("+"), Line::Invalid);
        assert_eq!(classify("1+"), Line::Invalid);
        assert_eq!(classify("+1"), Line::Invalid);
        assert_eq!(classify("1--2"), Line::Invalid);
        assert_eq!(classify("-1-2"), Line::Invalid);
    }

    #[test]
    fn whitespace_is_fully_elided() {
        assert_eq!(strip_whitespace("x = 1 + 2"), "x=1+2");
        assert_eq!(strip_whitespace("a b = 1"), "ab=1");
        assert_eq!(strip_whitespace(" \t1 +\n2 "), "1+2");
    }
}
