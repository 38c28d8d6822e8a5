/*!
A parser from strings to [formulas](crate::structures::formula).

# Grammar

- Atoms are single uppercase letters.
- `~` is (prefix) negation.
- `&`, `|`, `->`, and `<->` are (infix) conjunction, disjunction, implication, and equivalence.
- Parentheses group.
- Whitespace is ignored everywhere.

# Splitting

The root connective of a formula is found by scanning the formula from right to left while tracking the depth of parentheses.
At depth zero each position is tested for the end of a binary connective, with the connectives tested in the order `<->`, `->`, `|`, `&`.
The first match splits the formula into a left and a right formula, each parsed in the same way.
If no binary connective is found the formula must be a negation or wrapped in parentheses.

So, there is no precedence between connectives, only a bias toward splitting at the rightmost binary connective.

```rust
# use sos_prover::builder::parse::parse;
let formula = parse("A | B & C").unwrap();
assert_eq!(formula.to_string(), "((A | B) & C)");

let formula = parse("A & B | C").unwrap();
assert_eq!(formula.to_string(), "((A & B) | C)");

let formula = parse("A -> B -> C").unwrap();
assert_eq!(formula.to_string(), "((A -> B) -> C)");
```
*/

use crate::{
    config::DEFAULT_MAX_DEPTH,
    misc::log::targets::{self},
    structures::{atom, formula::Formula},
    types::err::{self},
};

/// Binary connectives, in the order tested at each position.
const BINARY_CONNECTIVES: [&str; 4] = ["<->", "->", "|", "&"];

/// Characters permitted in a formula (once whitespace is removed) other than atoms.
const SYMBOLS: [char; 7] = ['~', '&', '|', '-', '<', '>', '('];

/// Parses `text` to a formula, with nesting bounded by [DEFAULT_MAX_DEPTH].
pub fn parse(text: &str) -> Result<Formula, err::ParseError> {
    parse_bounded(text, DEFAULT_MAX_DEPTH)
}

/// Parses `text` to a formula, failing if the nesting of the formula exceeds `max_depth`.
pub fn parse_bounded(text: &str, max_depth: usize) -> Result<Formula, err::ParseError> {
    let stripped = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>();

    examine_tokens(&stripped)?;

    let formula = split(&stripped, 1, max_depth)?;
    log::trace!(target: targets::PARSER, "Read {text} as {formula}");
    Ok(formula)
}

/// Ensures the string is non-empty, made only of recognised characters, and has balanced parentheses.
fn examine_tokens(s: &str) -> Result<(), err::ParseError> {
    if s.is_empty() {
        return Err(err::ParseError::Empty);
    }

    let mut depth: usize = 0;
    for c in s.chars() {
        match c {
            '(' => depth += 1,

            ')' => match depth.checked_sub(1) {
                Some(shallower) => depth = shallower,
                None => {
                    log::debug!(target: targets::PARSER, "Unopened parenthesis in {s}");
                    return Err(err::ParseError::UnbalancedParentheses);
                }
            },

            _ if atom::is_atom(c) || SYMBOLS.contains(&c) => {}

            _ => {
                log::debug!(target: targets::PARSER, "Unrecognised token {c} in {s}");
                return Err(err::ParseError::UnrecognisedToken(c));
            }
        }
    }

    match depth {
        0 => Ok(()),
        _ => {
            log::debug!(target: targets::PARSER, "Unclosed parenthesis in {s}");
            Err(err::ParseError::UnbalancedParentheses)
        }
    }
}

/// Splits `s` at its root connective.
///
/// `s` is free of whitespace and contains only ASCII characters, so byte offsets are character offsets.
fn split(s: &str, depth: usize, max_depth: usize) -> Result<Formula, err::ParseError> {
    if depth > max_depth {
        return Err(err::ParseError::DepthExceeded(max_depth));
    }

    let bytes = s.as_bytes();
    match bytes {
        [] => return Err(err::ParseError::Empty),
        [c] if atom::is_atom(*c as char) => return Ok(Formula::atom(*c as char)),
        _ => {}
    }

    let mut parenthesis_depth: isize = 0;
    for end in (0..bytes.len()).rev() {
        match bytes[end] {
            b')' => parenthesis_depth += 1,
            b'(' => parenthesis_depth -= 1,
            _ if parenthesis_depth == 0 => {
                for connective in BINARY_CONNECTIVES {
                    let Some(start) = (end + 1).checked_sub(connective.len()) else {
                        continue;
                    };

                    if &s[start..=end] == connective {
                        let left = split(&s[..start], depth + 1, max_depth)?;
                        let right = split(&s[end + 1..], depth + 1, max_depth)?;

                        let formula = match connective {
                            "<->" => Formula::iff(left, right),
                            "->" => Formula::implies(left, right),
                            "|" => Formula::or(left, right),
                            _ => Formula::and(left, right),
                        };
                        return Ok(formula);
                    }
                }
            }
            _ => {}
        }
    }

    if let Some(negated) = s.strip_prefix('~') {
        return Ok(Formula::not(split(negated, depth + 1, max_depth)?));
    }

    if let Some(inner) = s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        return split(inner, depth + 1, max_depth);
    }

    log::debug!(target: targets::PARSER, "No split of {s}");
    Err(err::ParseError::Malformed(s.to_string()))
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn p(c: char) -> Formula {
        Formula::atom(c)
    }

    #[test]
    fn atoms_and_negation() {
        assert_eq!(parse("P"), Ok(p('P')));
        assert_eq!(parse(" ~ ~P "), Ok(Formula::not(Formula::not(p('P')))));
    }

    #[test]
    fn rightmost_split() {
        assert_eq!(
            parse("A&B&C"),
            Ok(Formula::and(Formula::and(p('A'), p('B')), p('C')))
        );

        assert_eq!(
            parse("~A&B"),
            Ok(Formula::and(Formula::not(p('A')), p('B')))
        );

        assert_eq!(
            parse("A<->B->C"),
            Ok(Formula::implies(Formula::iff(p('A'), p('B')), p('C')))
        );
    }

    #[test]
    fn parentheses() {
        assert_eq!(
            parse("(A|B)&(C)"),
            Ok(Formula::and(Formula::or(p('A'), p('B')), p('C')))
        );

        assert_eq!(
            parse("~(A->B)"),
            Ok(Formula::not(Formula::implies(p('A'), p('B'))))
        );
    }

    #[test]
    fn errors() {
        assert_eq!(parse(""), Err(err::ParseError::Empty));
        assert_eq!(parse("   "), Err(err::ParseError::Empty));
        assert_eq!(parse("(A&B"), Err(err::ParseError::UnbalancedParentheses));
        assert_eq!(parse("A&B)"), Err(err::ParseError::UnbalancedParentheses));
        assert_eq!(parse("p&q"), Err(err::ParseError::UnrecognisedToken('p')));
        assert_eq!(parse("A&"), Err(err::ParseError::Empty));
        assert_eq!(parse("()"), Err(err::ParseError::Empty));
        assert_eq!(parse("AB"), Err(err::ParseError::Malformed("AB".to_string())));
        assert_eq!(parse("A-B"), Err(err::ParseError::Malformed("A-B".to_string())));
    }

    #[test]
    fn depth_bound() {
        let deep = format!("{}P{}", "(".repeat(20), ")".repeat(20));
        assert_eq!(parse_bounded(&deep, 21), Ok(p('P')));
        assert_eq!(
            parse_bounded(&deep, 20),
            Err(err::ParseError::DepthExceeded(20))
        );

        let negations = format!("{}P", "~".repeat(DEFAULT_MAX_DEPTH + 1));
        assert_eq!(
            parse(&negations),
            Err(err::ParseError::DepthExceeded(DEFAULT_MAX_DEPTH))
        );
    }
}
