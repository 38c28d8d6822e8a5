/*!
Problems, read from a plain text format.

A problem is a sequence of non-blank lines:
- Premises, one formula to a line.
- A goal, on the last formula line.
- An optional strategy flag (`0` or `1`) on the first or the last line.

If both the first and the last line are flags, only the last line is treated as a flag, and the first line is read as a premise.

```rust
# use sos_prover::builder::problem::Problem;
# use sos_prover::config::Strategy;
let problem: Problem = "
1
P -> Q
P
Q
".parse().unwrap();

assert_eq!(problem.premises, vec!["P -> Q", "P"]);
assert_eq!(problem.goal, "Q");
assert_eq!(problem.strategy, Some(Strategy::ActiveSimplification));
```
*/

use std::{io::BufRead, str::FromStr};

use crate::{
    config::Strategy,
    misc::log::targets::{self},
    types::err::{self},
};

/// A collection of premises, a goal, and perhaps a strategy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Problem {
    /// The premises, in order.
    pub premises: Vec<String>,

    /// The goal.
    pub goal: String,

    /// The strategy, if some flag was given.
    pub strategy: Option<Strategy>,
}

/// The strategy named by a flag line, if the line is a flag.
fn flag(line: &str) -> Option<Strategy> {
    match line {
        "0" => Some(Strategy::Basic),
        "1" => Some(Strategy::ActiveSimplification),
        _ => None,
    }
}

impl Problem {
    /// Reads a problem from a reader.
    ///
    /// ```rust,ignore
    /// let problem = Problem::read(BufReader::new(&file))?;
    /// ```
    pub fn read(reader: impl BufRead) -> Result<Self, err::ErrorKind> {
        let mut lines = Vec::default();
        for line in reader.lines() {
            match line {
                Ok(line) => lines.push(line),
                Err(_) => {
                    log::error!(target: targets::PARSER, "Failed to read line {}", lines.len() + 1);
                    return Err(err::ErrorKind::from(err::ParseError::Line(lines.len() + 1)));
                }
            }
        }
        Problem::from_lines(lines.iter().map(|line| line.as_str()))
    }

    /// Builds a problem from lines of text, ignoring blank lines and surrounding whitespace.
    pub fn from_lines<'l>(lines: impl Iterator<Item = &'l str>) -> Result<Self, err::ErrorKind> {
        let mut body = lines
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();

        if body.is_empty() {
            return Err(err::ErrorKind::EmptyInput);
        }

        let leading = body.first().and_then(|line| flag(line));
        let trailing = body.last().and_then(|line| flag(line));

        let strategy = match (leading, trailing) {
            (_, Some(strategy)) => {
                body.pop();
                Some(strategy)
            }
            (Some(strategy), None) => {
                body.remove(0);
                Some(strategy)
            }
            (None, None) => None,
        };

        let Some(goal) = body.pop() else {
            return Err(err::ErrorKind::EmptyInput);
        };

        let problem = Problem {
            premises: body.into_iter().map(|line| line.to_string()).collect(),
            goal: goal.to_string(),
            strategy,
        };

        log::info!(target: targets::PARSER, "Read {} premises and a goal", problem.premises.len());
        Ok(problem)
    }
}

impl FromStr for Problem {
    type Err = err::ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Problem::from_lines(s.lines())
    }
}

#[cfg(test)]
mod problem_tests {
    use super::*;

    #[test]
    fn no_flag() {
        let problem: Problem = "P\n\n  Q  \n".parse().unwrap();
        assert_eq!(problem.premises, vec!["P"]);
        assert_eq!(problem.goal, "Q");
        assert_eq!(problem.strategy, None);
    }

    #[test]
    fn trailing_flag() {
        let problem: Problem = "P\nQ\n1".parse().unwrap();
        assert_eq!(problem.premises, vec!["P"]);
        assert_eq!(problem.goal, "Q");
        assert_eq!(problem.strategy, Some(Strategy::ActiveSimplification));
    }

    #[test]
    fn trailing_flag_over_leading_flag() {
        let problem: Problem = "1\nP\nQ\n0".parse().unwrap();
        assert_eq!(problem.premises, vec!["1", "P"]);
        assert_eq!(problem.goal, "Q");
        assert_eq!(problem.strategy, Some(Strategy::Basic));
    }

    #[test]
    fn only_flags() {
        assert_eq!("1".parse::<Problem>(), Err(err::ErrorKind::EmptyInput));
        assert_eq!("\n \n".parse::<Problem>(), Err(err::ErrorKind::EmptyInput));

        let problem: Problem = "0\n1".parse().unwrap();
        assert!(problem.premises.is_empty());
        assert_eq!(problem.goal, "0");
    }

    #[test]
    fn read() {
        let input = b"P -> Q\nP\nQ\n";
        let problem = Problem::read(input.as_slice()).unwrap();
        assert_eq!(problem.premises.len(), 2);
    }
}
