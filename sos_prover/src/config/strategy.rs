use std::str::FromStr;

/// Variant treatments of the usable and set-of-support partitions during a refutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strategy {
    /// Partitions only grow.
    ///
    /// Clauses are simplified when read, and each resolvent is checked against the clause store, but nothing is retracted.
    Basic = 0,

    /// Simplify each partition before the main loop and after each clause added to the set of support.
    ///
    /// Simplification may retract clauses from a partition, after which they are no longer used as resolution targets.
    ActiveSimplification,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "Basic"),
            Self::ActiveSimplification => write!(f, "ActiveSimplification"),
        }
    }
}

impl Strategy {
    /// The minimum Strategy type.
    pub const MIN: Strategy = Strategy::Basic;

    /// The maximum Strategy type.
    pub const MAX: Strategy = Strategy::ActiveSimplification;

    /// The strategy flag, as used in a problem.
    pub fn flag(&self) -> u8 {
        *self as u8
    }
}

impl FromStr for Strategy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" | "Basic" => Ok(Self::Basic),

            "1" | "ActiveSimplification" => Ok(Self::ActiveSimplification),

            _unknown_string => Err(()),
        }
    }
}

#[cfg(test)]
mod strategy_tests {
    use super::*;

    #[test]
    fn flags() {
        assert_eq!(Strategy::from_str("0"), Ok(Strategy::Basic));
        assert_eq!(Strategy::from_str("1"), Ok(Strategy::ActiveSimplification));
        assert_eq!(Strategy::from_str("2"), Err(()));
        assert_eq!(Strategy::ActiveSimplification.flag(), 1);
    }
}
