/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or tracing a refutation.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [formula parser](crate::builder::parse)
    pub const PARSER: &str = "parser";

    /// Logs related to [CNF conversion](crate::procedures::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to [simplification](crate::procedures::simplify)
    pub const SIMPLIFY: &str = "simplify";

    /// Logs related to the [clause store](crate::db)
    pub const CLAUSE_STORE: &str = "clause_store";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [refutation loop](crate::procedures::refute)
    pub const REFUTATION: &str = "refutation";
}
