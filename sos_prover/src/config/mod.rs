/*!
Configuration of a context.

All configuration for a context is contained within [Config], and each value is wrapped in a [ConfigOption] which records the bounds of the value.
*/

mod config_option;
pub use config_option::ConfigOption;

mod strategy;
pub use strategy::Strategy;

/// The default bound on resolvents produced during a refutation.
pub const DEFAULT_MAX_STEPS: usize = 200_000;

/// The default bound on clauses registered during a refutation.
pub const DEFAULT_MAX_CLAUSES: usize = 200_000;

/// The default bound on the nesting of a formula.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether to actively simplify the partitions during a refutation.
    pub strategy: ConfigOption<Strategy>,

    /// The bound on the number of resolvents produced.
    pub max_steps: ConfigOption<usize>,

    /// The bound on the number of clauses registered.
    pub max_clauses: ConfigOption<usize>,

    /// The bound on nesting when parsing a formula.
    pub max_depth: ConfigOption<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strategy: ConfigOption {
                name: "strategy",
                min: Strategy::MIN,
                max: Strategy::MAX,
                value: Strategy::Basic,
            },

            max_steps: ConfigOption {
                name: "max_steps",
                min: 0,
                max: usize::MAX,
                value: DEFAULT_MAX_STEPS,
            },

            max_clauses: ConfigOption {
                name: "max_clauses",
                min: 0,
                max: usize::MAX,
                value: DEFAULT_MAX_CLAUSES,
            },

            max_depth: ConfigOption {
                name: "max_depth",
                min: 1,
                max: 4096,
                value: DEFAULT_MAX_DEPTH,
            },
        }
    }
}
