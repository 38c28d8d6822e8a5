use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

use sos_prover::config::{self, Strategy};

pub fn cli() -> Command {
    Command::new("sos")
        .about("Determines whether a goal follows from some premises, by resolution with the set-of-support strategy")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("path")
            .required(false)
            .num_args(1)
            .value_parser(value_parser!(PathBuf))
            .help("A problem file: premises one to a line, then the goal, with an optional strategy flag.")
            .long_help("A problem file: premises one to a line, then the goal, with an optional strategy flag.
If no path is given the problem is read from stdin.

A strategy flag is a line containing only 0 or 1, on the first or the last line.
If both the first and the last line are flags, the last line is the flag and the first line is a premise."))

        .arg(Arg::new("strategy")
            .long("strategy")
            .short('s')
            .value_name("STRATEGY")
            .value_parser(clap::builder::ValueParser::new(strategy_parser))
            .required(false)
            .num_args(1)
            .help(format!("The strategy to use, overriding any flag in the problem.
Default: {}", Strategy::Basic))
            .long_help(format!("The strategy to use, overriding any flag in the problem.
Default: {}

  - 0, Basic                : Partitions only grow
  - 1, ActiveSimplification : Simplify each partition after each clause added to the set of support", Strategy::Basic)))

        .arg(Arg::new("max_steps")
            .long("max-steps")
            .value_name("STEPS")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The bound on resolvents produced.
Default: {}", config::DEFAULT_MAX_STEPS)))

        .arg(Arg::new("max_clauses")
            .long("max-clauses")
            .value_name("CLAUSES")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The bound on clauses registered.
Default: {}", config::DEFAULT_MAX_CLAUSES)))

        .arg(Arg::new("max_depth")
            .long("max-depth")
            .value_name("DEPTH")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The bound on the nesting of a formula.
Default: {}", config::DEFAULT_MAX_DEPTH)))

        // CLI specific arguments

        .arg(Arg::new("proof")
            .short('p')
            .long("proof")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Display the clauses used to derive the empty clause, on a proof."))

        .arg(Arg::new("core")
            .short('c')
            .long("core")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Display the input clauses used to derive the empty clause, on a proof."))

        .arg(Arg::new("stats")
            .long("stats")
            .value_parser(value_parser!(bool))
            .required(false)
            .num_args(0)
            .help("Display counts from the refutation on completion."))
}

fn strategy_parser(arg: &str) -> Result<Strategy, std::io::Error> {
    arg.parse::<Strategy>().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown strategy")
    })
}
