use clap::ArgMatches;

use sos_prover::{
    config::{Config, Strategy},
    types::err::{self},
};

/// A configuration from the arguments, together with any strategy given as an argument.
pub fn config_from_args(args: &ArgMatches) -> Result<(Config, Option<Strategy>), err::ConfigError> {
    let mut the_config = Config::default();

    let strategy = args.try_get_one::<Strategy>("strategy").ok().flatten().copied();
    if let Some(strategy) = strategy {
        the_config.strategy.set(strategy)?
    };

    if let Ok(Some(steps)) = args.try_get_one::<usize>("max_steps") {
        the_config.max_steps.set(*steps)?
    };

    if let Ok(Some(clauses)) = args.try_get_one::<usize>("max_clauses") {
        the_config.max_clauses.set(*clauses)?
    };

    if let Ok(Some(depth)) = args.try_get_one::<usize>("max_depth") {
        the_config.max_depth.set(*depth)?
    };

    Ok((the_config, strategy))
}
