use std::path::PathBuf;

use clap::ArgMatches;

#[derive(Clone, Default)]
pub struct ConfigIO {
    pub path: Option<PathBuf>,
    pub show_proof: bool,
    pub show_core: bool,
    pub show_stats: bool,
}

impl ConfigIO {
    pub fn from_args(args: &ArgMatches) -> Self {
        let flag = |id: &str| matches!(args.try_get_one::<bool>(id), Ok(Some(true)));

        ConfigIO {
            path: args.try_get_one::<PathBuf>("path").ok().flatten().cloned(),
            show_proof: flag("proof"),
            show_core: flag("core"),
            show_stats: flag("stats"),
        }
    }
}
