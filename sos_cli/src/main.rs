#![allow(unused_must_use)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{
    fs::File,
    io::{BufReader, Write},
};

use crossterm::{style::Stylize, tty::IsTty};

use sos_prover::{
    builder::problem::Problem,
    context::{Context, Counters},
    reports::{listing::ProofPresenter, Report},
    types::err::{self},
};

mod config_io;
mod parse;

use config_io::ConfigIO;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let (config, cli_strategy) = match parse::config::config_from_args(&matches) {
        Ok(pair) => pair,
        Err(e) => {
            println!("c Configuration error: {}", err::ErrorKind::from(e));
            std::process::exit(1);
        }
    };
    let config_io = ConfigIO::from_args(&matches);

    let mut problem = match read_problem(&config_io) {
        Ok(problem) => problem,
        Err(e) => {
            println!("c Error reading problem: {e}");
            std::process::exit(1);
        }
    };

    // A strategy given as an argument takes priority over a flag in the problem.
    if cli_strategy.is_some() {
        problem.strategy = cli_strategy;
    }

    let mut the_context = Context::from_config(config);
    if let Some(strategy) = problem.strategy {
        let _ = the_context.config.strategy.set(strategy);
    }

    for formula in &problem.premises {
        if let Err(e) = the_context.add_premise(formula) {
            println!("c Error in premise {formula}: {e}");
            std::process::exit(1);
        }
    }
    if let Err(e) = the_context.set_goal(&problem.goal) {
        println!("c Error in goal {}: {e}", problem.goal);
        std::process::exit(1);
    }

    let report = match the_context.refute() {
        Ok(report) => report,
        Err(e @ err::ErrorKind::Resource(_)) => {
            if config_io.show_stats {
                print_stats(&the_context.counters);
            }
            println!("{e}");
            std::process::exit(30);
        }
        Err(e) => {
            println!("c Context error: {e}");
            std::process::exit(1);
        }
    };

    let counters = the_context.counters.clone();
    let result = match the_context.into_result() {
        Ok(result) => result,
        Err(e) => {
            println!("c Context error: {e}");
            std::process::exit(1);
        }
    };

    let presenter = ProofPresenter::new(&result);
    let summary = presenter.summary();
    let (head, rest) = summary.split_once('\n').unwrap_or((summary.as_str(), ""));

    let mut stdout = std::io::stdout().lock();
    match (stdout.is_tty(), report) {
        (true, Report::Proven) => writeln!(stdout, "{}", head.green()),
        (true, Report::NotProven) => writeln!(stdout, "{}", head.red()),
        (false, _) => writeln!(stdout, "{head}"),
    };
    write!(stdout, "{rest}");

    if config_io.show_proof {
        if let Some(refutation) = presenter.refutation() {
            writeln!(stdout, "\nRefutation:");
            write!(stdout, "{refutation}");
        }
    }

    if config_io.show_core {
        if let Some(core) = presenter.core() {
            writeln!(stdout, "\nCore:");
            write!(stdout, "{core}");
        }
    }
    drop(stdout);

    if config_io.show_stats {
        print_stats(&counters);
    }

    match report {
        Report::Proven => std::process::exit(10),
        Report::NotProven => std::process::exit(20),
    }
}

fn read_problem(config_io: &ConfigIO) -> Result<Problem, err::ErrorKind> {
    match &config_io.path {
        Some(path) => match File::open(path) {
            Ok(file) => Problem::read(BufReader::new(file)),
            Err(_) => {
                println!("c Could not open {}", path.display());
                std::process::exit(1);
            }
        },
        None => Problem::read(std::io::stdin().lock()),
    }
}

fn print_stats(counters: &Counters) {
    println!();
    println!("c Steps:        {}", counters.steps);
    println!("c Given:        {}", counters.given);
    println!("c Skipped:      {}", counters.skipped);
    println!("c Tautologies:  {}", counters.tautologies);
    println!("c Duplicates:   {}", counters.duplicates);
    println!("c Retractions:  {}", counters.retractions);
    println!("c Max clauses:  {}", counters.max_clauses_seen);
}
