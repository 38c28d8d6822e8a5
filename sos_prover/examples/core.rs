//! Prints the input clauses used to prove a goal, together with the full refutation.
//!
//! Premises are read one to a line from stdin, and the goal is the first argument.

use std::io::{BufRead, Write};

use sos_prover::{
    config::Config, context::Context, reports::listing::ProofPresenter, reports::Report,
};

fn main() {
    let Some(goal) = std::env::args().nth(1) else {
        println!("Usage: {} <goal> < premises", env!("CARGO_PKG_NAME"));
        std::process::exit(1);
    };

    let mut the_context = Context::from_config(Config::default());

    for line in std::io::stdin().lock().lines().map_while(Result::ok) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Err(e) = the_context.add_premise(line) {
            println!("{line}: {e}");
            std::process::exit(1);
        }
    }

    if let Err(e) = the_context.set_goal(&goal) {
        println!("{goal}: {e}");
        std::process::exit(1);
    }

    match the_context.refute() {
        Ok(Report::Proven) => {}
        Ok(Report::NotProven) => {
            println!("{goal} does not follow");
            return;
        }
        Err(e) => {
            println!("{e}");
            std::process::exit(1);
        }
    }

    let Ok(result) = the_context.into_result() else {
        panic!("! Result unavailable after a refutation");
    };
    let presenter = ProofPresenter::new(&result);

    let mut stdout = std::io::stdout().lock();
    let _ = writeln!(stdout, "Core:");
    let _ = write!(stdout, "{}", presenter.core().unwrap_or_default());
    let _ = writeln!(stdout, "Refutation:");
    let _ = write!(stdout, "{}", presenter.refutation().unwrap_or_default());
}
