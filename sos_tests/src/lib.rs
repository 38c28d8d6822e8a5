pub mod general {
    use std::path::{Path, PathBuf};

    use sos_prover::{
        builder::problem::Problem,
        config::Config,
        procedures::cnf::to_cnf,
        reports::{ProofResult, Report},
        solve_problem,
        structures::{atom::Atom, formula::Formula},
    };

    /// Initialises a logger for tests, if built with logs.
    pub fn init_logs() {
        #[cfg(feature = "log")]
        let _ = env_logger::builder().is_test(true).try_init();
    }

    pub fn problem_lib_subdir(dirs: Vec<&str>) -> PathBuf {
        let mut path = Path::new(env!("CARGO_MANIFEST_DIR")).join("problems");
        for dir in dirs {
            path = path.join(dir);
        }
        path
    }

    pub fn load_problem(path: &PathBuf) -> Problem {
        let file = match std::fs::File::open(path) {
            Err(_) => panic!("Could not load {path:?}"),
            Ok(f) => f,
        };

        match Problem::read(std::io::BufReader::new(&file)) {
            Ok(problem) => problem,
            Err(e) => panic!("Could not read {path:?}: {e}"),
        }
    }

    pub fn silent_problem_result(path: &PathBuf, config: &Config) -> ProofResult {
        match solve_problem(&load_problem(path), config) {
            Ok(result) => result,
            Err(e) => panic!("{path:?}: {e:?}"),
        }
    }

    /// Requires each problem in the directory to have the given report, returning a count of problems.
    pub fn silent_on_directory(subdir: PathBuf, config: &Config, require: Report) -> usize {
        let mut count = 0;

        for entry in glob::glob(format!("{}/*.txt", subdir.display()).as_str()).expect("bad glob") {
            let path = entry.expect("unreadable path");
            assert_eq!(
                require,
                silent_problem_result(&path, config).report(),
                "{path:?}"
            );
            count += 1;
        }

        count
    }

    /// Every valuation of the atoms `A` to `A + count - 1`, as a function from atoms to values.
    pub fn valuations(count: u8) -> impl Iterator<Item = impl Fn(Atom) -> bool> {
        (0..(1_u32 << count)).map(|bits| {
            move |atom: Atom| {
                let index = (atom as u32).saturating_sub('A' as u32);
                bits & (1 << index) != 0
            }
        })
    }

    /// The value of a formula on a valuation, through the clauses of the formula.
    pub fn value_of(formula: &Formula, valuation: &impl Fn(Atom) -> bool) -> bool {
        to_cnf(formula)
            .iter()
            .all(|clause| clause.satisfied_by(valuation))
    }
}
