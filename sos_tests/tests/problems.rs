mod problems {
    use sos_prover::{
        config::{Config, Strategy},
        reports::Report,
    };
    use sos_tests::general::{init_logs, problem_lib_subdir, silent_on_directory};

    #[test]
    fn proven() {
        init_logs();
        let count = silent_on_directory(
            problem_lib_subdir(vec!["proven"]),
            &Config::default(),
            Report::Proven,
        );
        assert_eq!(count, 8);
    }

    #[test]
    fn not_proven() {
        init_logs();
        let count = silent_on_directory(
            problem_lib_subdir(vec!["not_proven"]),
            &Config::default(),
            Report::NotProven,
        );
        assert_eq!(count, 6);
    }

    #[test]
    fn active_simplification() {
        let mut config = Config::default();
        assert!(config.strategy.set(Strategy::ActiveSimplification).is_ok());

        silent_on_directory(problem_lib_subdir(vec!["proven"]), &config, Report::Proven);
        silent_on_directory(problem_lib_subdir(vec!["not_proven"]), &config, Report::NotProven);
    }
}
