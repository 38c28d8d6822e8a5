use sos_prover::{config::Config, context::Context, reports::Report};

mod basic {
    use sos_prover::{config::Strategy, types::err};

    use super::*;

    fn context_with(premises: &[&str], goal: &str) -> Context {
        let mut ctx = Context::from_config(Config::default());
        for premise in premises {
            assert!(ctx.add_premise(premise).is_ok());
        }
        assert!(ctx.set_goal(goal).is_ok());
        ctx
    }

    #[test]
    fn premise_is_goal() {
        let mut ctx = context_with(&["P"], "P");
        assert_eq!(ctx.refute(), Ok(Report::Proven));
        assert_eq!(ctx.counters.steps, 1);
    }

    #[test]
    fn modus_ponens() {
        let mut ctx = context_with(&["P -> Q", "P"], "Q");
        assert_eq!(ctx.refute(), Ok(Report::Proven));
        assert_eq!(ctx.counters.steps, 2);
    }

    #[test]
    fn unrelated_goal() {
        let mut ctx = context_with(&["P"], "Q");
        assert_eq!(ctx.refute(), Ok(Report::NotProven));
    }

    #[test]
    fn excluded_middle() {
        // The negated goal is a pair of units which clash.
        let mut ctx = context_with(&[], "P | ~P");
        assert_eq!(ctx.refute(), Ok(Report::Proven));
    }

    #[test]
    fn inconsistent_premises() {
        // Resolution is restricted to the set of support, so a clash among the premises alone is not found.
        let mut ctx = context_with(&["P", "~P"], "Q");
        assert_eq!(ctx.refute(), Ok(Report::NotProven));
    }

    #[test]
    fn contrapositive() {
        for strategy in [Strategy::Basic, Strategy::ActiveSimplification] {
            let mut config = Config::default();
            assert!(config.strategy.set(strategy).is_ok());
            let mut ctx = Context::from_config(config);
            assert!(ctx.add_premise("P -> Q").is_ok());
            assert!(ctx.set_goal("~Q -> ~P").is_ok());
            assert_eq!(ctx.refute(), Ok(Report::Proven));
        }
    }

    #[test]
    fn unbalanced() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(
            ctx.add_premise("(A&B"),
            Err(err::ErrorKind::Parse(err::ParseError::UnbalancedParentheses))
        );
        assert!(ctx.clause_db.is_empty());
    }
}
