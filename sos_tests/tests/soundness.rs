use rand::{rngs::StdRng, Rng, SeedableRng};

use sos_prover::{
    builder::parse::parse, config::Strategy, procedures::refute::refute,
};
use sos_tests::general::{valuations, value_of};

const ATOMS: u8 = 4;

fn random_clause(rng: &mut StdRng, max_width: usize) -> String {
    let width = rng.gen_range(1..=max_width);
    (0..width)
        .map(|_| {
            let atom = (b'A' + rng.gen_range(0..ATOMS)) as char;
            match rng.gen_bool(0.5) {
                true => atom.to_string(),
                false => format!("~{atom}"),
            }
        })
        .collect::<Vec<_>>()
        .join(" | ")
}

mod soundness {
    use super::*;

    #[test]
    fn proofs_are_entailments() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut proofs = 0;

        for trial in 0..250 {
            let premise_count = rng.gen_range(1..=5);
            let premises = (0..premise_count)
                .map(|_| random_clause(&mut rng, 3))
                .collect::<Vec<_>>();
            let goal = random_clause(&mut rng, 2);

            let strategy = match trial % 2 {
                0 => Strategy::Basic,
                _ => Strategy::ActiveSimplification,
            };

            let Ok(result) = refute(&premises, &goal, strategy, 50_000, 50_000) else {
                continue;
            };
            if !result.proven {
                continue;
            }
            proofs += 1;

            let premise_formulas = premises.iter().map(|p| parse(p).unwrap()).collect::<Vec<_>>();
            let goal_formula = parse(&goal).unwrap();

            for valuation in valuations(ATOMS) {
                if premise_formulas.iter().all(|p| value_of(p, &valuation)) {
                    assert!(
                        value_of(&goal_formula, &valuation),
                        "{premises:?} does not entail {goal}"
                    );
                }
            }
        }

        assert!(proofs > 0);
    }

    #[test]
    fn resolvents_are_consequences() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let premises = (0..3).map(|_| random_clause(&mut rng, 3)).collect::<Vec<_>>();
            let goal = random_clause(&mut rng, 2);

            let Ok(result) = refute(&premises, &goal, Strategy::Basic, 50_000, 50_000) else {
                continue;
            };

            // Each derived clause follows from the two clauses it was derived from.
            for record in result.ledger.records() {
                let Some((c, d)) = record.provenance else {
                    continue;
                };
                let c = result.ledger.lookup(c).unwrap();
                let d = result.ledger.lookup(d).unwrap();

                for valuation in valuations(ATOMS) {
                    if c.satisfied_by(&valuation) && d.satisfied_by(&valuation) {
                        assert!(record.clause.satisfied_by(&valuation));
                    }
                }
            }
        }
    }
}
