use sos_prover::{
    config::Strategy, procedures::refute::refute, reports::listing::ProofPresenter,
};

const PREMISES: [&str; 4] = ["(A & B) -> C", "D -> (A | ~C)", "B <-> D", "D"];
const GOAL: &str = "C | ~A";

fn listing(premises: &[&str], strategy: Strategy) -> String {
    let result = refute(premises, GOAL, strategy, 200_000, 200_000).unwrap();
    ProofPresenter::new(&result).summary()
}

mod determinism {
    use super::*;

    #[test]
    fn repeated_refutations() {
        for strategy in [Strategy::Basic, Strategy::ActiveSimplification] {
            let first = listing(&PREMISES, strategy);
            for _ in 0..8 {
                assert_eq!(first, listing(&PREMISES, strategy));
            }
        }
    }

    #[test]
    fn premise_order_is_irrelevant() {
        let mut reversed = PREMISES;
        reversed.reverse();
        let rotated = [PREMISES[2], PREMISES[3], PREMISES[0], PREMISES[1]];

        let expected = listing(&PREMISES, Strategy::Basic);
        assert_eq!(expected, listing(&reversed, Strategy::Basic));
        assert_eq!(expected, listing(&rotated, Strategy::Basic));
    }

    #[test]
    fn ids_are_stable() {
        let result = refute(&PREMISES, GOAL, Strategy::Basic, 200_000, 200_000).unwrap();
        for (index, record) in result.ledger.records().enumerate() {
            assert_eq!(record.id, index + 1);
            assert_eq!(result.ledger.id_of(&record.clause), Some(record.id));
            if let Some((c, d)) = record.provenance {
                assert!(c < record.id && d < record.id);
                assert!(record.id >= result.sos_end);
            }
        }
    }

    #[test]
    fn concurrent_refutations() {
        let expected = listing(&PREMISES, Strategy::ActiveSimplification);

        let listings = crossbeam::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| scope.spawn(|_| listing(&PREMISES, Strategy::ActiveSimplification)))
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect::<Vec<_>>()
        })
        .unwrap();

        assert_eq!(listings.len(), 4);
        assert!(listings.iter().all(|l| *l == expected));
    }
}
