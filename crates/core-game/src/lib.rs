mod data;
mod equilibrium;
mod error;
mod game;
mod payoff;

pub use data::{SHIPPED_CELLS, SHIPPED_EQUILIBRIA};
pub use equilibrium::EquilibriumSet;
pub use error::GameDataError;
pub use game::PayoffGame;
pub use payoff::{
    market_shares, resolve_round, PayoffEntry, PayoffTable, RoundResult, ZERO_TOTAL_MARKET_SHARE,
};

pub fn module_ready() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use strategy::Strategy;

    use super::{PayoffEntry, PayoffGame};

    const SHARE_TOLERANCE: f64 = 1e-12;

    fn any_strategy() -> impl proptest::strategy::Strategy<Value = Strategy> {
        prop::sample::select(Strategy::ALL.to_vec())
    }

    #[test]
    fn shipped_game_validates() {
        assert!(PayoffGame::shipped().is_ok());
    }

    #[test]
    fn shipped_table_matches_reference_cells() {
        let game = PayoffGame::shipped().unwrap();
        let table = game.table();

        assert_eq!(
            table.entry(Strategy::Lower, Strategy::Raise),
            PayoffEntry::new(10_000, 2_000)
        );
        assert_eq!(
            table.entry(Strategy::Maintain, Strategy::Raise),
            PayoffEntry::new(9_000, 5_000)
        );
        assert_eq!(
            table.entry(Strategy::Raise, Strategy::Maintain),
            PayoffEntry::new(5_000, 9_000)
        );
    }

    #[test]
    fn mutual_price_cut_splits_market_evenly() {
        let game = PayoffGame::shipped().unwrap();

        let result = game.resolve(Strategy::Lower, Strategy::Lower);

        assert_eq!((result.profit1, result.profit2), (5_000, 5_000));
        assert_eq!(result.market_share1, 0.5);
        assert_eq!(result.market_share2, 0.5);
        assert!(!game.is_equilibrium(Strategy::Lower, Strategy::Lower));
    }

    #[test]
    fn raising_against_a_price_cut_loses_five_sixths_of_the_market() {
        let game = PayoffGame::shipped().unwrap();

        let result = game.resolve(Strategy::Raise, Strategy::Lower);

        assert_eq!((result.profit1, result.profit2), (2_000, 10_000));
        assert!((result.market_share1 - 1.0 / 6.0).abs() < SHARE_TOLERANCE);
        assert!((result.market_share2 - 5.0 / 6.0).abs() < SHARE_TOLERANCE);
    }

    #[test]
    fn mutual_maintain_is_the_flagged_equilibrium() {
        let game = PayoffGame::shipped().unwrap();

        let result = game.resolve(Strategy::Maintain, Strategy::Maintain);

        assert_eq!((result.profit1, result.profit2), (7_000, 7_000));
        assert_eq!(result.market_share1, 0.5);
        assert!(game.is_equilibrium(Strategy::Maintain, Strategy::Maintain));
    }

    #[test]
    fn only_mutual_maintain_is_flagged() {
        let game = PayoffGame::shipped().unwrap();

        let flagged: Vec<_> = game
            .table()
            .cells()
            .filter(|&(a, b, _)| game.is_equilibrium(a, b))
            .map(|(a, b, _)| (a, b))
            .collect();

        assert_eq!(flagged, vec![(Strategy::Maintain, Strategy::Maintain)]);
    }

    proptest! {
        #[test]
        fn shares_sum_to_one_for_every_pair(b1 in any_strategy(), b2 in any_strategy()) {
            let game = PayoffGame::shipped().unwrap();
            let result = game.resolve(b1, b2);

            prop_assert!(result.market_share1 >= 0.0 && result.market_share2 >= 0.0);
            prop_assert!((result.market_share1 + result.market_share2 - 1.0).abs() < SHARE_TOLERANCE);
        }

        #[test]
        fn resolve_matches_table_entry(b1 in any_strategy(), b2 in any_strategy()) {
            let game = PayoffGame::shipped().unwrap();
            let entry = game.table().entry(b1, b2);
            let result = game.resolve(b1, b2);

            prop_assert_eq!(result.profit1, entry.profit1);
            prop_assert_eq!(result.profit2, entry.profit2);
        }
    }
}
