pub mod pricing;
pub mod trend;

pub use pricing::{Brand, Strategy, UnknownStrategy};
pub use trend::{profit_trend, ProfitTrend};

pub fn module_ready() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use crate::{profit_trend, ProfitTrend, Strategy};

    #[test]
    fn undercutting_a_rival_trends_up() {
        let trend = profit_trend(Strategy::Lower, Strategy::Maintain);

        assert_eq!(trend, ProfitTrend::Up);
    }

    #[test]
    fn mutual_price_cuts_trend_down() {
        let trend = profit_trend(Strategy::Lower, Strategy::Lower);

        assert_eq!(trend, ProfitTrend::Down);
    }

    #[test]
    fn raising_against_a_price_cut_still_trends_up() {
        let trend = profit_trend(Strategy::Raise, Strategy::Lower);

        assert_eq!(trend, ProfitTrend::Up);
    }

    #[test]
    fn maintaining_or_mutual_raise_is_flat() {
        for other in Strategy::ALL {
            assert_eq!(profit_trend(Strategy::Maintain, other), ProfitTrend::Flat);
        }
        assert_eq!(
            profit_trend(Strategy::Raise, Strategy::Raise),
            ProfitTrend::Flat
        );
    }
}
