use strategy::Strategy::{self, Lower, Maintain, Raise};

use crate::payoff::PayoffEntry;

/// Profits in euros, brand 1 first.
pub const SHIPPED_CELLS: [(Strategy, Strategy, PayoffEntry); 9] = [
    (Lower, Lower, PayoffEntry::new(5_000, 5_000)),
    (Lower, Maintain, PayoffEntry::new(8_000, 3_000)),
    (Lower, Raise, PayoffEntry::new(10_000, 2_000)),
    (Maintain, Lower, PayoffEntry::new(3_000, 8_000)),
    (Maintain, Maintain, PayoffEntry::new(7_000, 7_000)),
    (Maintain, Raise, PayoffEntry::new(9_000, 5_000)),
    (Raise, Lower, PayoffEntry::new(2_000, 10_000)),
    (Raise, Maintain, PayoffEntry::new(5_000, 9_000)),
    (Raise, Raise, PayoffEntry::new(8_000, 8_000)),
];

pub const SHIPPED_EQUILIBRIA: [(Strategy, Strategy); 1] = [(Maintain, Maintain)];
