pub mod export;
pub mod logging;
pub mod session;
pub mod summary;

pub use session::{
    GameSession, HistoryEntry, PlayOutcome, RoundPhase, RoundState, TransitionError, FIRST_ROUND,
};

pub fn module_ready() -> bool {
    true
}
