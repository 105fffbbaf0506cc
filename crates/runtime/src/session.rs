use std::fmt;

use core_game::{PayoffGame, RoundResult};
use serde::Serialize;
use strategy::{Brand, Strategy};

use crate::logging::{FacadeLogWriter, SessionLogEvent, SessionLogEventKind, SessionLogWriter};

pub const FIRST_ROUND: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundPhase {
    AwaitingChoices,
    ReadyToPlay,
    RoundComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundState {
    pub round: u32,
    pub brand1_choice: Option<Strategy>,
    pub brand2_choice: Option<Strategy>,
    pub is_active: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::starting(FIRST_ROUND)
    }
}

impl RoundState {
    fn starting(round: u32) -> Self {
        Self {
            round,
            brand1_choice: None,
            brand2_choice: None,
            is_active: true,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        match (self.is_active, self.brand1_choice, self.brand2_choice) {
            (false, _, _) => RoundPhase::RoundComplete,
            (true, Some(_), Some(_)) => RoundPhase::ReadyToPlay,
            (true, _, _) => RoundPhase::AwaitingChoices,
        }
    }

    pub fn choice(&self, brand: Brand) -> Option<Strategy> {
        match brand {
            Brand::Brand1 => self.brand1_choice,
            Brand::Brand2 => self.brand2_choice,
        }
    }

    fn choice_mut(&mut self, brand: Brand) -> &mut Option<Strategy> {
        match brand {
            Brand::Brand1 => &mut self.brand1_choice,
            Brand::Brand2 => &mut self.brand2_choice,
        }
    }
}

/// Snapshot of one resolved round. Never edited once appended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub round: u32,
    pub brand1_choice: Strategy,
    pub brand2_choice: Strategy,
    pub result: RoundResult,
    pub equilibrium: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayOutcome {
    pub entry: HistoryEntry,
    pub equilibrium: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError {
    RoundNotActive,
    ChoiceMissing(Brand),
    RoundNotComplete,
    RoundOverflow,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundNotActive => write!(f, "the round has already been played"),
            Self::ChoiceMissing(brand) => write!(f, "{brand} has not chosen a strategy yet"),
            Self::RoundNotComplete => write!(f, "the current round has not been played yet"),
            Self::RoundOverflow => write!(f, "round counter cannot advance any further"),
        }
    }
}

impl std::error::Error for TransitionError {}

/// Single-actor controller for the price-war rounds.
///
/// A rejected transition leaves every field untouched.
#[derive(Debug)]
pub struct GameSession<L: SessionLogWriter = FacadeLogWriter> {
    game: PayoffGame,
    state: RoundState,
    last_result: Option<RoundResult>,
    history: Vec<HistoryEntry>,
    log_writer: L,
}

impl GameSession<FacadeLogWriter> {
    pub fn new(game: PayoffGame) -> Self {
        Self::with_log_writer(game, FacadeLogWriter::new())
    }
}

impl<L: SessionLogWriter> GameSession<L> {
    pub fn with_log_writer(game: PayoffGame, log_writer: L) -> Self {
        Self {
            game,
            state: RoundState::default(),
            last_result: None,
            history: Vec::new(),
            log_writer,
        }
    }

    pub fn game(&self) -> &PayoffGame {
        &self.game
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn last_result(&self) -> Option<RoundResult> {
        self.last_result
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn log_writer(&self) -> &L {
        &self.log_writer
    }

    pub fn select_strategy(
        &mut self,
        brand: Brand,
        strategy: Strategy,
    ) -> Result<RoundState, TransitionError> {
        if !self.state.is_active {
            return Err(self.reject(TransitionError::RoundNotActive));
        }

        *self.state.choice_mut(brand) = Some(strategy);
        self.log(SessionLogEventKind::StrategySelected { brand, strategy });
        Ok(self.state)
    }

    pub fn play(&mut self) -> Result<PlayOutcome, TransitionError> {
        if !self.state.is_active {
            return Err(self.reject(TransitionError::RoundNotActive));
        }
        let Some(brand1) = self.state.brand1_choice else {
            return Err(self.reject(TransitionError::ChoiceMissing(Brand::Brand1)));
        };
        let Some(brand2) = self.state.brand2_choice else {
            return Err(self.reject(TransitionError::ChoiceMissing(Brand::Brand2)));
        };

        let result = self.game.resolve(brand1, brand2);
        let equilibrium = self.game.is_equilibrium(brand1, brand2);
        let entry = HistoryEntry {
            round: self.state.round,
            brand1_choice: brand1,
            brand2_choice: brand2,
            result,
            equilibrium,
        };

        self.history.push(entry);
        self.last_result = Some(result);
        self.state.is_active = false;

        self.log(SessionLogEventKind::RoundPlayed { brand1, brand2 });
        if equilibrium {
            self.log(SessionLogEventKind::EquilibriumReached { brand1, brand2 });
        }

        Ok(PlayOutcome { entry, equilibrium })
    }

    pub fn advance_round(&mut self) -> Result<RoundState, TransitionError> {
        if self.state.phase() != RoundPhase::RoundComplete {
            return Err(self.reject(TransitionError::RoundNotComplete));
        }
        let Some(next_round) = self.state.round.checked_add(1) else {
            return Err(self.reject(TransitionError::RoundOverflow));
        };

        self.state = RoundState::starting(next_round);
        self.last_result = None;
        self.log(SessionLogEventKind::RoundAdvanced);
        Ok(self.state)
    }

    /// Discards choices, the last result and the whole history.
    pub fn reset(&mut self) -> RoundState {
        self.state = RoundState::default();
        self.last_result = None;
        self.history.clear();
        self.log(SessionLogEventKind::GameReset);
        self.state
    }

    fn log(&mut self, kind: SessionLogEventKind) {
        self.log_writer
            .write(SessionLogEvent::new(self.state.round, kind));
    }

    fn reject(&mut self, err: TransitionError) -> TransitionError {
        self.log(SessionLogEventKind::TransitionRejected(err));
        err
    }

    #[cfg(test)]
    pub(crate) fn with_round_for_test(game: PayoffGame, log_writer: L, round: u32) -> Self {
        let mut session = Self::with_log_writer(game, log_writer);
        session.state = RoundState::starting(round);
        session
    }
}
