use std::sync::{Arc, Mutex, MutexGuard};

use core_game::{PayoffGame, RoundResult};
use runtime::{export::history_csv, GameSession};
use strategy::{Brand, Strategy};
use tokio::sync::broadcast;

use crate::{
    error::ApiError,
    views::{BrandNames, GameSnapshot, HistoryResponse, PayoffMatrixResponse, PlayResponse},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum GameEvent {
    Connected {
        round: u32,
    },
    StrategySelected {
        round: u32,
        brand: Brand,
        strategy: Strategy,
    },
    RoundPlayed {
        round: u32,
        brand1: Strategy,
        brand2: Strategy,
        result: RoundResult,
    },
    EquilibriumReached {
        round: u32,
        brand1: Strategy,
        brand2: Strategy,
    },
    RoundAdvanced {
        round: u32,
    },
    GameReset,
}

impl GameEvent {
    pub fn connected(round: u32) -> Self {
        Self::Connected { round }
    }
}

/// Shared handle to the single game session served by this process.
#[derive(Clone, Debug)]
pub struct AppState {
    session: Arc<Mutex<GameSession>>,
    events_tx: broadcast::Sender<GameEvent>,
    brand_names: Arc<BrandNames>,
}

impl AppState {
    pub fn new(game: PayoffGame, brand_names: BrandNames) -> Self {
        let (events_tx, _) = broadcast::channel(256);
        Self {
            session: Arc::new(Mutex::new(GameSession::new(game))),
            events_tx,
            brand_names: Arc::new(brand_names),
        }
    }

    pub fn brand_names(&self) -> &BrandNames {
        &self.brand_names
    }

    pub fn snapshot(&self) -> Result<GameSnapshot, ApiError> {
        let session = self.lock_session()?;
        Ok(GameSnapshot::capture(&*session, &self.brand_names))
    }

    pub fn select_strategy(&self, brand: Brand, strategy: Strategy) -> Result<GameSnapshot, ApiError> {
        let mut session = self.lock_session()?;
        let state = session.select_strategy(brand, strategy)?;
        let snapshot = GameSnapshot::capture(&*session, &self.brand_names);
        drop(session);

        self.publish_event(GameEvent::StrategySelected {
            round: state.round,
            brand,
            strategy,
        });
        Ok(snapshot)
    }

    pub fn play(&self) -> Result<PlayResponse, ApiError> {
        let mut session = self.lock_session()?;
        let outcome = session.play()?;
        let game = GameSnapshot::capture(&*session, &self.brand_names);
        drop(session);

        let entry = outcome.entry;
        self.publish_event(GameEvent::RoundPlayed {
            round: entry.round,
            brand1: entry.brand1_choice,
            brand2: entry.brand2_choice,
            result: entry.result,
        });
        if outcome.equilibrium {
            self.publish_event(GameEvent::EquilibriumReached {
                round: entry.round,
                brand1: entry.brand1_choice,
                brand2: entry.brand2_choice,
            });
        }

        Ok(PlayResponse {
            game,
            entry,
            equilibrium: outcome.equilibrium,
        })
    }

    pub fn advance_round(&self) -> Result<GameSnapshot, ApiError> {
        let mut session = self.lock_session()?;
        let state = session.advance_round()?;
        let snapshot = GameSnapshot::capture(&*session, &self.brand_names);
        drop(session);

        self.publish_event(GameEvent::RoundAdvanced { round: state.round });
        Ok(snapshot)
    }

    /// Destructive; callers must have obtained confirmation first.
    pub fn reset(&self, confirmed: bool) -> Result<GameSnapshot, ApiError> {
        if !confirmed {
            return Err(ApiError::ResetNotConfirmed);
        }

        let mut session = self.lock_session()?;
        session.reset();
        let snapshot = GameSnapshot::capture(&*session, &self.brand_names);
        drop(session);

        self.publish_event(GameEvent::GameReset);
        Ok(snapshot)
    }

    pub fn payoff_matrix(&self) -> Result<PayoffMatrixResponse, ApiError> {
        let session = self.lock_session()?;
        Ok(PayoffMatrixResponse::from_game(session.game()))
    }

    pub fn history(&self) -> Result<HistoryResponse, ApiError> {
        let session = self.lock_session()?;
        Ok(HistoryResponse::from_history(session.history()))
    }

    pub fn history_csv(&self) -> Result<String, ApiError> {
        let session = self.lock_session()?;
        history_csv(session.history()).map_err(ApiError::Export)
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<GameEvent> {
        self.events_tx.subscribe()
    }

    /// Returns the number of subscribers that received the event.
    pub fn publish_event(&self, event: GameEvent) -> usize {
        self.events_tx.send(event).unwrap_or(0)
    }

    fn lock_session(&self) -> Result<MutexGuard<'_, GameSession>, ApiError> {
        self.session.lock().map_err(|_| ApiError::SessionUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use core_game::PayoffGame;
    use strategy::{Brand, Strategy};

    use super::{AppState, GameEvent};
    use crate::{error::ApiError, views::BrandNames};

    fn state() -> AppState {
        AppState::new(PayoffGame::shipped().unwrap(), BrandNames::default())
    }

    #[test]
    fn unconfirmed_reset_keeps_history() {
        let state = state();
        state.select_strategy(Brand::Brand1, Strategy::Lower).unwrap();
        state.select_strategy(Brand::Brand2, Strategy::Lower).unwrap();
        state.play().unwrap();

        let err = state.reset(false).unwrap_err();

        assert!(matches!(err, ApiError::ResetNotConfirmed));
        assert_eq!(state.history().unwrap().entries.len(), 1);
    }

    #[test]
    fn equilibrium_play_publishes_played_then_notice() {
        let state = state();
        let mut events = state.subscribe_events();
        state
            .select_strategy(Brand::Brand1, Strategy::Maintain)
            .unwrap();
        state
            .select_strategy(Brand::Brand2, Strategy::Maintain)
            .unwrap();

        state.play().unwrap();

        assert!(matches!(events.try_recv().unwrap(), GameEvent::StrategySelected { .. }));
        assert!(matches!(events.try_recv().unwrap(), GameEvent::StrategySelected { .. }));
        assert!(matches!(events.try_recv().unwrap(), GameEvent::RoundPlayed { round: 1, .. }));
        assert_eq!(
            events.try_recv().unwrap(),
            GameEvent::EquilibriumReached {
                round: 1,
                brand1: Strategy::Maintain,
                brand2: Strategy::Maintain,
            }
        );
    }

    #[test]
    fn rejected_transition_publishes_nothing() {
        let state = state();
        let mut events = state.subscribe_events();

        let err = state.advance_round().unwrap_err();

        assert!(matches!(err, ApiError::Transition(_)));
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn publishing_without_subscribers_is_not_an_error() {
        let state = state();

        assert_eq!(state.publish_event(GameEvent::GameReset), 0);
    }
}
