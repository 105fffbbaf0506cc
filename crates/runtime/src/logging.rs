use strategy::{Brand, Strategy};

use crate::session::TransitionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionLogEventKind {
    StrategySelected { brand: Brand, strategy: Strategy },
    RoundPlayed { brand1: Strategy, brand2: Strategy },
    EquilibriumReached { brand1: Strategy, brand2: Strategy },
    RoundAdvanced,
    GameReset,
    TransitionRejected(TransitionError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLogEvent {
    pub round: u32,
    pub kind: SessionLogEventKind,
}

impl SessionLogEvent {
    pub fn new(round: u32, kind: SessionLogEventKind) -> Self {
        Self { round, kind }
    }
}

pub trait SessionLogWriter {
    fn write(&mut self, event: SessionLogEvent);
}

#[derive(Debug, Default)]
pub struct InMemorySessionLogWriter {
    events: Vec<SessionLogEvent>,
}

impl InMemorySessionLogWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[SessionLogEvent] {
        &self.events
    }
}

impl SessionLogWriter for InMemorySessionLogWriter {
    fn write(&mut self, event: SessionLogEvent) {
        self.events.push(event);
    }
}

/// Forwards session events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct FacadeLogWriter;

impl FacadeLogWriter {
    pub fn new() -> Self {
        Self
    }
}

impl SessionLogWriter for FacadeLogWriter {
    fn write(&mut self, event: SessionLogEvent) {
        let round = event.round;
        match event.kind {
            SessionLogEventKind::StrategySelected { brand, strategy } => {
                log::info!("round {round}: {brand} selected {strategy}");
            }
            SessionLogEventKind::RoundPlayed { brand1, brand2 } => {
                log::info!("round {round}: played ({brand1}, {brand2})");
            }
            SessionLogEventKind::EquilibriumReached { brand1, brand2 } => {
                log::info!("round {round}: equilibrium reached at ({brand1}, {brand2})");
            }
            SessionLogEventKind::RoundAdvanced => {
                log::info!("round {round}: started");
            }
            SessionLogEventKind::GameReset => {
                log::info!("game reset");
            }
            SessionLogEventKind::TransitionRejected(err) => {
                log::debug!("round {round}: transition rejected: {err}");
            }
        }
    }
}
