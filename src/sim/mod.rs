//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Timestep supplied by the caller, capped per tick
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod boss;
pub mod collision;
pub mod input;
pub mod progression;
pub mod rng;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use input::{Direction, InputMapper, MoveIntent};
pub use rng::{RandomSource, ScriptedRng, SeededRng};
pub use snapshot::{BossView, Snapshot};
pub use spawner::Emitter;
pub use state::{
    Boss, BossPhase, Dropper, GameEvent, GamePhase, GameState, Gift, GiftKind, Hazard, HazardKind,
    Player,
};
pub use tick::{TickInput, TickOutcome, tick};
