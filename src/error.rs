// Game error types: invariant violations in round resolution

use crate::types::PlayerId;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameError {
    #[error("{player} threw {distance}m, outside the {min}..={max}m range")]
    DistanceOutOfRange {
        player: PlayerId,
        distance: u32,
        min: u32,
        max: u32,
    },
}
