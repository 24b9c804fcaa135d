use crate::config::{MAX_THROW_DISTANCE, MIN_THROW_DISTANCE};
use crate::error::GameError;
use crate::types::PlayerId;

/// Reject distances the throw generator can never produce.
pub(crate) fn check_distance(player: PlayerId, distance: u32) -> Result<(), GameError> {
    if (MIN_THROW_DISTANCE..=MAX_THROW_DISTANCE).contains(&distance) {
        Ok(())
    } else {
        Err(GameError::DistanceOutOfRange {
            player,
            distance,
            min: MIN_THROW_DISTANCE,
            max: MAX_THROW_DISTANCE,
        })
    }
}

/// Decide a round from both players' distances.
///
/// Player 2 must throw strictly further to win; an exact tie goes to Player 1.
pub fn resolve(player1_distance: u32, player2_distance: u32) -> Result<PlayerId, GameError> {
    check_distance(PlayerId::One, player1_distance)?;
    check_distance(PlayerId::Two, player2_distance)?;

    if player2_distance > player1_distance {
        Ok(PlayerId::Two)
    } else {
        Ok(PlayerId::One)
    }
}
