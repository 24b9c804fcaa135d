// Match state: turn order, recorded throws for the current round, cumulative score

use crate::config::WINS_TO_TAKE_MATCH;
use crate::error::GameError;
use crate::round;
use crate::types::{MatchScore, PlayerId, RoundOutcome, ThrowRecord};
use crate::{debug_match, debug_round};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingPlayer1Throw,
    AwaitingPlayer2Throw,
    MatchComplete(PlayerId),
}

/// Distances recorded so far in the round being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundThrows {
    pub player1: Option<u32>,
    pub player2: Option<u32>,
}

impl RoundThrows {
    pub fn distance(&self, player: PlayerId) -> Option<u32> {
        match player {
            PlayerId::One => self.player1,
            PlayerId::Two => self.player2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchState {
    score: MatchScore,
    throws: RoundThrows,
    winner: Option<PlayerId>,
    round: u32,
    last_round: Option<RoundOutcome>,
}

impl MatchState {
    pub fn new() -> Self {
        MatchState {
            score: MatchScore::default(),
            throws: RoundThrows::default(),
            winner: None,
            round: 1,
            last_round: None,
        }
    }

    pub fn score(&self) -> MatchScore {
        self.score
    }

    pub fn throws(&self) -> RoundThrows {
        self.throws
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Number of the round in progress (or the final round once complete).
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn last_round(&self) -> Option<RoundOutcome> {
        self.last_round
    }

    pub fn phase(&self) -> Phase {
        if let Some(winner) = self.winner {
            Phase::MatchComplete(winner)
        } else if self.throws.player1.is_none() {
            Phase::AwaitingPlayer1Throw
        } else {
            Phase::AwaitingPlayer2Throw
        }
    }

    /// Whether turn order lets `player` throw right now.
    pub fn can_throw(&self, player: PlayerId) -> bool {
        matches!(
            (self.phase(), player),
            (Phase::AwaitingPlayer1Throw, PlayerId::One) | (Phase::AwaitingPlayer2Throw, PlayerId::Two)
        )
    }

    /// Record a landed throw.
    ///
    /// Out-of-turn throws and throws after the match is decided are ignored.
    /// Player 2's throw closes the round: both distances are consumed, the
    /// round winner scores, and the outcome is returned.
    pub fn record_throw(&mut self, record: ThrowRecord) -> Result<Option<RoundOutcome>, GameError> {
        if !self.can_throw(record.player) {
            debug_match!(
                "Ignoring {}m from {} in phase {:?}",
                record.distance_meters,
                record.player,
                self.phase()
            );
            return Ok(None);
        }
        round::check_distance(record.player, record.distance_meters)?;

        match record.player {
            PlayerId::One => {
                self.throws.player1 = Some(record.distance_meters);
                debug_match!("Round {}: {} recorded {}m", self.round, record.player, record.distance_meters);
                return Ok(None);
            }
            PlayerId::Two => self.throws.player2 = Some(record.distance_meters),
        }
        let (Some(player1_distance), Some(player2_distance)) = (self.throws.player1, self.throws.player2) else {
            return Ok(None);
        };

        let winner = round::resolve(player1_distance, player2_distance)?;
        self.throws = RoundThrows::default();
        self.score.award(winner);

        let outcome = RoundOutcome {
            round: self.round,
            winner,
            player1_distance,
            player2_distance,
        };
        self.last_round = Some(outcome);
        debug_round!(
            "Round {}: {}m vs {}m, {} takes it ({}-{})",
            outcome.round,
            player1_distance,
            player2_distance,
            winner,
            self.score.player1_wins,
            self.score.player2_wins
        );

        if self.score.wins(winner) >= WINS_TO_TAKE_MATCH {
            self.winner = Some(winner);
            info!(
                "{} wins the match {}-{}",
                winner, self.score.player1_wins, self.score.player2_wins
            );
        } else {
            self.round += 1;
        }

        Ok(Some(outcome))
    }

    /// Back to a fresh match.
    pub fn reset(&mut self) {
        *self = MatchState::new();
        info!("Match reset");
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throw(player: PlayerId, distance_meters: u32) -> ThrowRecord {
        ThrowRecord {
            player,
            distance_meters,
        }
    }

    // Plays one full round and returns its outcome
    fn play_round(state: &mut MatchState, p1: u32, p2: u32) -> Option<RoundOutcome> {
        assert_eq!(state.record_throw(throw(PlayerId::One, p1)), Ok(None));
        state.record_throw(throw(PlayerId::Two, p2)).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = MatchState::new();
        assert_eq!(state.phase(), Phase::AwaitingPlayer1Throw);
        assert_eq!(state.score(), MatchScore::default());
        assert_eq!(state.winner(), None);
        assert_eq!(state.round(), 1);
        assert!(state.can_throw(PlayerId::One));
        assert!(!state.can_throw(PlayerId::Two));
    }

    #[test]
    fn test_turn_order() {
        let mut state = MatchState::new();
        // Player 2 cannot open the round
        assert_eq!(state.record_throw(throw(PlayerId::Two, 90)), Ok(None));
        assert_eq!(state.throws(), RoundThrows::default());

        state.record_throw(throw(PlayerId::One, 75)).unwrap();
        assert_eq!(state.phase(), Phase::AwaitingPlayer2Throw);
        assert!(!state.can_throw(PlayerId::One));
        assert!(state.can_throw(PlayerId::Two));

        // Second throw from Player 1 in the same round is ignored
        assert_eq!(state.record_throw(throw(PlayerId::One, 99)), Ok(None));
        assert_eq!(state.throws().player1, Some(75));
    }

    #[test]
    fn test_round_clears_throws() {
        let mut state = MatchState::new();
        let outcome = play_round(&mut state, 80, 65).unwrap();
        assert_eq!(
            outcome,
            RoundOutcome {
                round: 1,
                winner: PlayerId::One,
                player1_distance: 80,
                player2_distance: 65,
            }
        );
        assert_eq!(state.throws(), RoundThrows::default());
        assert_eq!(state.score(), MatchScore { player1_wins: 1, player2_wins: 0 });
        assert_eq!(state.phase(), Phase::AwaitingPlayer1Throw);
        assert_eq!(state.round(), 2);
        assert_eq!(state.last_round(), Some(outcome));
    }

    #[test]
    fn test_tie_round() {
        let mut state = MatchState::new();
        let outcome = play_round(&mut state, 70, 70).unwrap();
        assert_eq!(outcome.winner, PlayerId::One);
    }

    #[test]
    fn test_match_completes_at_three_wins() {
        let mut state = MatchState::new();
        play_round(&mut state, 80, 65);
        play_round(&mut state, 80, 65);
        assert_eq!(state.winner(), None);
        play_round(&mut state, 80, 65);

        assert_eq!(state.winner(), Some(PlayerId::One));
        assert_eq!(state.phase(), Phase::MatchComplete(PlayerId::One));
        assert_eq!(state.score(), MatchScore { player1_wins: 3, player2_wins: 0 });
        assert_eq!(state.round(), 3);
    }

    #[test]
    fn test_no_changes_after_completion() {
        let mut state = MatchState::new();
        for _ in 0..3 {
            play_round(&mut state, 55, 95);
        }
        assert_eq!(state.winner(), Some(PlayerId::Two));
        let score = state.score();

        assert!(!state.can_throw(PlayerId::One));
        assert!(!state.can_throw(PlayerId::Two));
        assert_eq!(state.record_throw(throw(PlayerId::One, 100)), Ok(None));
        assert_eq!(state.record_throw(throw(PlayerId::Two, 100)), Ok(None));
        assert_eq!(state.score(), score);
        assert_eq!(state.throws(), RoundThrows::default());
    }

    #[test]
    fn test_close_match_goes_the_distance() {
        let mut state = MatchState::new();
        play_round(&mut state, 90, 60); // 1-0
        play_round(&mut state, 60, 90); // 1-1
        play_round(&mut state, 60, 90); // 1-2
        play_round(&mut state, 90, 60); // 2-2
        assert_eq!(state.winner(), None);
        play_round(&mut state, 61, 62); // 2-3
        assert_eq!(state.winner(), Some(PlayerId::Two));
        assert_eq!(state.round(), 5);
    }

    #[test]
    fn test_reset() {
        let mut state = MatchState::new();
        for _ in 0..3 {
            play_round(&mut state, 80, 65);
        }
        state.reset();
        assert_eq!(state.score(), MatchScore::default());
        assert_eq!(state.winner(), None);
        assert_eq!(state.round(), 1);
        assert_eq!(state.last_round(), None);
        assert_eq!(state.phase(), Phase::AwaitingPlayer1Throw);

        // Mid-round reset drops the pending throw
        state.record_throw(throw(PlayerId::One, 88)).unwrap();
        state.reset();
        assert_eq!(state.throws(), RoundThrows::default());
    }

    #[test]
    fn test_invalid_distance_keeps_round_open() {
        let mut state = MatchState::new();
        state.record_throw(throw(PlayerId::One, 70)).unwrap();
        assert!(state.record_throw(throw(PlayerId::Two, 140)).is_err());
        assert_eq!(state.throws().player1, Some(70));
        assert_eq!(state.score(), MatchScore::default());

        let mut state = MatchState::new();
        assert!(state.record_throw(throw(PlayerId::One, 20)).is_err());
        assert_eq!(state.phase(), Phase::AwaitingPlayer1Throw);
    }
}
