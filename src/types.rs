use std::fmt;

/// One of the two competitors. Player 1 always throws first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Player number as shown on screen (1 or 2)
    pub fn number(self) -> u32 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Horizontal throwing direction on screen: Player 1 throws right, Player 2 left.
    pub fn facing(self) -> f32 {
        match self {
            PlayerId::One => 1.0,
            PlayerId::Two => -1.0,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A completed throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowRecord {
    pub player: PlayerId,
    pub distance_meters: u32,
}

/// Round wins per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchScore {
    pub player1_wins: u32,
    pub player2_wins: u32,
}

impl MatchScore {
    pub fn wins(&self, player: PlayerId) -> u32 {
        match player {
            PlayerId::One => self.player1_wins,
            PlayerId::Two => self.player2_wins,
        }
    }

    pub(crate) fn award(&mut self, player: PlayerId) {
        match player {
            PlayerId::One => self.player1_wins += 1,
            PlayerId::Two => self.player2_wins += 1,
        }
    }
}

/// Result of one resolved round, kept around for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round: u32,
    pub winner: PlayerId,
    pub player1_distance: u32,
    pub player2_distance: u32,
}

/// Actions the game controller understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Throw(PlayerId),
    Reset,
    ToggleRules,
    Quit,
}
