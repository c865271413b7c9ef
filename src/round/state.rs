//! Turn state machine states.

/// State of a turn in progress.
///
/// Both turn machines start in `Playing` and finish in one of the two
/// terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// The party may still act or draw.
    Playing,
    /// The party stood; the hand is final.
    Standing,
    /// The total went over 21; automatic loss for the party.
    Bust,
}

impl TurnState {
    /// Whether the machine can take no further step.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}
