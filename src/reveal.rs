/// Fraction of a section that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root class added once the client bundle runs. Unseen sections are only
/// hidden under it, so a page whose bundle never loads stays fully visible.
pub const SCRIPTED_CLASS: &str = "js";

/// One-shot latch recording whether a section has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Unseen,
    Revealed,
}

impl Reveal {
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    /// Feeds one intersection observation into the latch.
    ///
    /// `Revealed` is terminal: once reached, no observation moves it back.
    pub fn observe(self, is_intersecting: bool, visible_ratio: f64) -> Self {
        match self {
            Self::Revealed => Self::Revealed,
            Self::Unseen if is_intersecting && visible_ratio >= REVEAL_THRESHOLD => {
                Self::Revealed
            }
            Self::Unseen => Self::Unseen,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Unseen => "reveal",
            Self::Revealed => "reveal is-revealed",
        }
    }
}
