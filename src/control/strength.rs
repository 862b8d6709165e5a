//! Password Strength
//!
//! Length-based three-tier classification.

/// Minimum length for a medium password
pub const MEDIUM_MIN_LEN: usize = 10;

/// Minimum length for a strong password
pub const STRONG_MIN_LEN: usize = 20;

/// Strength tier, ordered weakest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Strength {
    #[default]
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Self::Weak, Self::Medium, Self::Strong];

    /// Status label shown under the swatches
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weak => "Too weak",
            Self::Medium => "Could be stronger",
            Self::Strong => "Strong password",
        }
    }

    /// Swatch position of this tier
    pub fn index(&self) -> usize {
        match self {
            Self::Weak => 0,
            Self::Medium => 1,
            Self::Strong => 2,
        }
    }

    /// Number of swatches lit at this tier
    pub fn lit_swatches(&self) -> usize {
        self.index() + 1
    }
}

/// Classify text by its character count
pub fn classify(text: &str) -> Strength {
    let len = text.chars().count();
    if len >= STRONG_MIN_LEN {
        Strength::Strong
    } else if len >= MEDIUM_MIN_LEN {
        Strength::Medium
    } else {
        Strength::Weak
    }
}
