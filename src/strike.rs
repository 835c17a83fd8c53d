//! Strike kinds and the events that carry them into the engine.

use core::fmt;

use crate::coin::Pocketed;
use crate::error::UnknownStrikeCode;

/// The six recognized kinds of strike.
///
/// Each kind has a stable wire code, in declaration order starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrikeKind {
    /// One or more black or white coins pocketed. Worth 1 point.
    Strike,
    /// Several coins pocketed in one strike. Worth 2 points.
    MultiStrike,
    /// The red coin pocketed. Worth 3 points.
    RedStrike,
    /// The striker itself went into a pocket. Costs 1 point and a fault.
    StrikerStrike,
    /// Coins knocked off the board. Costs 2 points and a fault.
    Defunct,
    /// Nothing pocketed.
    NoPocket,
}

impl StrikeKind {
    /// All kinds, ordered by wire code.
    pub const ALL: [Self; 6] = [
        Self::Strike,
        Self::MultiStrike,
        Self::RedStrike,
        Self::StrikerStrike,
        Self::Defunct,
        Self::NoPocket,
    ];

    /// Returns the wire code of this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `true` for kinds that can be rejected.
    #[must_use]
    pub const fn is_validated(self) -> bool {
        !matches!(self, Self::StrikerStrike | Self::NoPocket)
    }
}

impl TryFrom<u8> for StrikeKind {
    type Error = UnknownStrikeCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(UnknownStrikeCode(code))
    }
}

impl fmt::Display for StrikeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strike => "strike",
            Self::MultiStrike => "multi strike",
            Self::RedStrike => "red strike",
            Self::StrikerStrike => "striker strike",
            Self::Defunct => "defunct",
            Self::NoPocket => "no pocket",
        })
    }
}

/// A single strike reported to the engine.
///
/// The kind travels as a raw wire code so that producers can send codes the
/// engine does not recognize; those are logged and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StrikeEvent {
    /// Wire code of the strike kind.
    pub code: u8,
    /// Coins pocketed by the strike.
    pub pocketed: Pocketed,
}

impl StrikeEvent {
    /// Creates an event of a known kind.
    #[must_use]
    pub const fn new(kind: StrikeKind, pocketed: Pocketed) -> Self {
        Self::from_code(kind.code(), pocketed)
    }

    /// Creates an event from a raw wire code, which may be unrecognized.
    #[must_use]
    pub const fn from_code(code: u8, pocketed: Pocketed) -> Self {
        Self { code, pocketed }
    }

    /// A plain strike.
    #[must_use]
    pub const fn strike(pocketed: Pocketed) -> Self {
        Self::new(StrikeKind::Strike, pocketed)
    }

    /// A multi strike.
    #[must_use]
    pub const fn multi_strike(pocketed: Pocketed) -> Self {
        Self::new(StrikeKind::MultiStrike, pocketed)
    }

    /// A red strike.
    #[must_use]
    pub const fn red_strike() -> Self {
        Self::new(StrikeKind::RedStrike, Pocketed::NONE)
    }

    /// A striker strike.
    #[must_use]
    pub const fn striker_strike() -> Self {
        Self::new(StrikeKind::StrikerStrike, Pocketed::NONE)
    }

    /// A defunct strike.
    #[must_use]
    pub const fn defunct(pocketed: Pocketed) -> Self {
        Self::new(StrikeKind::Defunct, pocketed)
    }

    /// A strike that pocketed nothing.
    #[must_use]
    pub const fn no_pocket() -> Self {
        Self::new(StrikeKind::NoPocket, Pocketed::NONE)
    }

    /// Decodes the strike kind.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not one of the six known kinds.
    pub fn kind(&self) -> Result<StrikeKind, UnknownStrikeCode> {
        StrikeKind::try_from(self.code)
    }
}
