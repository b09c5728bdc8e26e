//! Chip generation tiers
//!
//! Every EVE chip belongs to one of three generations. Later generations add
//! display list instructions, registers and coprocessor commands, and in a few
//! places redefine an encoding. The active generation is chosen once and handed
//! to every table that depends on it.

use core::fmt;

/// EVE hardware generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Generation {
    /// FT810, FT811, FT812, FT813 (baseline)
    Gen2 = 2,
    /// BT815, BT816
    Gen3 = 3,
    /// BT817, BT818 and later
    Gen4 = 4,
}

/// A feature was used on a chip generation that does not provide it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// the feature was introduced after the active generation
    Requires {
        /// lowest generation providing the feature
        required: Generation,
        /// generation the caller configured
        active: Generation,
    },
    /// the feature was dropped before the active generation
    Withdrawn {
        /// last generation providing the feature
        last: Generation,
        /// generation the caller configured
        active: Generation,
    },
}

impl Generation {
    /// Numeric tier as used in chip documentation
    pub const fn tier(self) -> u8 {
        self as u8
    }

    /// Returns true if this generation provides features introduced in `since`
    pub const fn supports(self, since: Generation) -> bool {
        self as u8 >= since as u8
    }

    /// Fails with [`Unsupported::Requires`] unless this generation is at least `since`
    pub const fn require(self, since: Generation) -> Result<(), Unsupported> {
        if self.supports(since) {
            Ok(())
        } else {
            Err(Unsupported::Requires {
                required: since,
                active: self,
            })
        }
    }

    /// Fails with [`Unsupported::Withdrawn`] unless this generation is at most `last`
    pub const fn require_at_most(self, last: Generation) -> Result<(), Unsupported> {
        if last.supports(self) {
            Ok(())
        } else {
            Err(Unsupported::Withdrawn { last, active: self })
        }
    }
}

impl Default for Generation {
    /// Generation selected through the `gen3` / `gen4` crate features
    fn default() -> Self {
        if cfg!(feature = "gen4") {
            Generation::Gen4
        } else if cfg!(feature = "gen3") {
            Generation::Gen3
        } else {
            Generation::Gen2
        }
    }
}

impl TryFrom<u8> for Generation {
    type Error = u8;

    /// Tiers above 4 share the generation 4 feature set
    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        match tier {
            2 => Ok(Generation::Gen2),
            3 => Ok(Generation::Gen3),
            4.. => Ok(Generation::Gen4),
            _ => Err(tier),
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generation::Gen2 => write!(f, "EVE2 (FT81x)"),
            Generation::Gen3 => write!(f, "EVE3 (BT815/6)"),
            Generation::Gen4 => write!(f, "EVE4 (BT817/8)"),
        }
    }
}
