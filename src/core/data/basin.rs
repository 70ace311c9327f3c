use crate::core::data::root_set::RootIndex;

/// Which root a starting point's Newton iteration settled on.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Basin {
    /// Diverged, ran out of iterations, or converged away from every root.
    #[default]
    Unknown,
    First,
    Second,
    Third,
}

impl Basin {
    const fn code(self) -> u8 {
        match self {
            Basin::Unknown => 0,
            Basin::First => 1,
            Basin::Second => 2,
            Basin::Third => 3,
        }
    }

    const fn from_code(code: u8) -> Self {
        match code {
            1 => Basin::First,
            2 => Basin::Second,
            3 => Basin::Third,
            _ => Basin::Unknown,
        }
    }
}

impl From<RootIndex> for Basin {
    fn from(index: RootIndex) -> Self {
        match index {
            RootIndex::First => Basin::First,
            RootIndex::Second => Basin::Second,
            RootIndex::Third => Basin::Third,
        }
    }
}

/// A basin paired with the iteration depth at which the solve stopped.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct BasinClassification {
    pub basin: Basin,
    pub depth: u32,
}

impl BasinClassification {
    #[must_use]
    pub const fn new(basin: Basin, depth: u32) -> Self {
        Self { basin, depth }
    }

    #[must_use]
    pub const fn unknown(depth: u32) -> Self {
        Self {
            basin: Basin::Unknown,
            depth,
        }
    }

    /// Packs into one word: basin code in bits 32..40, depth in the low 32 bits.
    #[must_use]
    pub const fn to_bits(self) -> u64 {
        ((self.basin.code() as u64) << 32) | self.depth as u64
    }

    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self {
            basin: Basin::from_code((bits >> 32) as u8),
            depth: bits as u32,
        }
    }
}
