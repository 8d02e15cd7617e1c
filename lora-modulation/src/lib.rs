#![no_std]
//! LoRa modulation characteristics used by the LoRaWAN regional channel plans.

use core::fmt;

#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Channel width.
pub enum Bandwidth {
    _125KHz,
    _250KHz,
    _500KHz,
}

impl Bandwidth {
    /// Channel width in hertz.
    pub const fn hz(self) -> u32 {
        match self {
            Bandwidth::_125KHz => 125_000,
            Bandwidth::_250KHz => 250_000,
            Bandwidth::_500KHz => 500_000,
        }
    }

    /// Channel width in kilohertz, as written in `SF7BW125`.
    pub const fn khz(self) -> u32 {
        self.hz() / 1000
    }

    pub const fn from_khz(khz: u32) -> Option<Self> {
        match khz {
            125 => Some(Bandwidth::_125KHz),
            250 => Some(Bandwidth::_250KHz),
            500 => Some(Bandwidth::_500KHz),
            _ => None,
        }
    }
}

impl From<Bandwidth> for u32 {
    fn from(value: Bandwidth) -> Self {
        value.hz()
    }
}

impl TryFrom<u32> for Bandwidth {
    type Error = InvalidValue;

    /// Converts a width in hertz.
    fn try_from(hz: u32) -> Result<Self, Self::Error> {
        match hz {
            125_000 => Ok(Bandwidth::_125KHz),
            250_000 => Ok(Bandwidth::_250KHz),
            500_000 => Ok(Bandwidth::_500KHz),
            _ => Err(InvalidValue(hz)),
        }
    }
}

impl fmt::Display for Bandwidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.khz())
    }
}

#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Controls the chirp rate. Lower values are slower bandwidth, but more robust.
///
/// Variants are declared in ascending order so that `Ord` follows the numeric value.
pub enum SpreadingFactor {
    _5,
    _6,
    _7,
    _8,
    _9,
    _10,
    _11,
    _12,
}

impl SpreadingFactor {
    pub const fn value(self) -> u8 {
        match self {
            SpreadingFactor::_5 => 5,
            SpreadingFactor::_6 => 6,
            SpreadingFactor::_7 => 7,
            SpreadingFactor::_8 => 8,
            SpreadingFactor::_9 => 9,
            SpreadingFactor::_10 => 10,
            SpreadingFactor::_11 => 11,
            SpreadingFactor::_12 => 12,
        }
    }

    pub const fn from_value(sf: u8) -> Option<Self> {
        match sf {
            5 => Some(SpreadingFactor::_5),
            6 => Some(SpreadingFactor::_6),
            7 => Some(SpreadingFactor::_7),
            8 => Some(SpreadingFactor::_8),
            9 => Some(SpreadingFactor::_9),
            10 => Some(SpreadingFactor::_10),
            11 => Some(SpreadingFactor::_11),
            12 => Some(SpreadingFactor::_12),
            _ => None,
        }
    }
}

impl From<SpreadingFactor> for u32 {
    fn from(sf: SpreadingFactor) -> Self {
        sf.value() as u32
    }
}

impl TryFrom<u32> for SpreadingFactor {
    type Error = InvalidValue;

    fn try_from(sf: u32) -> Result<Self, Self::Error> {
        u8::try_from(sf).ok().and_then(SpreadingFactor::from_value).ok_or(InvalidValue(sf))
    }
}

impl fmt::Display for SpreadingFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A numeric value that does not name any [`Bandwidth`] or [`SpreadingFactor`].
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidValue(pub u32);
