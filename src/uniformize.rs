//! Entry-level uniformization: translate a [`ChannelEntry`] of one plan into the matching row of
//! the other plan.
//!
//! These functions are pure lookups over `const` tables. They never log and never allocate.
use core::fmt;

use crate::plan::{eu868, ChannelEntry, Direction, Plan};
use crate::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Error {
    /// The input does not name any row of the table.
    UnsupportedChannel,
    /// The row exists but does not carry the requested datarate.
    UnsupportedDatarate,
    /// The row exists but has no counterpart on the other plan (EU868 channel 2 SF7BW250).
    Unmapped,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedChannel => {
                f.write_str("channel is not part of the uniformization table")
            }
            Error::UnsupportedDatarate => f.write_str("datarate is not carried by the channel"),
            Error::Unmapped => f.write_str("channel has no counterpart on the other plan"),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;

/// Maps an EU868 (TTN) uplink row to its Helium US915 uplink row.
///
/// ```
/// use lorawan_uniformize::{plan::eu868, uniformize, ChannelIndex};
///
/// let helium = uniformize::uplink_to_helium(&eu868::UPLINK_CHANNELS[0]).unwrap();
/// assert_eq!(helium.index, ChannelIndex::Numbered(48));
/// assert_eq!(helium.frequency, 911_900_000);
/// ```
pub fn uplink_to_helium(entry: &ChannelEntry) -> Result<ChannelEntry> {
    translate(Direction::Uplink, Plan::EU868, entry)
}

/// Maps a Helium US915 uplink row back to its EU868 (TTN) uplink row.
pub fn uplink_to_ttn(entry: &ChannelEntry) -> Result<ChannelEntry> {
    translate(Direction::Uplink, Plan::US915, entry)
}

/// Maps a Helium US915 downlink row to its EU868 (TTN) downlink row.
pub fn downlink_to_ttn(entry: &ChannelEntry) -> Result<ChannelEntry> {
    translate(Direction::Downlink, Plan::US915, entry)
}

/// Maps an EU868 (TTN) downlink row to its Helium US915 downlink row.
pub fn downlink_to_helium(entry: &ChannelEntry) -> Result<ChannelEntry> {
    translate(Direction::Downlink, Plan::EU868, entry)
}

/// Forward mapping of the EU868 uplink channel 2 SF7BW250 mode. Always `Err(Error::Unmapped)`:
/// there is no static US915 frequency for it and none is guessed.
pub fn eu868_uplink_channel2_fallback() -> Result<ChannelEntry> {
    uplink_to_helium(&eu868::UPLINK_CHANNEL_2_SF7BW250)
}

fn translate(direction: Direction, from: Plan, entry: &ChannelEntry) -> Result<ChannelEntry> {
    if entry.plan != from || entry.direction != direction {
        return Err(Error::UnsupportedChannel);
    }
    let rule = rules::find(direction, from, entry).ok_or(Error::UnsupportedChannel)?;
    rule.counterpart(from).copied().ok_or(Error::Unmapped)
}
