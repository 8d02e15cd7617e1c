//! Static pairings between TTN EU868 rows and Helium US915 rows.
use crate::plan::{eu868, us915, ChannelEntry, Direction, Plan};

/// What happens to the datarate of a packet crossing a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transform {
    /// Spreading factor and bandwidth are kept.
    Passthrough,
    /// Spreading factor is kept; bandwidth becomes the counterpart's (500 kHz on Helium,
    /// 125 kHz on TTN).
    NarrowBandwidth,
    /// Frequency and datarate are both replaced by the counterpart's single datarate.
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UniformizationRule {
    pub ttn: ChannelEntry,
    /// `None` for the documented gap: TTN channel 2 SF7BW250.
    pub helium: Option<ChannelEntry>,
    pub transform: Transform,
}

impl UniformizationRule {
    const fn pair(ttn: ChannelEntry, helium: ChannelEntry, transform: Transform) -> Self {
        Self { ttn, helium: Some(helium), transform }
    }

    const fn gap(ttn: ChannelEntry) -> Self {
        Self { ttn, helium: None, transform: Transform::Passthrough }
    }

    /// The row of `plan` on this rule.
    pub fn side(&self, plan: Plan) -> Option<&ChannelEntry> {
        match plan {
            Plan::EU868 => Some(&self.ttn),
            Plan::US915 => self.helium.as_ref(),
        }
    }

    /// The row on the other side of `plan`.
    pub fn counterpart(&self, plan: Plan) -> Option<&ChannelEntry> {
        match plan {
            Plan::EU868 => self.helium.as_ref(),
            Plan::US915 => Some(&self.ttn),
        }
    }
}

/// EU868 uplink channel `n` (1..=8) pairs with Helium uplink channel `n + UPLINK_INDEX_OFFSET`.
pub const UPLINK_INDEX_OFFSET: u8 = us915::FIRST_UPLINK_CHANNEL - 1;

const fn uplink(i: usize) -> UniformizationRule {
    UniformizationRule::pair(
        eu868::UPLINK_CHANNELS[i],
        us915::UPLINK_CHANNELS[i],
        Transform::Passthrough,
    )
}

const fn downlink(i: usize) -> UniformizationRule {
    UniformizationRule::pair(
        eu868::DOWNLINK_CHANNELS[i],
        us915::DOWNLINK_CHANNELS[i],
        Transform::NarrowBandwidth,
    )
}

pub const UPLINK_RULES: [UniformizationRule; 11] = [
    uplink(0),
    uplink(1),
    uplink(2),
    uplink(3),
    uplink(4),
    uplink(5),
    uplink(6),
    uplink(7),
    // 868.8 FSK <> 912.6 SF8BW500
    UniformizationRule::pair(
        eu868::UPLINK_CHANNELS[8],
        us915::UPLINK_CHANNELS[8],
        Transform::Static,
    ),
    // 869.525 SF9BW125 <> 923.3 SF12BW500
    UniformizationRule::pair(
        eu868::UPLINK_CHANNELS[9],
        us915::UPLINK_CHANNELS[9],
        Transform::Static,
    ),
    UniformizationRule::gap(eu868::UPLINK_CHANNEL_2_SF7BW250),
];

pub const DOWNLINK_RULES: [UniformizationRule; 11] = [
    downlink(0),
    downlink(1),
    downlink(2),
    downlink(3),
    downlink(4),
    downlink(5),
    downlink(6),
    downlink(7),
    UniformizationRule::pair(
        eu868::DOWNLINK_CHANNELS[8],
        us915::DOWNLINK_CHANNELS[8],
        Transform::Static,
    ),
    UniformizationRule::pair(eu868::RX2, us915::RX2, Transform::Static),
    UniformizationRule::gap(eu868::DOWNLINK_CHANNEL_2_SF7BW250),
];

pub fn rules(direction: Direction) -> &'static [UniformizationRule] {
    match direction {
        Direction::Uplink => &UPLINK_RULES,
        Direction::Downlink => &DOWNLINK_RULES,
    }
}

/// The rule whose `from` side names the same slot as `entry`.
pub(crate) fn find(
    direction: Direction,
    from: Plan,
    entry: &ChannelEntry,
) -> Option<&'static UniformizationRule> {
    rules(direction)
        .iter()
        .find(|rule| rule.side(from).is_some_and(|row| row.is_same_slot(entry)))
}
