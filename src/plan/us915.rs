//! US902-928 channel plan as used by the Helium network.
//!
//! Helium listens on the second-to-last 125 kHz sub-band: uplink channels 48..55 carry
//! SF7BW125 to SF10BW125, and the unnumbered 912.6 MHz slot (regional channel 70) carries
//! SF8BW500. Downlink channels 1..8 are the eight 500 kHz downstream channels. RX2 is fixed at
//! 923.3 MHz SF12BW500 (DR8).
//!
//! The RX1 channel a Helium gateway answers on is `TX channel % 8`. Computing it is left to the
//! caller.
use super::*;

pub const RX2_FREQUENCY: u32 = 923_300_000;
/// Frequency of the unnumbered SF8BW500 slot.
pub const FIXED_FREQUENCY: u32 = 912_600_000;
/// Regional channel number of the first Helium uplink channel.
pub const FIRST_UPLINK_CHANNEL: u8 = 48;

/// Frequency of regional upstream channel `channel`.
///
/// Channels 0..=63 are 125 kHz wide, starting at 902.3 MHz in 200 kHz steps. Channels 64..=71
/// are 500 kHz wide, starting at 903.0 MHz in 1.6 MHz steps.
pub const fn uplink_frequency(channel: u8) -> Option<u32> {
    match channel {
        0..=63 => Some(902_300_000 + channel as u32 * 200_000),
        64..=71 => Some(903_000_000 + (channel as u32 - 64) * 1_600_000),
        _ => None,
    }
}

/// Frequency of regional downstream channel `channel` (0..=7), starting at 923.3 MHz in
/// 600 kHz steps. Helium numbers these channels 1..8.
pub const fn downlink_frequency(channel: u8) -> Option<u32> {
    match channel {
        0..=7 => Some(923_300_000 + channel as u32 * 600_000),
        _ => None,
    }
}

const LORA_BW125: Modulation =
    Modulation::lora(SpreadingFactor::_7, SpreadingFactor::_10, Bandwidth::_125KHz);
const LORA_BW500: Modulation =
    Modulation::lora(SpreadingFactor::_7, SpreadingFactor::_12, Bandwidth::_500KHz);
const FIXED_MODULATION: Modulation =
    Modulation::lora_fixed(SpreadingFactor::_8, Bandwidth::_500KHz);
const RX2_MODULATION: Modulation =
    Modulation::lora_fixed(SpreadingFactor::_12, Bandwidth::_500KHz);

const fn entry(
    direction: Direction,
    index: ChannelIndex,
    frequency: u32,
    modulation: Modulation,
) -> ChannelEntry {
    let window = match index {
        ChannelIndex::Rx2 => Window::_2,
        _ => Window::_1,
    };
    ChannelEntry::new(Plan::US915, direction, index, frequency, modulation, window)
}

const fn uplink(n: u8, frequency: u32) -> ChannelEntry {
    entry(Direction::Uplink, ChannelIndex::Numbered(n), frequency, LORA_BW125)
}

const fn downlink(n: u8, frequency: u32) -> ChannelEntry {
    entry(Direction::Downlink, ChannelIndex::Numbered(n), frequency, LORA_BW500)
}

pub const UPLINK_CHANNELS: [ChannelEntry; 10] = [
    uplink(48, 911_900_000),
    uplink(49, 912_100_000),
    uplink(50, 912_300_000),
    uplink(51, 912_500_000),
    uplink(52, 912_700_000),
    uplink(53, 912_900_000),
    uplink(54, 913_100_000),
    uplink(55, 913_300_000),
    entry(Direction::Uplink, ChannelIndex::Fixed, FIXED_FREQUENCY, FIXED_MODULATION),
    entry(Direction::Uplink, ChannelIndex::Rx2, RX2_FREQUENCY, RX2_MODULATION),
];

pub const DOWNLINK_CHANNELS: [ChannelEntry; 10] = [
    downlink(1, 923_300_000),
    downlink(2, 923_900_000),
    downlink(3, 924_500_000),
    downlink(4, 925_100_000),
    downlink(5, 925_700_000),
    downlink(6, 926_300_000),
    downlink(7, 926_900_000),
    downlink(8, 927_500_000),
    entry(Direction::Downlink, ChannelIndex::Fixed, FIXED_FREQUENCY, FIXED_MODULATION),
    entry(Direction::Downlink, ChannelIndex::Rx2, RX2_FREQUENCY, RX2_MODULATION),
];

pub const RX2: ChannelEntry = DOWNLINK_CHANNELS[9];

pub(crate) fn frequency_valid(f: u32) -> bool {
    (902_000_000..=928_000_000).contains(&f)
}

pub(crate) const DATARATES: [Option<Datarate>; NUM_DATARATES as usize] = [
    // DR0
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz)),
    // DR1
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz)),
    // DR2
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz)),
    // DR3
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz)),
    // DR4
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_500KHz)),
    // DR5, DR6: LR-FHSS
    None,
    None,
    // DR7: RFU
    None,
    // DR8
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_500KHz)),
    // DR9
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_500KHz)),
    // DR10
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_500KHz)),
    // DR11
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_500KHz)),
    // DR12
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_500KHz)),
    // DR13
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_500KHz)),
    // DR14, DR15: RFU
    None,
    None,
];
