//! EU863-870 channel plan as published by The Things Network.
//!
//! Channels 1..8 carry SF7BW125 to SF12BW125 in both directions and channel 2 additionally
//! carries SF7BW250. Channel 9 is FSK. RX2 is fixed at 869.525 MHz SF9BW125 (DR3).
use super::*;

pub const RX2_FREQUENCY: u32 = 869_525_000;
pub const FSK_FREQUENCY: u32 = 868_800_000;

/// Frequencies of channels 1..8, shared by uplink and RX1 downlink.
pub const FREQUENCIES: [u32; 8] = [
    868_100_000,
    868_300_000,
    868_500_000,
    867_100_000,
    867_300_000,
    867_500_000,
    867_700_000,
    867_900_000,
];

const LORA_BW125: Modulation =
    Modulation::lora(SpreadingFactor::_7, SpreadingFactor::_12, Bandwidth::_125KHz);
const LORA_SF7BW250: Modulation =
    Modulation::lora_fixed(SpreadingFactor::_7, Bandwidth::_250KHz);
const RX2_MODULATION: Modulation =
    Modulation::lora_fixed(SpreadingFactor::_9, Bandwidth::_125KHz);

const fn channel(direction: Direction, n: u8, modulation: Modulation) -> ChannelEntry {
    let frequency = if n == 9 { FSK_FREQUENCY } else { FREQUENCIES[n as usize - 1] };
    ChannelEntry::new(
        Plan::EU868,
        direction,
        ChannelIndex::Numbered(n),
        frequency,
        modulation,
        Window::_1,
    )
}

const fn rx2(direction: Direction) -> ChannelEntry {
    ChannelEntry::new(
        Plan::EU868,
        direction,
        ChannelIndex::Rx2,
        RX2_FREQUENCY,
        RX2_MODULATION,
        Window::_2,
    )
}

pub const UPLINK_CHANNELS: [ChannelEntry; 10] = [
    channel(Direction::Uplink, 1, LORA_BW125),
    channel(Direction::Uplink, 2, LORA_BW125),
    channel(Direction::Uplink, 3, LORA_BW125),
    channel(Direction::Uplink, 4, LORA_BW125),
    channel(Direction::Uplink, 5, LORA_BW125),
    channel(Direction::Uplink, 6, LORA_BW125),
    channel(Direction::Uplink, 7, LORA_BW125),
    channel(Direction::Uplink, 8, LORA_BW125),
    channel(Direction::Uplink, 9, Modulation::Fsk),
    rx2(Direction::Uplink),
];

/// The SF7BW250 mode of uplink channel 2. It has no Helium counterpart.
pub const UPLINK_CHANNEL_2_SF7BW250: ChannelEntry =
    channel(Direction::Uplink, 2, LORA_SF7BW250);

pub const DOWNLINK_CHANNELS: [ChannelEntry; 10] = [
    channel(Direction::Downlink, 1, LORA_BW125),
    channel(Direction::Downlink, 2, LORA_BW125),
    channel(Direction::Downlink, 3, LORA_BW125),
    channel(Direction::Downlink, 4, LORA_BW125),
    channel(Direction::Downlink, 5, LORA_BW125),
    channel(Direction::Downlink, 6, LORA_BW125),
    channel(Direction::Downlink, 7, LORA_BW125),
    channel(Direction::Downlink, 8, LORA_BW125),
    channel(Direction::Downlink, 9, Modulation::Fsk),
    rx2(Direction::Downlink),
];

/// The SF7BW250 mode of downlink channel 2. It has no Helium counterpart.
pub const DOWNLINK_CHANNEL_2_SF7BW250: ChannelEntry =
    channel(Direction::Downlink, 2, LORA_SF7BW250);

pub const RX2: ChannelEntry = DOWNLINK_CHANNELS[9];

pub(crate) fn frequency_valid(f: u32) -> bool {
    (863_000_000..=870_000_000).contains(&f)
}

pub(crate) const DATARATES: [Option<Datarate>; NUM_DATARATES as usize] = [
    // DR0
    Some(Datarate::lora(SpreadingFactor::_12, Bandwidth::_125KHz)),
    // DR1
    Some(Datarate::lora(SpreadingFactor::_11, Bandwidth::_125KHz)),
    // DR2
    Some(Datarate::lora(SpreadingFactor::_10, Bandwidth::_125KHz)),
    // DR3
    Some(Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz)),
    // DR4
    Some(Datarate::lora(SpreadingFactor::_8, Bandwidth::_125KHz)),
    // DR5
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_125KHz)),
    // DR6
    Some(Datarate::lora(SpreadingFactor::_7, Bandwidth::_250KHz)),
    // DR7: FSK 50 kbps
    Some(Datarate::Fsk),
    // DR8..DR11: LR-FHSS
    None,
    None,
    None,
    None,
    // DR12..DR15: RFU
    None,
    None,
    None,
    None,
];
