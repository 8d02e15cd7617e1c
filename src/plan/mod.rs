//! EU868 (The Things Network) and US915 (Helium) channel tables.
//!
//! Every table in this module is `const` data. Frequencies are integer hertz.
use lora_modulation::{Bandwidth, SpreadingFactor};

use crate::datarate::{Datarate, DR, NUM_DATARATES};

pub mod eu868;
pub mod us915;

/// The two regional plans the uniformization tables connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::upper_case_acronyms)]
pub enum Plan {
    /// EU863-870 as used by The Things Network.
    EU868,
    /// US902-928 as used by the Helium network.
    US915,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Uplink,
    Downlink,
}

/// Receive window a downlink is scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Window {
    _1,
    _2,
}

/// Position of a row within its plan's table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelIndex {
    /// A channel number as published in the plan's table.
    Numbered(u8),
    /// Helium's unnumbered 912.6 MHz SF8BW500 slot.
    Fixed,
    /// The plan's static RX2 slot.
    Rx2,
}

/// Inclusive range of spreading factors a channel carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSpreadingFactorRange"))]
pub struct SpreadingFactorRange {
    min: SpreadingFactor,
    max: SpreadingFactor,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSpreadingFactorRange {
    min: SpreadingFactor,
    max: SpreadingFactor,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSpreadingFactorRange> for SpreadingFactorRange {
    type Error = &'static str;

    fn try_from(raw: RawSpreadingFactorRange) -> Result<Self, Self::Error> {
        if raw.min > raw.max {
            return Err("inverted spreading factor range");
        }
        Ok(Self { min: raw.min, max: raw.max })
    }
}

impl SpreadingFactorRange {
    /// Panics at compile time (or at runtime outside const contexts) if `min > max`.
    pub const fn new(min: SpreadingFactor, max: SpreadingFactor) -> Self {
        assert!(min.value() <= max.value(), "inverted spreading factor range");
        Self { min, max }
    }

    pub const fn single(sf: SpreadingFactor) -> Self {
        Self { min: sf, max: sf }
    }

    pub fn min(&self) -> SpreadingFactor {
        self.min
    }

    pub fn max(&self) -> SpreadingFactor {
        self.max
    }

    pub fn contains(&self, sf: SpreadingFactor) -> bool {
        self.min <= sf && sf <= self.max
    }
}

/// How a channel is modulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Modulation {
    LoRa { spreading_factors: SpreadingFactorRange, bandwidth: Bandwidth },
    Fsk,
}

impl Modulation {
    pub const fn lora(min: SpreadingFactor, max: SpreadingFactor, bandwidth: Bandwidth) -> Self {
        Modulation::LoRa { spreading_factors: SpreadingFactorRange::new(min, max), bandwidth }
    }

    /// A LoRa channel restricted to one spreading factor.
    pub const fn lora_fixed(sf: SpreadingFactor, bandwidth: Bandwidth) -> Self {
        Modulation::LoRa { spreading_factors: SpreadingFactorRange::single(sf), bandwidth }
    }

    pub fn bandwidth(&self) -> Option<Bandwidth> {
        match self {
            Modulation::LoRa { bandwidth, .. } => Some(*bandwidth),
            Modulation::Fsk => None,
        }
    }

    /// Two modulations share a mode when both are FSK or both are LoRa at the same bandwidth.
    /// Spreading factors are not compared.
    pub fn same_mode(&self, other: &Modulation) -> bool {
        match (self, other) {
            (Modulation::Fsk, Modulation::Fsk) => true,
            (Modulation::LoRa { bandwidth: a, .. }, Modulation::LoRa { bandwidth: b, .. }) => {
                a == b
            }
            _ => false,
        }
    }

    /// Whether a packet sent with `datarate` fits this channel.
    pub fn carries(&self, datarate: &Datarate) -> bool {
        match (self, datarate) {
            (Modulation::Fsk, Datarate::Fsk) => true,
            (
                Modulation::LoRa { spreading_factors, bandwidth },
                Datarate::LoRa { spreading_factor, bandwidth: bw },
            ) => bandwidth == bw && spreading_factors.contains(*spreading_factor),
            _ => false,
        }
    }

    /// The only datarate this channel allows, if it allows exactly one.
    pub fn fixed_datarate(&self) -> Option<Datarate> {
        match self {
            Modulation::Fsk => Some(Datarate::Fsk),
            Modulation::LoRa { spreading_factors, bandwidth }
                if spreading_factors.min == spreading_factors.max =>
            {
                Some(Datarate::lora(spreading_factors.min, *bandwidth))
            }
            Modulation::LoRa { .. } => None,
        }
    }
}

/// One physical channel slot of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelEntry {
    pub plan: Plan,
    pub direction: Direction,
    pub index: ChannelIndex,
    /// Carrier frequency in Hz.
    pub frequency: u32,
    pub modulation: Modulation,
    pub window: Window,
}

impl ChannelEntry {
    pub const fn new(
        plan: Plan,
        direction: Direction,
        index: ChannelIndex,
        frequency: u32,
        modulation: Modulation,
        window: Window,
    ) -> Self {
        Self { plan, direction, index, frequency, modulation, window }
    }

    /// True when `other` names this row: same plan, direction, index, frequency, receive window
    /// and modulation mode. The spreading factor range of `other` may differ from ours.
    pub fn is_same_slot(&self, other: &ChannelEntry) -> bool {
        self.plan == other.plan
            && self.direction == other.direction
            && self.index == other.index
            && self.frequency == other.frequency
            && self.window == other.window
            && self.modulation.same_mode(&other.modulation)
    }
}

impl Plan {
    /// The published rows of the plan for one direction, RX2 last.
    ///
    /// EU868 channel 2 also carries an SF7BW250 mode, see
    /// [`eu868::UPLINK_CHANNEL_2_SF7BW250`] and [`eu868::DOWNLINK_CHANNEL_2_SF7BW250`].
    pub fn channels(self, direction: Direction) -> &'static [ChannelEntry] {
        match (self, direction) {
            (Plan::EU868, Direction::Uplink) => &eu868::UPLINK_CHANNELS,
            (Plan::EU868, Direction::Downlink) => &eu868::DOWNLINK_CHANNELS,
            (Plan::US915, Direction::Uplink) => &us915::UPLINK_CHANNELS,
            (Plan::US915, Direction::Downlink) => &us915::DOWNLINK_CHANNELS,
        }
    }

    /// The static RX2 downlink slot.
    pub fn rx2(self) -> &'static ChannelEntry {
        match self {
            Plan::EU868 => &eu868::RX2,
            Plan::US915 => &us915::RX2,
        }
    }

    /// Whether `frequency` lies inside the plan's band at all.
    pub fn frequency_valid(self, frequency: u32) -> bool {
        match self {
            Plan::EU868 => eu868::frequency_valid(frequency),
            Plan::US915 => us915::frequency_valid(frequency),
        }
    }

    fn datarates(self) -> &'static [Option<Datarate>; NUM_DATARATES as usize] {
        match self {
            Plan::EU868 => &eu868::DATARATES,
            Plan::US915 => &us915::DATARATES,
        }
    }

    /// The datarate behind a LoRaWAN datarate index, or `None` if the plan leaves it undefined.
    pub fn datarate(self, dr: DR) -> Option<Datarate> {
        self.datarates()[dr as usize]
    }

    /// The LoRaWAN datarate index of `datarate` in this plan.
    ///
    /// US915 defines SF8BW500 twice (DR4 uplink, DR12 downlink), so the direction selects which
    /// part of the table is searched.
    pub fn dr_for(self, direction: Direction, datarate: &Datarate) -> Option<DR> {
        let range = match (self, direction) {
            (Plan::EU868, _) => 0u8..=7,
            (Plan::US915, Direction::Uplink) => 0..=4,
            (Plan::US915, Direction::Downlink) => 8..=13,
        };
        range
            .into_iter()
            .find(|&dr| self.datarates()[dr as usize].as_ref() == Some(datarate))
            .and_then(|dr| DR::try_from(dr).ok())
    }
}
