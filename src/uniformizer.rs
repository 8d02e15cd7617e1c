use lora_modulation::{Bandwidth, SpreadingFactor};

use crate::datarate::Datarate;
use crate::plan::{ChannelEntry, ChannelIndex, Direction, Modulation, Plan, Window};
use crate::rules::{self, Transform};
use crate::uniformize::{Error, Result};

/// Frequency and datarate of a single packet, as reported by a packet forwarder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RfConfig {
    /// Carrier frequency in Hz.
    pub frequency: u32,
    pub datarate: Datarate,
}

impl RfConfig {
    pub const fn new(frequency: u32, datarate: Datarate) -> Self {
        Self { frequency, datarate }
    }
}

/// Translates packet descriptors between the TTN EU868 and Helium US915 plans.
///
/// The descriptor is resolved to a table row by frequency (and receive window for downlinks), the
/// row's rule is applied to the concrete spreading factor and bandwidth, and the other plan's
/// descriptor is returned.
///
/// # Example
///
/// ```
/// use lorawan_uniformize::{RfConfig, Uniformizer, Window};
///
/// let mut uniformizer = Uniformizer::new();
/// // Helium does not define SF11/SF12 at 125 kHz but accepts them.
/// let rf = RfConfig::new(868_100_000, "SF12BW125".parse().unwrap());
/// let helium = uniformizer.uplink_to_helium(&rf).unwrap();
/// assert_eq!(helium.frequency, 911_900_000);
///
/// let rx1 = RfConfig::new(925_100_000, "SF9BW500".parse().unwrap());
/// let ttn = uniformizer.downlink_to_ttn(&rx1, Window::_1).unwrap();
/// assert_eq!(ttn, RfConfig::new(867_100_000, "SF9BW125".parse().unwrap()));
///
/// uniformizer.set_forward_unofficial_spreading_factors(false);
/// assert!(uniformizer.uplink_to_helium(&rf).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Uniformizer {
    forward_unofficial_spreading_factors: bool,
}

impl Default for Uniformizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Uniformizer {
    pub const fn new() -> Self {
        Self { forward_unofficial_spreading_factors: true }
    }

    /// Whether SF11BW125 and SF12BW125 uplinks are forwarded to Helium channels 48..55.
    /// Enabled by default.
    pub fn set_forward_unofficial_spreading_factors(&mut self, forward: bool) {
        self.forward_unofficial_spreading_factors = forward;
    }

    pub fn forwards_unofficial_spreading_factors(&self) -> bool {
        self.forward_unofficial_spreading_factors
    }

    pub fn uplink_to_helium(&self, rf: &RfConfig) -> Result<RfConfig> {
        self.translate(Direction::Uplink, Plan::EU868, rf, None)
    }

    pub fn uplink_to_ttn(&self, rf: &RfConfig) -> Result<RfConfig> {
        self.translate(Direction::Uplink, Plan::US915, rf, None)
    }

    /// `window` is required because Helium RX1 channel 1 and RX2 share 923.3 MHz.
    pub fn downlink_to_ttn(&self, rf: &RfConfig, window: Window) -> Result<RfConfig> {
        self.translate(Direction::Downlink, Plan::US915, rf, Some(window))
    }

    pub fn downlink_to_helium(&self, rf: &RfConfig, window: Window) -> Result<RfConfig> {
        self.translate(Direction::Downlink, Plan::EU868, rf, Some(window))
    }

    fn translate(
        &self,
        direction: Direction,
        from: Plan,
        rf: &RfConfig,
        window: Option<Window>,
    ) -> Result<RfConfig> {
        if !from.frequency_valid(rf.frequency) {
            warn!("{} Hz is outside the {} band", rf.frequency, from);
            return Err(Error::UnsupportedChannel);
        }

        let mut on_frequency = false;
        let rule = rules::rules(direction).iter().find(|rule| match rule.side(from) {
            Some(row)
                if row.frequency == rf.frequency && window.map_or(true, |w| w == row.window) =>
            {
                on_frequency = true;
                self.accepts(row, &rf.datarate)
            }
            _ => false,
        });
        let rule = match rule {
            Some(rule) => rule,
            None if on_frequency => {
                debug!("{} is not carried on {} Hz", rf.datarate, rf.frequency);
                return Err(Error::UnsupportedDatarate);
            }
            None => {
                debug!("no {} {} channel on {} Hz", from, direction, rf.frequency);
                return Err(Error::UnsupportedChannel);
            }
        };

        let Some(target) = rule.counterpart(from) else {
            debug!("{} on {} Hz has no static counterpart", rf.datarate, rf.frequency);
            return Err(Error::Unmapped);
        };
        let datarate = self.transform(rule.transform, &rf.datarate, target)?;
        trace!(
            "{} {}: {} Hz {} -> {} Hz {}",
            direction,
            from,
            rf.frequency,
            rf.datarate,
            target.frequency,
            datarate
        );
        Ok(RfConfig::new(target.frequency, datarate))
    }

    fn transform(
        &self,
        transform: Transform,
        datarate: &Datarate,
        target: &ChannelEntry,
    ) -> Result<Datarate> {
        let out = match (transform, datarate, target.modulation) {
            (Transform::Passthrough, _, _) => *datarate,
            (
                Transform::NarrowBandwidth,
                Datarate::LoRa { spreading_factor, .. },
                Modulation::LoRa { bandwidth, .. },
            ) => Datarate::lora(*spreading_factor, bandwidth),
            (Transform::NarrowBandwidth, _, _) => return Err(Error::UnsupportedDatarate),
            (Transform::Static, _, modulation) => {
                modulation.fixed_datarate().ok_or(Error::UnsupportedDatarate)?
            }
        };
        if self.accepts(target, &out) {
            Ok(out)
        } else {
            debug!("{} is not carried by the counterpart channel", out);
            Err(Error::UnsupportedDatarate)
        }
    }

    fn accepts(&self, row: &ChannelEntry, datarate: &Datarate) -> bool {
        row.modulation.carries(datarate)
            || (self.forward_unofficial_spreading_factors
                && is_unofficial_helium_uplink(row, datarate))
    }
}

/// SF11/SF12 at 125 kHz on a Helium uplink channel 48..55.
fn is_unofficial_helium_uplink(row: &ChannelEntry, datarate: &Datarate) -> bool {
    row.plan == Plan::US915
        && row.direction == Direction::Uplink
        && matches!(row.index, ChannelIndex::Numbered(_))
        && matches!(datarate.spreading_factor(), Some(SpreadingFactor::_11 | SpreadingFactor::_12))
        && datarate.bandwidth() == Some(Bandwidth::_125KHz)
}
