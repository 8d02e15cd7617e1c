//! Concrete datarates and the LoRaWAN datarate index.
use core::fmt;
use core::str::FromStr;

use lora_modulation::{Bandwidth, SpreadingFactor};

use crate::uniformize::{Error, Result};

pub(crate) const NUM_DATARATES: u8 = 16;

seq_macro::seq!(
    N in 0..=15 {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        /// LoRaWAN datarate index. What a given index means depends on the [`Plan`](crate::Plan).
        pub enum DR {
            #(
                _~N = N,
            )*
        }

        impl TryFrom<u8> for DR {
            type Error = Error;

            fn try_from(dr: u8) -> Result<DR> {
                match dr {
                    #(
                        N => Ok(DR::_~N),
                    )*
                    _ => Err(Error::UnsupportedDatarate),
                }
            }
        }
    }
);

/// The datarate a single packet is sent with.
///
/// Formats as the `datr` notation used by packet forwarders: `SF7BW125`, `SF12BW500` or `FSK`.
///
/// ```
/// use lorawan_uniformize::{Bandwidth, Datarate, SpreadingFactor};
///
/// let dr: Datarate = "SF9BW125".parse().unwrap();
/// assert_eq!(dr, Datarate::lora(SpreadingFactor::_9, Bandwidth::_125KHz));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Datarate {
    LoRa { spreading_factor: SpreadingFactor, bandwidth: Bandwidth },
    Fsk,
}

impl Datarate {
    pub const fn lora(spreading_factor: SpreadingFactor, bandwidth: Bandwidth) -> Self {
        Datarate::LoRa { spreading_factor, bandwidth }
    }

    pub fn spreading_factor(&self) -> Option<SpreadingFactor> {
        match self {
            Datarate::LoRa { spreading_factor, .. } => Some(*spreading_factor),
            Datarate::Fsk => None,
        }
    }

    pub fn bandwidth(&self) -> Option<Bandwidth> {
        match self {
            Datarate::LoRa { bandwidth, .. } => Some(*bandwidth),
            Datarate::Fsk => None,
        }
    }
}

impl fmt::Display for Datarate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datarate::LoRa { spreading_factor, bandwidth } => {
                write!(f, "SF{}BW{}", spreading_factor, bandwidth)
            }
            Datarate::Fsk => f.write_str("FSK"),
        }
    }
}

impl FromStr for Datarate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "FSK" {
            return Ok(Datarate::Fsk);
        }
        let (sf, bw) = s
            .strip_prefix("SF")
            .and_then(|rest| rest.split_once("BW"))
            .ok_or(Error::UnsupportedDatarate)?;
        let spreading_factor = sf
            .parse::<u8>()
            .ok()
            .and_then(SpreadingFactor::from_value)
            .ok_or(Error::UnsupportedDatarate)?;
        let bandwidth =
            bw.parse::<u32>().ok().and_then(Bandwidth::from_khz).ok_or(Error::UnsupportedDatarate)?;
        Ok(Datarate::LoRa { spreading_factor, bandwidth })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Datarate {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
struct DatarateDeserializer;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for DatarateDeserializer {
    type Value = Datarate;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a datarate such as \"SF7BW125\" or \"FSK\"")
    }

    fn visit_str<E>(self, v: &str) -> core::result::Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(|_| E::invalid_value(serde::de::Unexpected::Str(v), &self))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Datarate {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(DatarateDeserializer)
    }
}
