#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rust_2018_idioms)]

//! Static uniformization of LoRaWAN channels between the EU868 plan used by The Things Network
//! and the US915 plan used by the Helium network.
//!
//! Two layers are provided:
//!
//! - [`uniformize`] maps a [`ChannelEntry`] (a row of one plan's table) to the matching row of the
//!   other plan. It is a pure lookup with no configuration.
//! - [`Uniformizer`] maps the [`RfConfig`] of a single packet (frequency plus concrete datarate),
//!   applying the bandwidth/spreading factor transform of the matched row.
//!
//! EU868 channel 2 SF7BW250 has no Helium counterpart; both layers report it as
//! [`Error::Unmapped`].
//!
//! ```
//! use lorawan_uniformize::{plan::us915, uniformize, ChannelIndex, Window};
//!
//! let ttn = uniformize::downlink_to_ttn(&us915::DOWNLINK_CHANNELS[0]).unwrap();
//! assert_eq!(ttn.frequency, 868_100_000);
//! assert_eq!(ttn.window, Window::_1);
//!
//! let rx2 = uniformize::downlink_to_ttn(&us915::RX2).unwrap();
//! assert_eq!(rx2.index, ChannelIndex::Rx2);
//! assert_eq!(rx2.frequency, 869_525_000);
//! ```
//!
//! ## Feature flags
#![doc = document_features::document_features!(feature_label = r#"<span class="stab portability"><code>{feature}</code></span>"#)]

// declared first: the modules below use its logging macros
mod fmt;

pub mod datarate;
pub use datarate::{Datarate, DR};

pub mod plan;
pub use plan::{
    ChannelEntry, ChannelIndex, Direction, Modulation, Plan, SpreadingFactorRange, Window,
};

pub mod rules;
pub use rules::{Transform, UniformizationRule};

pub mod uniformize;
pub use uniformize::{Error, Result};

mod uniformizer;
pub use uniformizer::{RfConfig, Uniformizer};

pub use lora_modulation::{Bandwidth, SpreadingFactor};
