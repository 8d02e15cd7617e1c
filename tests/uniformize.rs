use lorawan_uniformize::plan::{eu868, us915};
use lorawan_uniformize::uniformize::*;
use lorawan_uniformize::{
    Bandwidth, ChannelEntry, ChannelIndex, Datarate, Direction, Modulation, Plan, RfConfig,
    SpreadingFactor, UniformizationRule, Uniformizer, Window,
};

/// Parses a documented MHz figure ("869.525") into hertz without going through floats.
fn mhz(s: &str) -> u32 {
    let (int, frac) = s.split_once('.').unwrap_or((s, ""));
    assert!(frac.len() <= 6);
    let mut hz: u32 = int.parse::<u32>().unwrap() * 1_000_000;
    if !frac.is_empty() {
        hz += frac.parse::<u32>().unwrap() * 10u32.pow(6 - frac.len() as u32);
    }
    hz
}

fn lora(min: u8, max: u8, bw_khz: u32) -> Modulation {
    Modulation::lora(
        SpreadingFactor::from_value(min).unwrap(),
        SpreadingFactor::from_value(max).unwrap(),
        Bandwidth::from_khz(bw_khz).unwrap(),
    )
}

fn entry(
    plan: Plan,
    direction: Direction,
    index: ChannelIndex,
    freq: &str,
    modulation: Modulation,
    window: Window,
) -> ChannelEntry {
    ChannelEntry::new(plan, direction, index, mhz(freq), modulation, window)
}

#[test]
fn test_uplink_round_trip_for_paired_channels() {
    for eu in &eu868::UPLINK_CHANNELS[..8] {
        let helium = uplink_to_helium(eu).unwrap();
        assert_eq!(helium.plan, Plan::US915);
        let back = uplink_to_ttn(&helium).unwrap();
        assert_eq!(back.frequency, eu.frequency);
        assert_eq!(back.modulation, eu.modulation);
        assert_eq!(&back, eu);
    }
}

#[test]
fn test_uplink_868_1() {
    let eu = entry(
        Plan::EU868,
        Direction::Uplink,
        ChannelIndex::Numbered(1),
        "868.1",
        lora(7, 12, 125),
        Window::_1,
    );
    let helium = uplink_to_helium(&eu).unwrap();
    assert_eq!(helium.index, ChannelIndex::Numbered(48));
    assert_eq!(helium.frequency, 911_900_000);
    assert_eq!(helium.modulation, lora(7, 10, 125));
}

#[test]
fn test_uplink_fsk() {
    let eu = entry(
        Plan::EU868,
        Direction::Uplink,
        ChannelIndex::Numbered(9),
        "868.8",
        Modulation::Fsk,
        Window::_1,
    );
    let helium = uplink_to_helium(&eu).unwrap();
    assert_eq!(helium.index, ChannelIndex::Fixed);
    assert_eq!(helium.frequency, 912_600_000);
    assert_eq!(helium.modulation, lora(8, 8, 500));
}

#[test]
fn test_uplink_rx2() {
    let helium = uplink_to_helium(&eu868::UPLINK_CHANNELS[9]).unwrap();
    assert_eq!(helium.index, ChannelIndex::Rx2);
    assert_eq!(helium.frequency, mhz("923.3"));
    assert_eq!(helium.modulation, lora(12, 12, 500));
}

#[test]
fn test_uplink_index_offset() {
    for n in 1..=8u8 {
        let helium = uplink_to_helium(&eu868::UPLINK_CHANNELS[n as usize - 1]).unwrap();
        assert_eq!(helium.index, ChannelIndex::Numbered(n + 47));
    }
}

#[test]
fn test_downlink_rx1_923_3() {
    let us = entry(
        Plan::US915,
        Direction::Downlink,
        ChannelIndex::Numbered(1),
        "923.3",
        lora(7, 12, 500),
        Window::_1,
    );
    let ttn = downlink_to_ttn(&us).unwrap();
    assert_eq!(ttn.index, ChannelIndex::Numbered(1));
    assert_eq!(ttn.frequency, 868_100_000);
    assert_eq!(ttn.modulation, lora(7, 12, 125));
    assert_eq!(ttn.window, Window::_1);
}

#[test]
fn test_downlink_rx2_923_3() {
    let us = entry(
        Plan::US915,
        Direction::Downlink,
        ChannelIndex::Rx2,
        "923.3",
        lora(12, 12, 500),
        Window::_2,
    );
    let ttn = downlink_to_ttn(&us).unwrap();
    assert_eq!(ttn.index, ChannelIndex::Rx2);
    assert_eq!(ttn.frequency, 869_525_000);
    assert_eq!(ttn.modulation, lora(9, 9, 125));
    assert_eq!(ttn.window, Window::_2);
}

#[test]
fn test_downlink_window_must_match_row() {
    // channel 1 scheduled in RX2
    let rx1_in_rx2 = ChannelEntry { window: Window::_2, ..us915::DOWNLINK_CHANNELS[0] };
    assert_eq!(downlink_to_ttn(&rx1_in_rx2), Err(Error::UnsupportedChannel));

    let rx2_in_rx1 = ChannelEntry { window: Window::_1, ..us915::RX2 };
    assert_eq!(downlink_to_ttn(&rx2_in_rx1), Err(Error::UnsupportedChannel));

    let eu_rx2_in_rx1 = ChannelEntry { window: Window::_1, ..eu868::RX2 };
    assert_eq!(downlink_to_helium(&eu_rx2_in_rx1), Err(Error::UnsupportedChannel));
}

#[test]
fn test_downlink_table() {
    let expected = [
        ("923.3", "868.1"),
        ("923.9", "868.3"),
        ("924.5", "868.5"),
        ("925.1", "867.1"),
        ("925.7", "867.3"),
        ("926.3", "867.5"),
        ("926.9", "867.7"),
        ("927.5", "867.9"),
    ];
    for (us, (helium, ttn)) in us915::DOWNLINK_CHANNELS.iter().zip(expected) {
        assert_eq!(us.frequency, mhz(helium));
        let eu = downlink_to_ttn(us).unwrap();
        assert_eq!(eu.frequency, mhz(ttn));
        assert_eq!(eu.index, us.index);
        assert_eq!(eu.modulation.bandwidth(), Some(Bandwidth::_125KHz));
        assert_eq!(downlink_to_helium(&eu), Ok(*us));
    }

    let fsk = downlink_to_ttn(&us915::DOWNLINK_CHANNELS[8]).unwrap();
    assert_eq!(fsk.frequency, mhz("868.8"));
    assert_eq!(fsk.modulation, Modulation::Fsk);
}

#[test]
fn test_channel_2_sf7bw250_is_unmapped() {
    assert_eq!(eu868_uplink_channel2_fallback(), Err(Error::Unmapped));
    let wide = entry(
        Plan::EU868,
        Direction::Uplink,
        ChannelIndex::Numbered(2),
        "868.3",
        lora(7, 7, 250),
        Window::_1,
    );
    assert_eq!(uplink_to_helium(&wide), Err(Error::Unmapped));
    // the 125 kHz mode of the same channel is mapped
    assert_eq!(uplink_to_helium(&eu868::UPLINK_CHANNELS[1]).map(|e| e.frequency), Ok(912_100_000));
}

#[test]
fn test_frequencies_match_documented_figures() {
    let eu_uplink = [
        "868.1", "868.3", "868.5", "867.1", "867.3", "867.5", "867.7", "867.9", "868.8", "869.525",
    ];
    for (row, f) in eu868::UPLINK_CHANNELS.iter().zip(eu_uplink) {
        assert_eq!(row.frequency, mhz(f));
    }
    let helium_uplink = [
        "911.9", "912.1", "912.3", "912.5", "912.7", "912.9", "913.1", "913.3", "912.6", "923.3",
    ];
    for (row, f) in us915::UPLINK_CHANNELS.iter().zip(helium_uplink) {
        assert_eq!(row.frequency, mhz(f));
    }
    assert_eq!(mhz("868.1"), 868_100_000);
}

#[test]
fn test_lookups_are_deterministic() {
    for direction in [Direction::Uplink, Direction::Downlink] {
        for row in Plan::EU868.channels(direction) {
            let f = match direction {
                Direction::Uplink => uplink_to_helium,
                Direction::Downlink => downlink_to_helium,
            };
            let first = f(row);
            for _ in 0..3 {
                assert_eq!(f(row), first);
            }
        }
    }
}

#[test]
fn test_invalid_index() {
    for n in [0u8, 10, 11, 47, 255] {
        let eu_up = entry(
            Plan::EU868,
            Direction::Uplink,
            ChannelIndex::Numbered(n),
            "868.1",
            lora(7, 12, 125),
            Window::_1,
        );
        assert_eq!(uplink_to_helium(&eu_up), Err(Error::UnsupportedChannel));

        let us_down = entry(
            Plan::US915,
            Direction::Downlink,
            ChannelIndex::Numbered(n),
            "923.3",
            lora(7, 12, 500),
            Window::_1,
        );
        assert_eq!(downlink_to_ttn(&us_down), Err(Error::UnsupportedChannel));
    }

    // EU868 has no unnumbered fixed slot
    let fixed = entry(
        Plan::EU868,
        Direction::Uplink,
        ChannelIndex::Fixed,
        "868.8",
        Modulation::Fsk,
        Window::_1,
    );
    assert_eq!(uplink_to_helium(&fixed), Err(Error::UnsupportedChannel));
}

#[test]
fn test_every_row_has_an_image() {
    for direction in [Direction::Uplink, Direction::Downlink] {
        for row in Plan::US915.channels(direction) {
            let f = match direction {
                Direction::Uplink => uplink_to_ttn,
                Direction::Downlink => downlink_to_ttn,
            };
            assert!(f(row).is_ok(), "{:?}", row);
        }
        for row in Plan::EU868.channels(direction) {
            let f = match direction {
                Direction::Uplink => uplink_to_helium,
                Direction::Downlink => downlink_to_helium,
            };
            assert!(f(row).is_ok(), "{:?}", row);
        }
    }
}

#[test]
fn test_public_types_are_copy_send_sync() {
    fn assert_copy_send_sync<T: Copy + Send + Sync>() {}
    assert_copy_send_sync::<ChannelEntry>();
    assert_copy_send_sync::<UniformizationRule>();
    assert_copy_send_sync::<Uniformizer>();
    assert_copy_send_sync::<RfConfig>();
    assert_copy_send_sync::<Datarate>();
    assert_copy_send_sync::<Error>();
}
