#![cfg(feature = "serde")]

use lorawan_uniformize::plan::eu868;
use lorawan_uniformize::{
    uniformize, ChannelEntry, Datarate, Error, Modulation, RfConfig, SpreadingFactorRange,
    Uniformizer, Window,
};

#[test]
fn test_rf_config_from_forwarder_json() {
    let rf: RfConfig =
        serde_json::from_str(r#"{ "frequency": 926300000, "datarate": "SF10BW500" }"#).unwrap();
    let ttn = Uniformizer::new().downlink_to_ttn(&rf, Window::_1).unwrap();
    assert_eq!(ttn.frequency, 867_500_000);
    assert_eq!(serde_json::to_string(&ttn.datarate).unwrap(), r#""SF10BW125""#);
}

#[test]
fn test_datarate_rejects_unknown_datr() {
    assert!(serde_json::from_str::<Datarate>(r#""SF6BW62""#).is_err());
    assert_eq!(serde_json::from_str::<Datarate>(r#""FSK""#).unwrap(), Datarate::Fsk);
}

#[test]
fn test_uniformizer_config() {
    let u: Uniformizer = serde_json::from_str("{}").unwrap();
    assert!(u.forwards_unofficial_spreading_factors());

    let u: Uniformizer =
        serde_json::from_str(r#"{ "forward_unofficial_spreading_factors": false }"#).unwrap();
    let rf = RfConfig::new(868_100_000, "SF12BW125".parse().unwrap());
    assert_eq!(u.uplink_to_helium(&rf), Err(Error::UnsupportedDatarate));
}

#[test]
fn test_channel_entry_survives_serialization() {
    let json = serde_json::to_string(&eu868::UPLINK_CHANNELS[4]).unwrap();
    let entry: ChannelEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(uniformize::uplink_to_helium(&entry).map(|e| e.frequency), Ok(912_700_000));
}

#[test]
fn test_inverted_spreading_factor_range_is_rejected() {
    let inverted = r#"{ "min": "_12", "max": "_7" }"#;
    assert!(serde_json::from_str::<SpreadingFactorRange>(inverted).is_err());
    let range: SpreadingFactorRange =
        serde_json::from_str(r#"{ "min": "_7", "max": "_12" }"#).unwrap();
    assert!(matches!(
        eu868::UPLINK_CHANNELS[0].modulation,
        Modulation::LoRa { spreading_factors, .. } if spreading_factors == range
    ));

    let mut json = serde_json::to_value(eu868::UPLINK_CHANNELS[0]).unwrap();
    json["modulation"]["LoRa"]["spreading_factors"] =
        serde_json::from_str(inverted).unwrap();
    assert!(serde_json::from_value::<ChannelEntry>(json).is_err());
}
