//! Runs without the test harness so that no other thread allocates while the counter is read.

use std::alloc::System;

use lorawan_uniformize::uniformize::*;
use lorawan_uniformize::{Datarate, Direction, Plan, RfConfig, Uniformizer, Window};

#[global_allocator]
static GLOBAL: trallocator::Trallocator = trallocator::Trallocator::new(System);

fn main() {
    let uniformizer = Uniformizer::new();
    let datarates: [Datarate; 3] = [
        "SF7BW125".parse().unwrap(),
        "SF12BW500".parse().unwrap(),
        Datarate::Fsk,
    ];

    GLOBAL.reset();
    let live = GLOBAL.get();
    let mut results = 0usize;
    for direction in [Direction::Uplink, Direction::Downlink] {
        for row in Plan::EU868.channels(direction) {
            let helium = match direction {
                Direction::Uplink => uplink_to_helium(row),
                Direction::Downlink => downlink_to_helium(row),
            };
            results += helium.is_ok() as usize;
        }
        for row in Plan::US915.channels(direction) {
            let ttn = match direction {
                Direction::Uplink => uplink_to_ttn(row),
                Direction::Downlink => downlink_to_ttn(row),
            };
            results += ttn.is_ok() as usize;
            for datarate in datarates {
                let rf = RfConfig::new(row.frequency, datarate);
                let out = match direction {
                    Direction::Uplink => uniformizer.uplink_to_ttn(&rf),
                    Direction::Downlink => uniformizer.downlink_to_ttn(&rf, Window::_1),
                };
                results += out.is_ok() as usize;
            }
        }
    }
    results += eu868_uplink_channel2_fallback().is_ok() as usize;
    let allocations = GLOBAL.get_count();
    let live_after = GLOBAL.get();

    assert!(results > 0);
    assert_eq!(allocations, 0, "uniformization allocated {} bytes", GLOBAL.get_sum());
    assert_eq!(live_after, live);
    println!("no_alloc: ok ({} successful lookups)", results);
}
