use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lorawan_uniformize::plan::{eu868, us915};
use lorawan_uniformize::{uniformize, RfConfig, Uniformizer, Window};

use std::alloc::System;
use std::sync::atomic::{AtomicU64, Ordering};

#[global_allocator]
static GLOBAL: trallocator::Trallocator = trallocator::Trallocator::new(System);

fn bench_entry_lookup(c: &mut Criterion) {
    let cnt = AtomicU64::new(0);
    GLOBAL.reset();
    c.bench_function("entry_uplink_to_helium", |b| {
        b.iter(|| {
            cnt.fetch_add(1u64, Ordering::SeqCst);
            for row in &eu868::UPLINK_CHANNELS {
                let _ = black_box(uniformize::uplink_to_helium(black_box(row)));
            }
        })
    });
    let n = cnt.load(Ordering::SeqCst);
    println!("Approximate memory usage per iteration: {} from {}", GLOBAL.get_sum() / n, n);
}

fn bench_packet_downlink(c: &mut Criterion) {
    let uniformizer = Uniformizer::new();
    let packets: Vec<RfConfig> = us915::DOWNLINK_CHANNELS[..8]
        .iter()
        .map(|row| RfConfig::new(row.frequency, "SF9BW500".parse().unwrap()))
        .collect();
    let cnt = AtomicU64::new(0);
    GLOBAL.reset();
    c.bench_function("packet_downlink_to_ttn", |b| {
        b.iter(|| {
            cnt.fetch_add(1u64, Ordering::SeqCst);
            for rf in &packets {
                let _ = black_box(uniformizer.downlink_to_ttn(black_box(rf), Window::_1));
            }
        })
    });
    let n = cnt.load(Ordering::SeqCst);
    println!("Approximate memory usage per iteration: {} from {}", GLOBAL.get_sum() / n, n);
}

criterion_group!(benches, bench_entry_lookup, bench_packet_downlink);
criterion_main!(benches);
