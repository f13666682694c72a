use criterion::{black_box, criterion_group, criterion_main, Criterion};
use journey_travel::models::{SegmentRole, SegmentType, TravelSegment};
use journey_travel::{journey_to_segments, segments_to_journey};

fn sample_segments(legs: usize) -> Vec<TravelSegment> {
    let mut segments = vec![
        TravelSegment::new(SegmentType::Taxi, "Home", "LHR").with_times("05:30", ""),
        TravelSegment::new(SegmentType::Train, "Paddington", "Heathrow T5").with_times("06:10", "06:35"),
    ];
    for i in 0..legs {
        let mut leg = TravelSegment::new(SegmentType::Flight, format!("AP{i}"), format!("AP{}", i + 1))
            .with_times("08:00", "10:30");
        leg.flight_number = Some(format!("XX{i:04}"));
        leg.role = Some(SegmentRole::Main);
        segments.push(leg);
    }
    segments.push(TravelSegment::new(SegmentType::Taxi, "CDG", "Hotel"));
    segments
}

fn benchmark_journey_conversion(c: &mut Criterion) {
    let direct = sample_segments(1);
    let connecting = sample_segments(4);
    let journey = segments_to_journey(&connecting);

    c.bench_function("segments_to_journey_direct", |b| {
        b.iter(|| segments_to_journey(black_box(&direct)));
    });

    c.bench_function("segments_to_journey_connecting", |b| {
        b.iter(|| segments_to_journey(black_box(&connecting)));
    });

    c.bench_function("journey_to_segments", |b| {
        b.iter(|| journey_to_segments(black_box(&journey)));
    });

    // Load then sync, as happens on every edit
    c.bench_function("round_trip", |b| {
        b.iter(|| journey_to_segments(&segments_to_journey(black_box(&connecting))));
    });
}

criterion_group!(benches, benchmark_journey_conversion);
criterion_main!(benches);
