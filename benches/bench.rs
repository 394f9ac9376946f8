// Criterion benchmarks for Rental Match

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use rental_match::core::{
    distance::haversine_distance, mutual::resolve_mutual_like, scoring::calculate_compatibility_score, Matcher,
};
use rental_match::models::{
    GeoLocation, InteractionKind, InteractionRecord, MatchPreferences, ScoringWeights, UserProfile,
};

const INTERESTS: &[&str] = &[
    "hiking", "cooking", "music", "chess", "cycling", "road_trips", "photography", "climbing",
];

fn create_candidate(id: usize, lat: f64, lon: f64) -> UserProfile {
    UserProfile {
        id: id.to_string(),
        email: format!("user{}@example.com", id),
        first_name: None,
        last_name: None,
        age: Some(20 + (id % 25) as u32),
        interests: INTERESTS
            .iter()
            .skip(id % INTERESTS.len())
            .take(1 + id % 4)
            .map(|s| s.to_string())
            .collect(),
        location: Some(GeoLocation {
            latitude: lat,
            longitude: lon,
            city: "Paris".to_string(),
        }),
        preferences: MatchPreferences {
            age_min: Some(21),
            age_max: Some(35),
            max_distance_km: Some(50.0),
            gender_filter: None,
        },
    }
}

fn create_reference() -> UserProfile {
    let mut reference = create_candidate(usize::MAX, 48.8566, 2.3522);
    reference.email = "me@example.com".to_string();
    reference.interests = ["hiking", "cooking", "music"].iter().map(|s| s.to_string()).collect();
    reference
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(51.5074),
                black_box(-0.1278),
                black_box(48.8566),
                black_box(2.3522),
            )
        });
    });
}

fn bench_compatibility_score(c: &mut Criterion) {
    let reference = create_reference();
    let candidate = create_candidate(7, 48.87, 2.36);
    let weights = ScoringWeights::default();

    c.bench_function("compatibility_score", |b| {
        b.iter(|| calculate_compatibility_score(black_box(&reference), black_box(&candidate), &weights));
    });
}

fn bench_ranking(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let reference = create_reference();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 100, 1000, 10000].iter() {
        let candidates: Vec<UserProfile> = (0..*candidate_count)
            .map(|i| {
                let lat_offset = (i as f64 * 0.001) % 0.5;
                let lon_offset = (i as f64 * 0.001) % 0.5;
                create_candidate(i, 48.8566 + lat_offset, 2.3522 + lon_offset)
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("rank_candidates", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| matcher.rank_candidates(black_box(&reference), black_box(candidates.clone())));
            },
        );
    }

    group.finish();
}

fn bench_mutual_like(c: &mut Criterion) {
    let records: Vec<InteractionRecord> = (0..10_000)
        .map(|i| InteractionRecord {
            actor_email: format!("user{}@example.com", i % 500),
            target_email: format!("user{}@example.com", (i * 7) % 500),
            kind: if i % 3 == 0 { InteractionKind::Pass } else { InteractionKind::Like },
            created_at: None,
        })
        .collect();

    c.bench_function("mutual_like_10000_records", |b| {
        b.iter(|| {
            resolve_mutual_like(
                black_box("user1@example.com"),
                black_box("user2@example.com"),
                &records,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_compatibility_score,
    bench_ranking,
    bench_mutual_like
);

criterion_main!(benches);
