// Criterion benchmarks for the partner search engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use partner_search::core::{collect_results, filters::matches, normalizer::normalize};
use partner_search::models::{AgeRange, Profile, SearchCriteria, SearchRequest};

const JOBS: &[&str] = &["Software Engineer", "Teacher", "Doctor", "Architect", "Data Analyst"];
const HOBBIES: &[&str] = &["chess", "reading", "running", "yoga", "hiking", "cooking", "music"];
const CITIES: &[&str] = &["Berlin", "Paris", "Madrid", "Tokyo", "Lagos", "Milan"];
const QUALITIES: &[&str] = &["kind", "honest", "patient", "funny", "loyal"];

fn create_profile(id: usize) -> Profile {
    Profile {
        name: Some(format!("User {}", id)),
        job: JOBS[id % JOBS.len()].to_string(),
        hobbies: [HOBBIES[id % HOBBIES.len()], HOBBIES[(id / 3) % HOBBIES.len()]]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        age: 20 + (id % 30) as u32,
        location: CITIES[id % CITIES.len()].to_string(),
        qualities: [QUALITIES[id % QUALITIES.len()].to_string()].into_iter().collect(),
        gender: if id % 2 == 0 { "F" } else { "M" }.to_string(),
    }
}

fn create_criteria() -> SearchCriteria {
    SearchCriteria::builder()
        .job("engineer")
        .hobbies(["chess", "yoga"])
        .age_range(AgeRange::new(25, 35).unwrap())
        .gender("f")
        .build()
}

fn bench_normalize(c: &mut Criterion) {
    let request: SearchRequest = serde_json::from_value(serde_json::json!({
        "job_query": "Engineer",
        "hobby_query": "chess, yoga, reading",
        "age_range": { "min": 25, "max": 35 },
        "location_query": "berlin",
        "qualities_query": ["kind", "honest"],
        "gender_query": "F"
    }))
    .unwrap();

    c.bench_function("normalize", |b| {
        b.iter(|| normalize(black_box(&request)))
    });
}

fn bench_matches(c: &mut Criterion) {
    let criteria = create_criteria();
    let profile = create_profile(0);

    c.bench_function("matches", |b| {
        b.iter(|| matches(black_box(&criteria), black_box(&profile)))
    });
}

fn bench_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_scan");
    let criteria = create_criteria();

    for size in [100, 1_000, 10_000] {
        let profiles: Vec<Profile> = (0..size).map(create_profile).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &profiles, |b, profiles| {
            b.iter(|| collect_results(black_box(&criteria), profiles))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_matches, bench_full_scan);
criterion_main!(benches);
