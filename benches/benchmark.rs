use criterion::{black_box, criterion_group, criterion_main, Criterion};
use job_recommender::{CandidateProfile, EngineConfig, JobPosting, RecommendationEngine};

const TITLES: &[&str] = &[
    "Backend Engineer", "Frontend Engineer", "Data Scientist", "DevOps Engineer",
    "Mobile Developer", "QA Analyst", "Security Engineer", "Product Designer",
];
const SKILLS: &[&str] = &[
    "python", "sql", "react", "css", "kubernetes", "terraform", "aws", "kotlin",
    "swift", "rust", "go", "java", "figma", "pandas", "selenium", "linux",
];
const CITIES: &[&str] = &["Remote", "Berlin", "London", "Paris", "Tokyo"];

fn synthetic_catalog(n: usize) -> Vec<JobPosting> {
    (0..n)
        .map(|i| {
            let skills: Vec<&str> = (0..4).map(|k| SKILLS[(i * 7 + k * 3) % SKILLS.len()]).collect();
            JobPosting::new(TITLES[i % TITLES.len()], &skills)
                .with_id(&format!("job-{i}"))
                .with_description(&format!(
                    "Join team {} working on {} and {} systems",
                    i % 13,
                    skills[0],
                    skills[1]
                ))
                .with_location(CITIES[i % CITIES.len()])
                .with_company(&format!("Company {}", i % 50))
        })
        .collect()
}

fn train_and_recommend_benchmark(c: &mut Criterion) {
    let jobs = synthetic_catalog(2_000);

    c.bench_function("train_2000_jobs", |b| {
        b.iter(|| {
            let engine = RecommendationEngine::new(EngineConfig::default());
            engine.train(black_box(jobs.clone()))
        });
    });

    let engine = RecommendationEngine::new(EngineConfig::default());
    if let Err(e) = engine.train(jobs) {
        panic!("training failed: {e}");
    }
    let profile = CandidateProfile::new(&["python", "aws", "sql"], 5, "Remote");

    c.bench_function("recommend_top_10", |b| {
        b.iter(|| engine.recommend(black_box(&profile), 10));
    });
}

criterion_group!(benches, train_and_recommend_benchmark);
criterion_main!(benches);
