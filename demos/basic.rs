use job_recommender::{CandidateProfile, EngineConfig, JobPosting, RecommendationEngine};
use tracing_subscriber::EnvFilter;

fn main() -> job_recommender::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = EngineConfig::load()?;
    let engine = RecommendationEngine::new(config);

    let jobs = vec![
        JobPosting::new("Backend Engineer", &["python", "sql"])
            .with_id("be-1")
            .with_description("Design and operate REST services")
            .with_location("Remote")
            .with_company("Acme"),
        JobPosting::new("Frontend Engineer", &["react", "css"])
            .with_id("fe-1")
            .with_description("Build accessible interfaces")
            .with_location("Berlin")
            .with_company("Pixel"),
        JobPosting::new("Data Engineer", &["python", "spark", "sql"])
            .with_id("de-1")
            .with_description("Own the batch pipelines")
            .with_location("Remote")
            .with_company("Numbers")
            .with_job_type("contract"),
    ];
    let report = engine.train(jobs)?;
    println!("trained: {report:?}");

    let profile = CandidateProfile::new(&["python", "sql"], 3, "remote");
    for rec in engine.recommend_default(&profile)? {
        println!("{rec}");
    }
    Ok(())
}
