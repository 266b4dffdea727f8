use job_recommender::{CandidateProfile, EngineConfig, JobPosting, RecommendationEngine};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "rust", "python", "sql", "react", "css", "aws", "kubernetes", "java", "go", "remote",
        "senior", "junior", "data", "cloud", "mobile", "the", "and",
    ])
    .prop_map(str::to_string)
}

fn job() -> impl Strategy<Value = JobPosting> {
    (
        prop::collection::vec(word(), 0..3),
        prop::collection::vec(word(), 0..4),
        prop::collection::vec(word(), 0..6),
    )
        .prop_map(|(title, skills, description)| JobPosting {
            title: title.join(" "),
            required_skills: skills,
            description: description.join(" "),
            ..Default::default()
        })
}

fn profile() -> impl Strategy<Value = CandidateProfile> {
    (prop::collection::vec(word(), 0..4), 0i64..30).prop_map(|(skills, experience)| CandidateProfile {
        skills,
        experience,
        location: String::new(),
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn training_any_nonempty_corpus_succeeds(jobs in prop::collection::vec(job(), 1..12)) {
        let engine = RecommendationEngine::new(EngineConfig::default());
        let report = engine.train(jobs.clone()).unwrap();
        prop_assert!(engine.is_trained());
        prop_assert_eq!(report.documents, jobs.len());
    }

    #[test]
    fn recommendations_respect_bounds(
        jobs in prop::collection::vec(job(), 1..12),
        profile in profile(),
        top_n in 1usize..8,
    ) {
        let engine = RecommendationEngine::new(EngineConfig::default());
        engine.train(jobs.clone()).unwrap();
        let recs = engine.recommend(&profile, top_n).unwrap();
        prop_assert!(recs.len() <= top_n);
        prop_assert!(recs.len() >= top_n.min(3).min(jobs.len()));
        for rec in &recs {
            prop_assert!((0.0..=1.0).contains(&rec.similarity_score));
            prop_assert!((0.0..=100.0).contains(&rec.skills_match));
        }
        let again = engine.recommend(&profile, top_n).unwrap();
        prop_assert_eq!(recs, again);
    }

    #[test]
    fn subset_skills_match_is_full(skills in prop::collection::vec(word(), 1..4)) {
        let engine = RecommendationEngine::new(EngineConfig::default());
        let required: Vec<&str> = skills.iter().map(String::as_str).collect();
        engine.train(vec![JobPosting::new("Engineer", &required)]).unwrap();
        let mut candidate = required.clone();
        candidate.push("extra");
        let recs = engine.recommend(&CandidateProfile::new(&candidate, 1, ""), 1).unwrap();
        prop_assert_eq!(recs[0].skills_match, 100.0);
    }
}
