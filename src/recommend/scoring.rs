use std::collections::HashSet;
use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

/// One scored document, referenced by its position in the trained snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitEntry {
    pub index: usize,
    pub score: f64,
}

/// Structure to store scoring results
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    /// Build from one score per document, in document order.
    /// Non-finite scores are dropped so one bad row cannot poison the ranking.
    pub fn from_scores<I>(scores: I) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let list = scores
            .into_iter()
            .enumerate()
            .filter(|(_, score)| score.is_finite())
            .map(|(index, score)| HitEntry { index, score: score.clamp(0.0, 1.0) })
            .collect();
        Hits { list }
    }

    /// Sort by descending score; equal scores keep document order
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.sort_by(|a, b| b.score.total_cmp(&a.score));
        self
    }

    /// Apply the acceptance rule inside the top-`top_n` window.
    ///
    /// An entry is accepted when its score exceeds `threshold` or when fewer
    /// than `min_results` entries have been accepted so far. Entries beyond
    /// the window are never considered.
    pub fn select(&self, top_n: usize, threshold: f64, min_results: usize) -> Vec<HitEntry> {
        let mut accepted = Vec::with_capacity(top_n.min(self.list.len()));
        for hit in self.list.iter().take(top_n) {
            if hit.score > threshold || accepted.len() < min_results {
                accepted.push(*hit);
            }
        }
        accepted
    }

    /// (min, max, mean) of the scores, `None` when empty
    pub fn stats(&self) -> Option<(f64, f64, f64)> {
        if self.list.is_empty() {
            return None;
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for hit in &self.list {
            min = min.min(hit.score);
            max = max.max(hit.score);
            sum += hit.score;
        }
        Some((min, max, sum / self.list.len() as f64))
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            writeln!(f, "Hits [")?;
            for hit in &self.list {
                writeln!(f, "    #{}: {:.6}", hit.index, hit.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

/// Percentage of required skills present in the candidate's skills.
///
/// Comparison is case-insensitive on trimmed strings, rounded to two
/// decimals. No required skills means 0.
pub fn skills_match<C, R>(candidate_skills: &[C], required_skills: &[R]) -> f64
where
    C: AsRef<str>,
    R: AsRef<str>,
{
    if required_skills.is_empty() {
        return 0.0;
    }
    let candidate: HashSet<String> = candidate_skills
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .collect();
    let matched = required_skills
        .iter()
        .filter(|s| candidate.contains(&s.as_ref().trim().to_lowercase()))
        .count();
    let percentage = matched as f64 / required_skills.len() as f64 * 100.0;
    (percentage * 100.0).round() / 100.0
}

/// One explainable recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub job_id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub similarity_score: f64,
    pub skills_match: f64,
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {} ({}) score={:.4} skills={:.2}%",
            self.job_id, self.title, self.company_name, self.location, self.similarity_score, self.skills_match
        )
    }
}
