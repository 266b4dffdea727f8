use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` the same as a missing field
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One job posting.
///
/// Every field is optional on the wire; missing or `null` values become empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(alias = "_id", alias = "jobId", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(alias = "skillsRequired", deserialize_with = "nullable")]
    pub required_skills: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
    #[serde(deserialize_with = "nullable")]
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
}

impl JobPosting {
    pub fn new(title: &str, required_skills: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    #[must_use]
    pub fn with_company(mut self, company_name: &str) -> Self {
        self.company_name = company_name.to_string();
        self
    }

    #[must_use]
    pub fn with_job_type(mut self, job_type: &str) -> Self {
        self.job_type = Some(job_type.to_string());
        self
    }

    /// Caller id, or `job_<index>` when absent
    pub fn key(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => format!("job_{index}"),
        }
    }

    /// True when every text field is empty or whitespace
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty()
            && self.description.trim().is_empty()
            && self.required_skills.iter().all(|s| s.trim().is_empty())
            && self.location.trim().is_empty()
            && self.company_name.trim().is_empty()
            && self.job_type.as_deref().map_or(true, |t| t.trim().is_empty())
    }

    /// Text used for vectorization. Title and skills appear twice so they
    /// outweigh the description. Returns `Job <index>` when every field is blank.
    pub fn document_text(&self, index: usize) -> String {
        let title = self.title.trim();
        let skills = self
            .required_skills
            .iter()
            .map(|s| s.trim())
            .collect::<Vec<_>>()
            .join(" ");
        let text = format!(
            "{title} {title} {} {skills} {skills} {} {} {}",
            self.description.trim(),
            self.location.trim(),
            self.company_name.trim(),
            self.job_type.as_deref().unwrap_or("").trim(),
        );
        if self.is_blank() {
            format!("Job {index}")
        } else {
            text
        }
    }
}

/// Query side: the candidate being matched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    #[serde(deserialize_with = "nullable")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub experience: i64,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
}

impl CandidateProfile {
    pub fn new(skills: &[&str], experience: i64, location: &str) -> Self {
        Self {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience,
            location: location.to_string(),
        }
    }

    /// Query text: skills twice, experience phrase, location.
    /// `default_skill` stands in when no skills are given.
    pub fn query_text(&self, default_skill: &str) -> String {
        let skills = if self.skills.is_empty() {
            default_skill.to_string()
        } else {
            self.skills.join(" ")
        };
        format!("{skills} {skills} {} years {}", self.experience, self.location)
    }
}
