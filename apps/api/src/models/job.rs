use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::profile::SalaryRange;

/// Seniority tags a listing can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Principal,
    Director,
}

impl ExperienceLevel {
    /// Inclusive band of years expected for the level.
    pub fn year_range(self) -> (f64, f64) {
        match self {
            ExperienceLevel::Entry => (0.0, 2.0),
            ExperienceLevel::Junior => (1.0, 3.0),
            ExperienceLevel::Mid => (3.0, 6.0),
            ExperienceLevel::Senior => (5.0, 10.0),
            ExperienceLevel::Principal => (8.0, 15.0),
            ExperienceLevel::Director => (10.0, 20.0),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entry" => Ok(ExperienceLevel::Entry),
            "junior" => Ok(ExperienceLevel::Junior),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            "principal" => Ok(ExperienceLevel::Principal),
            "director" => Ok(ExperienceLevel::Director),
            other => Err(format!("unknown experience level '{other}'")),
        }
    }
}

/// Studio category. Anything outside the three known tags is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StudioType {
    Aaa,
    Indie,
    Mobile,
    Other(String),
}

impl From<String> for StudioType {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "aaa" => StudioType::Aaa,
            "indie" => StudioType::Indie,
            "mobile" => StudioType::Mobile,
            _ => StudioType::Other(s),
        }
    }
}

impl From<StudioType> for String {
    fn from(t: StudioType) -> Self {
        match t {
            StudioType::Aaa => "AAA".to_string(),
            StudioType::Indie => "Indie".to_string(),
            StudioType::Mobile => "Mobile".to_string(),
            StudioType::Other(s) => s,
        }
    }
}

/// Advertised pay: either a numeric band or free text such as "Competitive".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum JobSalary {
    Range(SalaryRange),
    Text(String),
}

/// A job listing as supplied by the listing provider. Read-only to the scorer.
///
/// `requirements` is expected in order of importance: the first 70% are
/// scored as critical, the rest as preferred.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub experience_level: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub salary: Option<JobSalary>,
    #[serde(default)]
    pub studio_type: Option<StudioType>,
}

impl Job {
    /// Parsed seniority; `None` for missing or unmapped tags.
    pub fn experience_level(&self) -> Option<ExperienceLevel> {
        self.experience_level.as_deref()?.parse().ok()
    }

    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }

    /// Requirements followed by technologies, de-duplicated case-insensitively.
    pub fn skill_pool(&self) -> Vec<&str> {
        let mut pool: Vec<&str> = Vec::new();
        for skill in self.requirements.iter().chain(&self.technologies) {
            let trimmed = skill.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !pool.iter().any(|s| s.eq_ignore_ascii_case(trimmed)) {
                pool.push(trimmed);
            }
        }
        pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_salary_range_and_text_deserialize() {
        let ranged: Job =
            serde_json::from_str(r#"{"id": "1", "salary": {"min": 70000, "max": 90000}}"#).unwrap();
        assert_eq!(
            ranged.salary,
            Some(JobSalary::Range(SalaryRange {
                min: 70000.0,
                max: 90000.0
            }))
        );

        let text: Job = serde_json::from_str(r#"{"id": "2", "salary": "Competitive"}"#).unwrap();
        assert_eq!(text.salary, Some(JobSalary::Text("Competitive".into())));
    }

    #[test]
    fn test_studio_type_known_and_other() {
        let job: Job = serde_json::from_str(r#"{"id": "1", "studio_type": "AAA"}"#).unwrap();
        assert_eq!(job.studio_type, Some(StudioType::Aaa));

        let job: Job = serde_json::from_str(r#"{"id": "1", "studio_type": "Outsourcing"}"#).unwrap();
        assert_eq!(job.studio_type, Some(StudioType::Other("Outsourcing".into())));
        assert_eq!(
            serde_json::to_string(&StudioType::Indie).unwrap(),
            r#""Indie""#
        );
    }

    #[test]
    fn test_experience_level_parsing_is_lenient() {
        let mut job = Job {
            experience_level: Some(" Senior ".into()),
            ..Default::default()
        };
        assert_eq!(job.experience_level(), Some(ExperienceLevel::Senior));

        job.experience_level = Some("lead".into());
        assert_eq!(job.experience_level(), None);
    }

    #[test]
    fn test_skill_pool_dedupes_across_lists() {
        let job = Job {
            requirements: vec!["Unity".into(), "C#".into()],
            technologies: vec!["unity".into(), "Git".into(), "".into()],
            ..Default::default()
        };
        assert_eq!(job.skill_pool(), vec!["Unity", "C#", "Git"]);
    }
}
