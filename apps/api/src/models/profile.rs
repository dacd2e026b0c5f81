use serde::{Deserialize, Serialize};

/// Preferred working arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStyle {
    Remote,
    #[serde(alias = "on-site", alias = "office")]
    Onsite,
    Hybrid,
}

/// Inclusive salary range, in the profile's currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

/// Skills grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedSkills {
    #[serde(default)]
    pub technical: Vec<String>,
    #[serde(default)]
    pub soft: Vec<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub gaming: Vec<String>,
}

/// The two shapes a stored profile may carry its skills in: the legacy flat
/// list and the categorized object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillSet {
    Flat(Vec<String>),
    Categorized(CategorizedSkills),
}

impl Default for SkillSet {
    fn default() -> Self {
        SkillSet::Flat(Vec::new())
    }
}

impl SkillSet {
    /// Resolves either shape into one flat list.
    ///
    /// Categories are concatenated in declaration order. Blank entries are
    /// dropped and duplicates (case-insensitive) keep their first spelling.
    pub fn flatten(&self) -> Vec<String> {
        let raw: Vec<&String> = match self {
            SkillSet::Flat(skills) => skills.iter().collect(),
            SkillSet::Categorized(c) => c
                .technical
                .iter()
                .chain(&c.soft)
                .chain(&c.languages)
                .chain(&c.tools)
                .chain(&c.frameworks)
                .chain(&c.gaming)
                .collect(),
        };

        let mut flat: Vec<String> = Vec::with_capacity(raw.len());
        for skill in raw {
            let trimmed = skill.trim();
            if trimmed.is_empty() {
                continue;
            }
            if !flat.iter().any(|s| s.eq_ignore_ascii_case(trimmed)) {
                flat.push(trimmed.to_string());
            }
        }
        flat
    }
}

/// Candidate profile as supplied by the profile store. Read-only to the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Years of professional experience.
    #[serde(default)]
    pub experience: Option<f64>,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub salary_expectation: Option<SalaryRange>,
    #[serde(default)]
    pub work_style: Option<WorkStyle>,
    #[serde(default)]
    pub role_preferences: Vec<String>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl UserProfile {
    pub fn flat_skills(&self) -> Vec<String> {
        self.skills.flatten()
    }

    pub fn experience_years(&self) -> f64 {
        self.experience.unwrap_or(0.0)
    }

    /// Location with blank strings treated as absent.
    pub fn location(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}
