//! Match Aggregator: combines the six dimension scores into one `MatchResult`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::dimensions::{
    culture_match, experience_match, location_match, remote_mismatch, salary_match,
    skills_match, technology_match,
};
use crate::matching::normalizer::{contains_similar, same_named_skill};
use crate::models::{Job, UserProfile};

/// Jobs scoring below this are never recommended.
pub const MIN_RECOMMENDATION_SCORE: u32 = 60;
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

const SKILLS_IMPROVEMENT_THRESHOLD: f64 = 70.0;
const EXPERIENCE_IMPROVEMENT_THRESHOLD: f64 = 60.0;
const TECHNOLOGY_IMPROVEMENT_THRESHOLD: f64 = 60.0;
const LOCATION_IMPROVEMENT_THRESHOLD: f64 = 50.0;

/// Skills worth picking up next, keyed by a skill the user already has.
const COMPLEMENTARY_SKILLS: &[(&str, &[&str])] = &[
    ("unity", &["c#", "game design", "mobile development"]),
    ("unreal engine", &["c++", "blueprints", "3d modeling"]),
    ("c#", &["unity", ".net", "design patterns"]),
    ("c++", &["unreal engine", "directx", "opengl"]),
    ("javascript", &["typescript", "react", "webgl"]),
    ("python", &["machine learning", "data analysis", "automation"]),
    ("game design", &["level design", "systems design", "prototyping"]),
    ("3d modeling", &["texturing", "rigging", "animation"]),
    ("blender", &["maya", "zbrush", "substance painter"]),
    ("photoshop", &["illustrator", "digital painting", "ui design"]),
];

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-dimension weights. The defaults sum to 1.0 so the overall score stays
/// within 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
    pub culture: f64,
    pub technology: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.35,
            experience: 0.25,
            location: 0.15,
            salary: 0.10,
            culture: 0.10,
            technology: 0.05,
        }
    }
}

impl MatchWeights {
    pub fn weighted_sum(&self, b: &ScoreBreakdown) -> f64 {
        b.skills * self.skills
            + b.experience * self.experience
            + b.location * self.location
            + b.salary * self.salary
            + b.culture * self.culture
            + b.technology * self.technology
    }
}

/// The six dimension sub-scores, each in 0–100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
    pub culture: f64,
    pub technology: f64,
}

/// Dimension that scored low enough to be worth working on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementArea {
    Skills,
    Experience,
    Technology,
    Location,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub match_score: u32, // 0 – 100
    pub breakdown: ScoreBreakdown,
    /// Job skills (requirements + technologies) the user does not have.
    pub missing_skills: Vec<String>,
    pub recommended_skills: Vec<String>,
    /// Job skills the user already has.
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<ImprovementArea>,
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores one job for one profile with the default weights.
pub fn calculate_match_score(profile: &UserProfile, job: &Job) -> MatchResult {
    score_job(&profile.flat_skills(), profile, job, &MatchWeights::default())
}

/// Scores every job, keeps those at or above 60, and returns the best `limit`
/// in descending score order. Equal scores keep their input order.
pub fn generate_recommendations(
    profile: &UserProfile,
    jobs: &[Job],
    limit: usize,
) -> Vec<MatchResult> {
    rank_jobs(profile, jobs, limit, &MatchWeights::default())
}

pub(crate) fn rank_jobs(
    profile: &UserProfile,
    jobs: &[Job],
    limit: usize,
    weights: &MatchWeights,
) -> Vec<MatchResult> {
    let user_skills = profile.flat_skills();

    let mut results: Vec<MatchResult> = jobs
        .iter()
        .map(|job| score_job(&user_skills, profile, job, weights))
        .filter(|r| r.match_score >= MIN_RECOMMENDATION_SCORE)
        .collect();

    // sort_by is stable, so ties stay in input order
    results.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    results.truncate(limit);
    results
}

/// Core scorer. `user_skills` is the profile's flattened skill list, resolved
/// once by the caller.
pub(crate) fn score_job(
    user_skills: &[String],
    profile: &UserProfile,
    job: &Job,
    weights: &MatchWeights,
) -> MatchResult {
    let skills = skills_match(user_skills, job);

    let breakdown = ScoreBreakdown {
        skills: skills.score,
        experience: experience_match(profile.experience_years(), job.experience_level()),
        location: location_match(profile, job),
        salary: salary_match(profile.salary_expectation.as_ref(), job.salary.as_ref()),
        culture: culture_match(&profile.interests, job),
        technology: technology_match(&profile.technologies, &job.technologies),
    };

    let match_score = weights.weighted_sum(&breakdown).round().clamp(0.0, 100.0) as u32;

    let (strengths, missing_skills) = partition_job_skills(user_skills, job);
    let recommended_skills = complementary_skills(user_skills, &strengths);
    let improvement_areas = flag_improvement_areas(&breakdown, remote_mismatch(profile, job));

    debug!(
        job_id = %job.id,
        match_score,
        matched = skills.matched_skills.len(),
        missing_critical = skills.missing_critical.len(),
        missing_preferred = skills.missing_preferred.len(),
        "Scored job"
    );

    MatchResult {
        job_id: job.id.clone(),
        match_score,
        breakdown,
        missing_skills,
        recommended_skills,
        strengths,
        improvement_areas,
    }
}

/// Splits the job's skill pool into (held, missing) relative to `user_skills`.
fn partition_job_skills(user_skills: &[String], job: &Job) -> (Vec<String>, Vec<String>) {
    job.skill_pool()
        .into_iter()
        .map(str::to_string)
        .partition(|skill| contains_similar(user_skills, skill))
}

/// Suggestions keyed by the user's strengths, minus anything the user lists.
fn complementary_skills(user_skills: &[String], strengths: &[String]) -> Vec<String> {
    let mut recommended: Vec<String> = Vec::new();

    for strength in strengths {
        for (key, suggestions) in COMPLEMENTARY_SKILLS {
            if !same_named_skill(key, strength) {
                continue;
            }
            for suggestion in suggestions.iter() {
                if contains_similar(user_skills, suggestion) {
                    continue;
                }
                if recommended.iter().any(|r| r == suggestion) {
                    continue;
                }
                recommended.push(suggestion.to_string());
            }
        }
    }

    recommended
}

/// A remote/onsite mismatch is a preference clash, not something the
/// candidate can improve, so it never raises the location flag.
fn flag_improvement_areas(b: &ScoreBreakdown, remote_mismatch: bool) -> Vec<ImprovementArea> {
    let mut areas = Vec::new();
    if b.skills < SKILLS_IMPROVEMENT_THRESHOLD {
        areas.push(ImprovementArea::Skills);
    }
    if b.experience < EXPERIENCE_IMPROVEMENT_THRESHOLD {
        areas.push(ImprovementArea::Experience);
    }
    if b.technology < TECHNOLOGY_IMPROVEMENT_THRESHOLD {
        areas.push(ImprovementArea::Technology);
    }
    if !remote_mismatch && b.location < LOCATION_IMPROVEMENT_THRESHOLD {
        areas.push(ImprovementArea::Location);
    }
    areas
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
