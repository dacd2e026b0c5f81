//! Dimension scorers: six independent 0–100 sub-scores for one profile/job pair.
//!
//! Every function here is pure. Missing inputs resolve to the documented
//! neutral default for that dimension instead of an error.

use crate::matching::normalizer::contains_similar;
use crate::models::{
    ExperienceLevel, Job, JobSalary, SalaryRange, StudioType, UserProfile, WorkStyle,
};

// ────────────────────────────────────────────────────────────────────────────
// Constants and static tables
// ────────────────────────────────────────────────────────────────────────────

/// Share of `requirements` (by position) treated as critical.
pub const CRITICAL_SHARE: f64 = 0.7;
const CRITICAL_POINTS: f64 = 70.0;
const PREFERRED_POINTS: f64 = 30.0;

const UNKNOWN_LEVEL_SCORE: f64 = 70.0;
const EXPERIENCE_FLOOR: f64 = 20.0;
const POINTS_PER_YEAR_OFF: f64 = 10.0;

const REMOTE_BOTH: f64 = 100.0;
const REMOTE_WANTED_ONSITE_JOB: f64 = 30.0;
const ONSITE_WANTED_REMOTE_JOB: f64 = 40.0;
const LOCATION_UNKNOWN: f64 = 60.0;
const SAME_CITY: f64 = 100.0;
const SAME_REGION: f64 = 80.0;
const GAMING_HUB: f64 = 70.0;
const LOCATION_DEFAULT: f64 = 50.0;

const SALARY_UNKNOWN: f64 = 70.0;
const SALARY_OVERLAP_BASE: f64 = 60.0;
const SALARY_FLOOR: f64 = 20.0;

const CULTURE_BASE: f64 = 60.0;
const RECOGNIZED_STUDIO_BONUS: f64 = 10.0;

const NO_TECHNOLOGIES_LISTED: f64 = 80.0;

/// Cities with a dense games industry.
const GAMING_HUBS: &[&str] = &[
    "seattle",
    "san francisco",
    "los angeles",
    "austin",
    "montreal",
    "vancouver",
    "toronto",
    "london",
    "stockholm",
    "helsinki",
    "tokyo",
    "seoul",
    "berlin",
    "warsaw",
];

const RECOGNIZED_STUDIOS: &[&str] = &[
    "blizzard",
    "riot games",
    "valve",
    "naughty dog",
    "rockstar",
    "bungie",
    "epic games",
    "ubisoft",
    "electronic arts",
    "nintendo",
    "bethesda",
    "cd projekt",
    "insomniac",
    "supercell",
];

const AAA_INTERESTS: &[&str] = &["aaa", "large team", "big budget", "console", "blockbuster"];
const INDIE_INTERESTS: &[&str] = &[
    "indie",
    "small team",
    "creative freedom",
    "innovation",
    "experimental",
];
const MOBILE_INTERESTS: &[&str] = &["mobile", "casual games", "f2p", "social games"];

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Skills dimension plus the lists the aggregator reuses.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillsMatch {
    pub score: f64,
    /// User skills similar to something the job asks for.
    pub matched_skills: Vec<String>,
    pub missing_critical: Vec<String>,
    pub missing_preferred: Vec<String>,
}

/// Splits `requirements` into (critical, preferred) by position.
///
/// The critical tier holds `round(0.7 * n)` items, at least one when the
/// list is non-empty: 3 requirements give 2 critical and 1 preferred.
pub fn split_requirements(requirements: &[String]) -> (&[String], &[String]) {
    if requirements.is_empty() {
        return (requirements, requirements);
    }
    let critical_len = ((requirements.len() as f64 * CRITICAL_SHARE).round() as usize)
        .clamp(1, requirements.len());
    requirements.split_at(critical_len)
}

/// `critical_ratio * 70 + preferred_ratio * 30`; an empty tier earns full credit.
pub fn skills_match(user_skills: &[String], job: &Job) -> SkillsMatch {
    let (critical, preferred) = split_requirements(&job.requirements);

    let missing_critical: Vec<String> = critical
        .iter()
        .filter(|req| !contains_similar(user_skills, req))
        .cloned()
        .collect();
    let missing_preferred: Vec<String> = preferred
        .iter()
        .filter(|req| !contains_similar(user_skills, req))
        .cloned()
        .collect();

    let critical_points = tier_points(critical.len(), missing_critical.len(), CRITICAL_POINTS);
    let preferred_points = tier_points(preferred.len(), missing_preferred.len(), PREFERRED_POINTS);

    let pool: Vec<&String> = critical
        .iter()
        .chain(preferred)
        .chain(&job.technologies)
        .collect();
    let matched_skills = user_skills
        .iter()
        .filter(|skill| contains_similar(&pool, skill))
        .cloned()
        .collect();

    SkillsMatch {
        score: clamp_score(critical_points + preferred_points),
        matched_skills,
        missing_critical,
        missing_preferred,
    }
}

fn tier_points(total: usize, missing: usize, points: f64) -> f64 {
    if total == 0 {
        return points;
    }
    (total - missing) as f64 / total as f64 * points
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

/// 100 inside the level's band, minus 10 per year outside it, floored at 20.
/// Unknown levels score 70.
pub fn experience_match(years: f64, level: Option<ExperienceLevel>) -> f64 {
    let Some(level) = level else {
        return UNKNOWN_LEVEL_SCORE;
    };
    let (min, max) = level.year_range();
    if years >= min && years <= max {
        return 100.0;
    }
    let distance = if years < min { min - years } else { years - max };
    clamp_score((100.0 - POINTS_PER_YEAR_OFF * distance).max(EXPERIENCE_FLOOR))
}

// ────────────────────────────────────────────────────────────────────────────
// Location
// ────────────────────────────────────────────────────────────────────────────

pub fn location_match(profile: &UserProfile, job: &Job) -> f64 {
    match (profile.work_style, job.remote) {
        (Some(WorkStyle::Remote), true) => return REMOTE_BOTH,
        (Some(WorkStyle::Remote), false) => return REMOTE_WANTED_ONSITE_JOB,
        (Some(WorkStyle::Onsite), true) => return ONSITE_WANTED_REMOTE_JOB,
        _ => {}
    }

    let (Some(user_location), Some(job_location)) = (profile.location(), job.location()) else {
        return LOCATION_UNKNOWN;
    };
    let user_location = user_location.to_lowercase();
    let job_location = job_location.to_lowercase();

    if user_location.contains(&job_location) || job_location.contains(&user_location) {
        return SAME_CITY;
    }

    let user_parts = location_components(&user_location);
    let job_parts = location_components(&job_location);
    if user_parts.iter().any(|p| job_parts.contains(p)) {
        return SAME_REGION;
    }

    if GAMING_HUBS.iter().any(|hub| job_location.contains(hub)) {
        return GAMING_HUB;
    }

    LOCATION_DEFAULT
}

/// True when the location score came from a remote/onsite mismatch rather
/// than from comparing places.
pub fn remote_mismatch(profile: &UserProfile, job: &Job) -> bool {
    matches!(
        (profile.work_style, job.remote),
        (Some(WorkStyle::Remote), false) | (Some(WorkStyle::Onsite), true)
    )
}

fn location_components(location: &str) -> Vec<&str> {
    location
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Salary
// ────────────────────────────────────────────────────────────────────────────

/// Compares the job's band to the user's expectation.
///
/// * missing side, free-text salary, or non-finite numbers → 70
/// * job band inside user band → 100
/// * partial overlap → `60 + overlap / user_range * 40`
/// * disjoint → `100 - gap / user_average * 100`, floored at 20
pub fn salary_match(expectation: Option<&SalaryRange>, salary: Option<&JobSalary>) -> f64 {
    let (Some(user), Some(JobSalary::Range(job))) = (expectation, salary) else {
        return SALARY_UNKNOWN;
    };
    if ![user.min, user.max, job.min, job.max]
        .iter()
        .all(|v| v.is_finite())
    {
        return SALARY_UNKNOWN;
    }

    if job.min >= user.min && job.max <= user.max {
        return 100.0;
    }

    let overlap_start = user.min.max(job.min);
    let overlap_end = user.max.min(job.max);
    if overlap_start <= overlap_end {
        let user_range = user.max - user.min;
        let overlap_ratio = if user_range > 0.0 {
            (overlap_end - overlap_start) / user_range
        } else {
            1.0
        };
        return clamp_score(
            (SALARY_OVERLAP_BASE + overlap_ratio * 40.0).max(SALARY_OVERLAP_BASE),
        );
    }

    let gap = if job.max < user.min {
        user.min - job.max
    } else {
        job.min - user.max
    };
    let user_average = (user.min + user.max) / 2.0;
    if user_average <= 0.0 {
        return SALARY_UNKNOWN;
    }
    let distance_percent = gap / user_average;
    clamp_score((100.0 - distance_percent * 100.0).max(SALARY_FLOOR))
}

// ────────────────────────────────────────────────────────────────────────────
// Culture
// ────────────────────────────────────────────────────────────────────────────

/// Base 60, plus a studio-type bonus when the user's interests point the same
/// way, plus 10 for a recognized studio. Capped at 100.
pub fn culture_match(interests: &[String], job: &Job) -> f64 {
    let mut score = CULTURE_BASE;

    let studio_bonus = match &job.studio_type {
        Some(StudioType::Aaa) => Some((AAA_INTERESTS, 20.0)),
        Some(StudioType::Indie) => Some((INDIE_INTERESTS, 20.0)),
        Some(StudioType::Mobile) => Some((MOBILE_INTERESTS, 15.0)),
        Some(StudioType::Other(_)) | None => None,
    };
    if let Some((keywords, bonus)) = studio_bonus {
        if interests_mention(interests, keywords) {
            score += bonus;
        }
    }

    let recognized = job
        .company
        .as_deref()
        .map(|c| {
            let company = c.to_lowercase();
            RECOGNIZED_STUDIOS.iter().any(|s| company.contains(s))
        })
        .unwrap_or(false);
    if recognized {
        score += RECOGNIZED_STUDIO_BONUS;
    }

    clamp_score(score)
}

fn interests_mention(interests: &[String], keywords: &[&str]) -> bool {
    interests.iter().any(|interest| {
        let interest = interest.to_lowercase();
        keywords.iter().any(|k| interest.contains(k))
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Technology
// ────────────────────────────────────────────────────────────────────────────

/// Percentage of the job's technologies covered by the user's, rounded.
/// A job listing no technologies scores 80.
pub fn technology_match(user_technologies: &[String], job_technologies: &[String]) -> f64 {
    let listed: Vec<&str> = job_technologies
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();
    if listed.is_empty() {
        return NO_TECHNOLOGIES_LISTED;
    }
    let matched = listed
        .iter()
        .filter(|t| contains_similar(user_technologies, t))
        .count();
    clamp_score((matched as f64 / listed.len() as f64 * 100.0).round())
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
