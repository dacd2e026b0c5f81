//! Skill-Gap Analyzer: what a candidate is missing across a whole set of jobs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matching::normalizer::{contains_similar, skills_similar};
use crate::models::{Job, UserProfile};

/// A missing skill required by at least this share of the analyzed jobs is critical.
pub const CRITICAL_JOB_SHARE: f64 = 0.6;

struct LearningPath {
    resources: &'static [&'static str],
    estimated_time: &'static str,
}

const LEARNING_PATHS: &[(&str, LearningPath)] = &[
    (
        "unity",
        LearningPath {
            resources: &["Unity Learn", "Unity Documentation", "Brackeys tutorials"],
            estimated_time: "2-3 months",
        },
    ),
    (
        "c#",
        LearningPath {
            resources: &["Microsoft C# Documentation", "C# Yellow Book"],
            estimated_time: "1-2 months",
        },
    ),
    (
        "game design",
        LearningPath {
            resources: &["The Art of Game Design", "GDC Vault talks"],
            estimated_time: "3-6 months",
        },
    ),
];

const HIGH_PRIORITY_FALLBACK: LearningPath = LearningPath {
    resources: &["Online courses", "Official documentation", "Practice projects"],
    estimated_time: "1-3 months",
};

const MEDIUM_PRIORITY_FALLBACK: LearningPath = LearningPath {
    resources: &["Online tutorials", "Practice projects"],
    estimated_time: "2-4 weeks",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LearningPriority {
    High,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningRecommendation {
    pub skill: String,
    pub priority: LearningPriority,
    pub resources: Vec<String>,
    pub estimated_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGapAnalysis {
    pub missing_critical_skills: Vec<String>,
    pub missing_preferred_skills: Vec<String>,
    pub strength_areas: Vec<String>,
    /// High-priority entries first, then medium.
    pub learning_recommendations: Vec<LearningRecommendation>,
}

/// Aggregates requirements and technologies over `jobs` and classifies each
/// skill as a strength, a critical gap, or a preferred gap.
pub fn analyze_skill_gaps_for_jobs(profile: &UserProfile, jobs: &[Job]) -> SkillGapAnalysis {
    if jobs.is_empty() {
        return SkillGapAnalysis::default();
    }

    let user_skills = profile.flat_skills();
    let mut analysis = SkillGapAnalysis::default();

    for skill in union_of_job_skills(jobs) {
        if contains_similar(&user_skills, &skill) {
            analysis.strength_areas.push(skill);
            continue;
        }

        let demanding_jobs = jobs
            .iter()
            .filter(|job| contains_similar(&job.requirements, &skill))
            .count();
        let share = demanding_jobs as f64 / jobs.len() as f64;

        if share >= CRITICAL_JOB_SHARE {
            analysis.missing_critical_skills.push(skill);
        } else {
            analysis.missing_preferred_skills.push(skill);
        }
    }

    analysis.learning_recommendations = analysis
        .missing_critical_skills
        .iter()
        .map(|skill| recommendation(skill, LearningPriority::High))
        .chain(
            analysis
                .missing_preferred_skills
                .iter()
                .map(|skill| recommendation(skill, LearningPriority::Medium)),
        )
        .collect();

    debug!(
        jobs = jobs.len(),
        critical = analysis.missing_critical_skills.len(),
        preferred = analysis.missing_preferred_skills.len(),
        strengths = analysis.strength_areas.len(),
        "Analyzed skill gaps"
    );

    analysis
}

/// All requirements and technologies across `jobs`, first-seen order, with
/// similar spellings collapsed into the first one seen.
fn union_of_job_skills(jobs: &[Job]) -> Vec<String> {
    let mut union: Vec<String> = Vec::new();
    for job in jobs {
        for skill in job.skill_pool() {
            if !union.iter().any(|s| skills_similar(s, skill)) {
                union.push(skill.to_string());
            }
        }
    }
    union
}

fn recommendation(skill: &str, priority: LearningPriority) -> LearningRecommendation {
    let path = match priority {
        LearningPriority::High => LEARNING_PATHS
            .iter()
            .find(|(key, _)| skills_similar(key, skill))
            .map(|(_, path)| path)
            .unwrap_or(&HIGH_PRIORITY_FALLBACK),
        LearningPriority::Medium => &MEDIUM_PRIORITY_FALLBACK,
    };

    LearningRecommendation {
        skill: skill.to_string(),
        priority,
        resources: path.resources.iter().map(|r| r.to_string()).collect(),
        estimated_time: path.estimated_time.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillSet;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn job(id: &str, requirements: &[&str], technologies: &[&str]) -> Job {
        Job {
            id: id.into(),
            requirements: strings(requirements),
            technologies: strings(technologies),
            ..Default::default()
        }
    }

    fn profile(skills: &[&str]) -> UserProfile {
        UserProfile {
            skills: SkillSet::Flat(strings(skills)),
            ..Default::default()
        }
    }

    #[test]
    fn test_skill_in_four_of_five_jobs_is_critical() {
        let jobs = vec![
            job("1", &["C++", "Unity"], &[]),
            job("2", &["C++"], &[]),
            job("3", &["C++", "Houdini"], &[]),
            job("4", &["C++"], &[]),
            job("5", &["Unity"], &[]),
        ];
        let analysis = analyze_skill_gaps_for_jobs(&profile(&["Unity"]), &jobs);

        assert!(analysis.missing_critical_skills.contains(&"C++".to_string()));
        assert!(!analysis.missing_preferred_skills.contains(&"C++".to_string()));
        assert_eq!(analysis.missing_preferred_skills, strings(&["Houdini"]));
        assert_eq!(analysis.strength_areas, strings(&["Unity"]));
    }

    #[test]
    fn test_exactly_sixty_percent_is_critical() {
        let jobs = vec![
            job("1", &["Maya"], &[]),
            job("2", &["Maya"], &[]),
            job("3", &["Maya"], &[]),
            job("4", &["Git"], &[]),
            job("5", &["Git"], &[]),
        ];
        let analysis = analyze_skill_gaps_for_jobs(&profile(&[]), &jobs);
        assert_eq!(analysis.missing_critical_skills, strings(&["Maya"]));
        assert_eq!(analysis.missing_preferred_skills, strings(&["Git"]));
    }

    #[test]
    fn test_variant_spellings_count_as_one_skill() {
        let jobs = vec![
            job("1", &["C++"], &[]),
            job("2", &["cpp"], &[]),
            job("3", &["Lua"], &[]),
        ];
        let analysis = analyze_skill_gaps_for_jobs(&profile(&[]), &jobs);
        assert_eq!(analysis.missing_critical_skills, strings(&["C++"]));
        assert_eq!(analysis.missing_preferred_skills, strings(&["Lua"]));
    }

    #[test]
    fn test_technology_only_skills_are_preferred() {
        let jobs = vec![job("1", &["Unity"], &["Perforce"]), job("2", &["Unity"], &["Perforce"])];
        let analysis = analyze_skill_gaps_for_jobs(&profile(&[]), &jobs);
        assert_eq!(analysis.missing_critical_skills, strings(&["Unity"]));
        assert_eq!(analysis.missing_preferred_skills, strings(&["Perforce"]));
    }

    #[test]
    fn test_learning_recommendations_priorities_and_resources() {
        let jobs = vec![
            job("1", &["Unity", "Game Design", "Lua"], &[]),
            job("2", &["Unity", "Game Design"], &["Jira"]),
        ];
        let analysis = analyze_skill_gaps_for_jobs(&profile(&["Lua"]), &jobs);

        let recs = &analysis.learning_recommendations;
        assert_eq!(recs.len(), 3);

        assert_eq!(recs[0].skill, "Unity");
        assert_eq!(recs[0].priority, LearningPriority::High);
        assert!(recs[0].resources.contains(&"Unity Learn".to_string()));
        assert_eq!(recs[0].estimated_time, "2-3 months");

        assert_eq!(recs[1].skill, "Game Design");
        assert_eq!(recs[1].estimated_time, "3-6 months");

        assert_eq!(recs[2].skill, "Jira");
        assert_eq!(recs[2].priority, LearningPriority::Medium);
        assert_eq!(recs[2].estimated_time, "2-4 weeks");
    }

    #[test]
    fn test_unknown_critical_skill_uses_fallback() {
        let jobs = vec![job("1", &["Houdini"], &[])];
        let analysis = analyze_skill_gaps_for_jobs(&profile(&[]), &jobs);
        let rec = &analysis.learning_recommendations[0];
        assert_eq!(rec.priority, LearningPriority::High);
        assert_eq!(rec.estimated_time, "1-3 months");
        assert_eq!(rec.resources.len(), 3);
    }

    #[test]
    fn test_no_jobs_gives_empty_analysis() {
        let analysis = analyze_skill_gaps_for_jobs(&profile(&["Unity"]), &[]);
        assert_eq!(analysis, SkillGapAnalysis::default());
    }
}
