//! Pluggable matcher: the seam between the HTTP layer and a scoring backend.
//!
//! Default: `WeightedJobMatcher` (fixed-weight heuristic scorer, deterministic).
//! `AppState` holds an `Arc<dyn JobMatcher>`, so handlers never name a backend.

use crate::matching::aggregator::{rank_jobs, score_job, MatchResult, MatchWeights};
use crate::matching::skill_gap::{analyze_skill_gaps_for_jobs, SkillGapAnalysis};
use crate::models::{Job, UserProfile};

/// Implement this to swap scoring backends without touching handlers.
pub trait JobMatcher: Send + Sync {
    fn score(&self, profile: &UserProfile, job: &Job) -> MatchResult;

    fn recommend(&self, profile: &UserProfile, jobs: &[Job], limit: usize) -> Vec<MatchResult>;

    fn skill_gaps(&self, profile: &UserProfile, jobs: &[Job]) -> SkillGapAnalysis;

    /// Short label surfaced in logs.
    fn backend(&self) -> &'static str;
}

/// Weighted six-dimension scorer.
#[derive(Debug, Clone, Default)]
pub struct WeightedJobMatcher {
    weights: MatchWeights,
}

impl WeightedJobMatcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }
}

impl JobMatcher for WeightedJobMatcher {
    fn score(&self, profile: &UserProfile, job: &Job) -> MatchResult {
        score_job(&profile.flat_skills(), profile, job, &self.weights)
    }

    fn recommend(&self, profile: &UserProfile, jobs: &[Job], limit: usize) -> Vec<MatchResult> {
        rank_jobs(profile, jobs, limit, &self.weights)
    }

    fn skill_gaps(&self, profile: &UserProfile, jobs: &[Job]) -> SkillGapAnalysis {
        analyze_skill_gaps_for_jobs(profile, jobs)
    }

    fn backend(&self) -> &'static str {
        "weighted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::aggregator::calculate_match_score;
    use crate::models::SkillSet;
    use std::sync::Arc;

    fn profile() -> UserProfile {
        UserProfile {
            experience: Some(4.0),
            skills: SkillSet::Flat(vec!["Unity".into(), "C#".into()]),
            ..Default::default()
        }
    }

    fn job() -> Job {
        Job {
            id: "job-1".into(),
            requirements: vec!["Unity".into(), "C#".into(), "Blender".into()],
            experience_level: Some("mid".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_matcher_agrees_with_free_function() {
        let matcher: Arc<dyn JobMatcher> = Arc::new(WeightedJobMatcher::default());
        assert_eq!(matcher.score(&profile(), &job()), calculate_match_score(&profile(), &job()));
        assert_eq!(matcher.backend(), "weighted");
    }

    #[test]
    fn test_custom_weights_change_overall_score() {
        let skills_only = WeightedJobMatcher::new(MatchWeights {
            skills: 1.0,
            experience: 0.0,
            location: 0.0,
            salary: 0.0,
            culture: 0.0,
            technology: 0.0,
        });
        assert_eq!(skills_only.score(&profile(), &job()).match_score, 70);
        assert_eq!(skills_only.weights().skills, 1.0);
    }

    #[test]
    fn test_recommend_respects_limit() {
        let matcher = WeightedJobMatcher::default();
        let jobs = vec![job(), job(), job()];
        assert_eq!(matcher.recommend(&profile(), &jobs, 2).len(), 2);
    }
}
