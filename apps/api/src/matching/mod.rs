// Job matching engine: skill normalization, six dimension scorers, the weighted
// aggregator with recommendations, and cross-job skill-gap analysis.
// Everything except `handlers` and `validation` is pure and synchronous.

pub mod aggregator;
pub mod dimensions;
pub mod handlers;
pub mod matcher;
pub mod normalizer;
pub mod skill_gap;
pub mod validation;

pub use aggregator::{
    calculate_match_score, generate_recommendations, ImprovementArea, MatchResult, MatchWeights,
    ScoreBreakdown, DEFAULT_RECOMMENDATION_LIMIT, MIN_RECOMMENDATION_SCORE,
};
pub use matcher::{JobMatcher, WeightedJobMatcher};
pub use normalizer::skills_similar;
pub use skill_gap::{
    analyze_skill_gaps_for_jobs, LearningPriority, LearningRecommendation, SkillGapAnalysis,
};
