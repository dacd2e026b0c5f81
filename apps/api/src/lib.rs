//! Gaming-industry job matching: scores a candidate profile against job
//! listings, ranks recommendations, and analyzes skill gaps.

pub mod config;
pub mod errors;
pub mod matching;
pub mod models;
pub mod routes;
pub mod state;

pub use matching::{
    analyze_skill_gaps_for_jobs, calculate_match_score, generate_recommendations, skills_similar,
};
