pub mod job;
pub mod profile;

pub use job::{ExperienceLevel, Job, JobSalary, StudioType};
pub use profile::{CategorizedSkills, SalaryRange, SkillSet, UserProfile, WorkStyle};
