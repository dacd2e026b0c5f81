//! Request validation at the HTTP boundary. The scorer itself never fails, so
//! anything it would silently default (bad salary numbers, negative years) is
//! rejected here instead.

use crate::errors::AppError;
use crate::models::{Job, JobSalary, SalaryRange, UserProfile};

pub fn validate_profile(profile: &UserProfile) -> Result<(), AppError> {
    if let Some(years) = profile.experience {
        if !years.is_finite() || years < 0.0 {
            return Err(AppError::UnprocessableEntity(format!(
                "experience must be a non-negative number of years, got {years}"
            )));
        }
    }
    if let Some(range) = &profile.salary_expectation {
        validate_salary_range(range, "salary_expectation")?;
    }
    Ok(())
}

pub fn validate_job(job: &Job) -> Result<(), AppError> {
    if job.id.trim().is_empty() {
        return Err(AppError::Validation("job id cannot be empty".to_string()));
    }
    if let Some(JobSalary::Range(range)) = &job.salary {
        validate_salary_range(range, &format!("salary of job {}", job.id))?;
    }
    Ok(())
}

/// Checks batch size and every job in it.
pub fn validate_jobs(jobs: &[Job], max_jobs: usize) -> Result<(), AppError> {
    if jobs.len() > max_jobs {
        return Err(AppError::Validation(format!(
            "at most {max_jobs} jobs per request, got {}",
            jobs.len()
        )));
    }
    jobs.iter().try_for_each(validate_job)
}

pub fn validate_limit(limit: usize) -> Result<(), AppError> {
    if limit == 0 {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }
    Ok(())
}

fn validate_salary_range(range: &SalaryRange, field: &str) -> Result<(), AppError> {
    if !range.min.is_finite() || !range.max.is_finite() {
        return Err(AppError::UnprocessableEntity(format!(
            "{field} must have numeric min and max"
        )));
    }
    if range.min < 0.0 || range.min > range.max {
        return Err(AppError::UnprocessableEntity(format!(
            "{field} must satisfy 0 <= min <= max, got {}..{}",
            range.min, range.max
        )));
    }
    Ok(())
}
