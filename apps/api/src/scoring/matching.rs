//! Skill matching — overlap between a candidate's skills and a job's keywords.
//!
//! Both sides are lower-cased, trimmed and deduplicated. A skill matches when
//! either string contains the other, so "react" matches "react.js" (and,
//! accepted, "java" matches "javascript"). The percentage is display-only: it ranks
//! jobs and candidates but never gates eligibility.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::profile::JobPosting;

pub const DEFAULT_RANK_LIMIT: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub percentage: u32,
    /// Lower-cased candidate skills that matched, in first-seen order.
    pub matching_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_percentage: u32,
    pub matching_skills: Vec<String>,
}

/// Percentage of job keywords covered by the candidate's skills, 0–100.
pub fn match_percentage<S: AsRef<str>, K: AsRef<str>>(
    candidate_skills: &[S],
    job_keywords: &[K],
) -> u32 {
    match_report(candidate_skills, job_keywords).percentage
}

pub fn match_report<S: AsRef<str>, K: AsRef<str>>(
    candidate_skills: &[S],
    job_keywords: &[K],
) -> MatchReport {
    let skills = normalize(candidate_skills);
    let keywords = normalize(job_keywords);

    if keywords.is_empty() {
        return MatchReport {
            percentage: 0,
            matching_skills: vec![],
        };
    }

    let matching_skills: Vec<String> = skills
        .into_iter()
        .filter(|skill| {
            keywords
                .iter()
                .any(|kw| kw.contains(skill.as_str()) || skill.contains(kw.as_str()))
        })
        .collect();

    let ratio = matching_skills.len() as f64 / keywords.len() as f64;
    let percentage = ((ratio * 100.0).round() as u32).min(100);

    MatchReport {
        percentage,
        matching_skills,
    }
}

/// Keywords for the company-side "candidate match": the job's tags followed by
/// every whitespace-separated word of its requirement sentences.
pub fn job_keywords<T: AsRef<str>, R: AsRef<str>>(
    tags: &[T],
    requirements: &[R],
) -> Vec<String> {
    tags.iter()
        .map(|t| t.as_ref().to_string())
        .chain(
            requirements
                .iter()
                .flat_map(|r| r.as_ref().split_whitespace().map(str::to_string)),
        )
        .collect()
}

/// Matches the candidate against every job's tags and orders by percentage,
/// highest first. Ties keep input order. Zero-match jobs stay in the list.
pub fn rank_jobs<S: AsRef<str>>(
    candidate_skills: &[S],
    jobs: Vec<JobPosting>,
    limit: usize,
) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = jobs
        .into_iter()
        .map(|job| {
            let report = match_report(candidate_skills, &job.tags);
            RankedJob {
                job,
                match_percentage: report.percentage,
                matching_skills: report.matching_skills,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
    ranked.truncate(limit);
    ranked
}

/// Lower-case, trim, drop empties and duplicates; keeps first-seen order.
fn normalize<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
