use serde::{Deserialize, Serialize};

use crate::models::profile::CandidateProfile;

const TECHNICAL_MARKERS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "react",
    "node",
    "sql",
    "aws",
    "docker",
];

const SOFT_MARKERS: &[&str] = &[
    "communication",
    "leadership",
    "teamwork",
    "problem",
    "creative",
    "management",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillsAnalysis {
    pub total_skills: usize,
    pub technical_skills: Vec<String>,
    pub soft_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileAnalysis {
    pub profile_completeness: u32,
    pub skills_analysis: SkillsAnalysis,
}

/// Completeness out of 100: name, skills, experience and education are worth
/// 20 each; bio and resume link 10 each. Blank text counts as missing.
pub fn profile_completeness(profile: &CandidateProfile) -> u32 {
    let sections: [(bool, u32); 6] = [
        (is_filled(&profile.name), 20),
        (!profile.skills.is_empty(), 20),
        (is_filled(&profile.experience), 20),
        (is_filled(&profile.education), 20),
        (is_filled(&profile.bio), 10),
        (is_filled(&profile.resume_url), 10),
    ];
    sections
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, weight)| weight)
        .sum()
}

/// Buckets skills by marker substrings. A skill may land in both buckets
/// ("project management" with "java" in it) or in neither.
pub fn skills_analysis<S: AsRef<str>>(skills: &[S]) -> SkillsAnalysis {
    let tagged = |markers: &[&str]| -> Vec<String> {
        skills
            .iter()
            .map(|s| s.as_ref())
            .filter(|s| {
                let lower = s.to_lowercase();
                markers.iter().any(|m| lower.contains(*m))
            })
            .map(str::to_string)
            .collect()
    };

    SkillsAnalysis {
        total_skills: skills.len(),
        technical_skills: tagged(TECHNICAL_MARKERS),
        soft_skills: tagged(SOFT_MARKERS),
    }
}

pub fn analyze_profile(profile: &CandidateProfile) -> ProfileAnalysis {
    ProfileAnalysis {
        profile_completeness: profile_completeness(profile),
        skills_analysis: skills_analysis(&profile.skills),
    }
}

fn is_filled(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}
