use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::profile::{CandidateProfile, JobPosting};
use crate::scoring::matching::{
    job_keywords, match_percentage, match_report, rank_jobs, MatchReport, RankedJob,
    DEFAULT_RANK_LIMIT,
};
use crate::scoring::profile::{analyze_profile, ProfileAnalysis};

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub candidate_skills: Vec<String>,
    #[serde(default)]
    pub job_keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateMatchRequest {
    #[serde(default)]
    pub candidate_skills: Vec<String>,
    #[serde(default)]
    pub job_tags: Vec<String>,
    #[serde(default)]
    pub job_requirements: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RankJobsRequest {
    #[serde(default)]
    pub candidate_skills: Vec<String>,
    pub jobs: Vec<JobPosting>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CandidateMatchResponse {
    pub match_percentage: u32,
}

#[derive(Debug, Serialize)]
pub struct RankJobsResponse {
    pub matched_jobs: Vec<RankedJob>,
}

/// POST /api/v1/match
pub async fn handle_match(Json(request): Json<MatchRequest>) -> Json<MatchReport> {
    Json(match_report(&request.candidate_skills, &request.job_keywords))
}

/// POST /api/v1/match/candidate
///
/// Company-side view: the job's tags plus the words of its requirements
/// form the keyword side. The applicant list only shows the percentage.
pub async fn handle_candidate_match(
    Json(request): Json<CandidateMatchRequest>,
) -> Json<CandidateMatchResponse> {
    let keywords = job_keywords(&request.job_tags, &request.job_requirements);
    Json(CandidateMatchResponse {
        match_percentage: match_percentage(&request.candidate_skills, &keywords),
    })
}

/// POST /api/v1/match/jobs
pub async fn handle_rank_jobs(
    Json(request): Json<RankJobsRequest>,
) -> Result<Json<RankJobsResponse>, AppError> {
    let limit = request.limit.unwrap_or(DEFAULT_RANK_LIMIT);
    if limit == 0 {
        return Err(AppError::Validation("limit must be at least 1".to_string()));
    }
    let matched_jobs = rank_jobs(&request.candidate_skills, request.jobs, limit);
    Ok(Json(RankJobsResponse { matched_jobs }))
}

/// POST /api/v1/profile/analysis
pub async fn handle_profile_analysis(
    Json(profile): Json<CandidateProfile>,
) -> Json<ProfileAnalysis> {
    Json(analyze_profile(&profile))
}
