pub mod api;
pub mod db;
pub mod logging;
pub mod matching;

// Commonly used data models for matching functions. Both are read-only
// snapshots of their database rows; matching never mutates them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub id: Option<i64>,
    pub display_name: Option<String>,
    pub title: Option<String>,
    pub location: Option<String>,
    pub experience_level: Option<String>,
    pub availability: Option<String>,
    pub annual_salary: Option<u32>,
    pub daily_rate: Option<u32>,
    pub skills: Vec<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Job {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub seniority: Option<String>,
    pub availability: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub salary_text: Option<String>,
    pub required_skills: Vec<String>,
}
