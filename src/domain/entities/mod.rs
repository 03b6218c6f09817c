pub mod rubric;
pub mod score_report;
