//! Intro scoring service library
//!
//! Rubric-driven scoring for spoken self-introductions: five independent
//! heuristic sub-scorers combined through configurable section weights.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
