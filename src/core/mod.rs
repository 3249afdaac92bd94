//! School records domain: attendance, enrollment and grades

pub mod attendance;
pub mod enrollment;
pub mod errors;
pub mod grades;
pub mod models;
pub mod report;
