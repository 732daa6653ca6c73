// Skill matching and profile analysis endpoints over crate::scoring.

pub mod handlers;
