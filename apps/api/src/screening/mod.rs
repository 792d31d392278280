// Resume screening: skill extraction, ATS sub-scores, readiness, course
// recommendations, and the orchestrator that ties them to an upload.
// Everything below `analysis` is a pure function of text and catalog.

pub mod analysis;
pub mod ats;
pub mod catalog;
pub mod components;
pub mod handlers;
pub mod readiness;
pub mod recommendations;
pub mod skills;
