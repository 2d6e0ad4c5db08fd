//! Job-seeker to vocational sector matching.
//!
//! [`psychometrics`] turns questionnaire answers into twelve work-style trait scores,
//! [`sectors`] checks hard eligibility gates and ranks sectors by weighted fit, and
//! [`assessment`] composes both behind a question bank and an HTTP router.

pub mod assessment;
pub mod config;
pub mod error;
pub mod psychometrics;
pub mod sectors;
pub mod telemetry;

pub use assessment::{assessment_router, AssessmentService, StaticQuestionBank};
pub use psychometrics::{ScoringEngine, TraitProfile};
pub use sectors::{RankedResult, RankingCompositor, SectorConfig};
