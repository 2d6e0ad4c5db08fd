//! Assessment facade: question bank seam, scoring plus ranking service, and HTTP routes.

pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use repository::{QuestionBank, QuestionBankError, StaticQuestionBank};
pub use router::{assessment_router, AnswersPayload};
pub use service::{AssessmentError, AssessmentService, Recommendation, SectorSummary};
