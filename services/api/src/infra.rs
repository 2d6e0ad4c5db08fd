use career_match::assessment::{AssessmentService, StaticQuestionBank};
use career_match::config::AppConfig;
use career_match::error::AppError;
use career_match::sectors::{GatePolicy, SectorConfig};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

pub(crate) type SharedService = Arc<AssessmentService<StaticQuestionBank>>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the sector tables and the question bank named by `config`.
pub(crate) fn build_service(config: &AppConfig) -> Result<SharedService, AppError> {
    let sectors = SectorConfig::load(&config.sectors)?;
    let bank = StaticQuestionBank::from_path(&config.questions.path)?;
    info!(
        sectors = sectors.len(),
        items = bank.len(),
        top_n = config.ranking.top_n,
        "assessment service assembled"
    );

    Ok(Arc::new(AssessmentService::new(
        Arc::new(bank),
        Arc::new(sectors),
        GatePolicy::default(),
        config.ranking,
    )))
}
