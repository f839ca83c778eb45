use std::sync::Arc;

use axum::{
    Form, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use triage_flow::{
    InMemorySessionStorage, Pipeline, PipelineBuilder, PipelineRunner, Session, SessionStorage,
};
use uuid::Uuid;

use crate::config::ServiceConfig;
use crate::intake::{self, IntakeForm};
use crate::llm::LlmClient;
use crate::mailer::Mailer;
use crate::pages;
use crate::session;
use crate::tasks::{
    ClassifyPatientTask, RecommendationTask, SendReportTask, session_keys,
    types::{DeliveryStatus, PatientRecord},
};

#[derive(Clone)]
pub struct AppState {
    runner: Arc<PipelineRunner>,
    storage: Arc<dyn SessionStorage>,
    session_secret: String,
}

impl AppState {
    pub fn new(config: &ServiceConfig, llm: Arc<dyn LlmClient>, mailer: Arc<dyn Mailer>) -> Self {
        let pipeline = Arc::new(build_triage_pipeline(llm, mailer));
        let storage: Arc<dyn SessionStorage> =
            Arc::new(InMemorySessionStorage::with_ttl(config.session_ttl));
        let runner = Arc::new(PipelineRunner::new(pipeline, storage.clone()));

        Self {
            runner,
            storage,
            session_secret: config.session_secret.clone(),
        }
    }
}

/// Classify → recommend → notify, strictly in that order.
fn build_triage_pipeline(llm: Arc<dyn LlmClient>, mailer: Arc<dyn Mailer>) -> Pipeline {
    PipelineBuilder::new("patient_triage")
        .add_task(Arc::new(ClassifyPatientTask::new(llm)))
        .add_task(Arc::new(RecommendationTask))
        .add_task(Arc::new(SendReportTask::new(mailer)))
        .build()
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(intake_form).post(submit_intake))
        .route("/result", get(triage_result))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

async fn health_check() -> &'static str {
    "OK"
}

async fn intake_form() -> Html<String> {
    Html(pages::intake_page())
}

/// Store the normalized submission under a fresh session token and redirect
/// to the result page. The pipeline itself runs on the second leg.
async fn submit_intake(State(state): State<AppState>, Form(form): Form<IntakeForm>) -> Response {
    let record = intake::normalize(form);
    info!(
        patient = %record.name,
        symptom_count = record.symptoms.len(),
        "intake submission received"
    );

    let token = Uuid::new_v4().to_string();
    let session = Session::new(token.clone());
    session
        .context
        .set(session_keys::PATIENT_RECORD, &record)
        .await;

    if let Err(e) = state.storage.save(session).await {
        error!(error = %e, "failed to store intake submission");
        return (StatusCode::INTERNAL_SERVER_ERROR, "failed to store submission").into_response();
    }

    let cookie = session::build_cookie(&state.session_secret, &token);
    (
        [(header::SET_COOKIE, cookie)],
        Redirect::to("/result"),
    )
        .into_response()
}

/// Consume the stored submission, run the triage pipeline over it, and
/// render the final record. The entry is taken before the run, so a revisit
/// (or an expired/unknown token) lands back on the intake form.
async fn triage_result(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(token) = session::token_from_headers(&headers, &state.session_secret) else {
        return Redirect::to("/").into_response();
    };

    match state.runner.run_once(&token).await {
        Ok(Some((session, result))) => {
            info!(session_id = %session.id, response = ?result.response, "triage pipeline completed");

            let record: Option<PatientRecord> =
                session.context.get(session_keys::PATIENT_RECORD).await;
            let delivery: Option<DeliveryStatus> =
                session.context.get(session_keys::REPORT_DELIVERY).await;

            match record {
                Some(record) => Html(pages::result_page(&record, delivery)).into_response(),
                None => Redirect::to("/").into_response(),
            }
        }
        Ok(None) => Redirect::to("/").into_response(),
        Err(e) => {
            error!(error = %e, "triage pipeline failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "triage pipeline failed").into_response()
        }
    }
}
