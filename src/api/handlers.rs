//! REST API handlers for the workbench session

use crate::chain::NetworkDescriptor;
use crate::contract::{CompilationResult, ContractCollection, ContractRecord};
use crate::session::{DeployResult, Page, Screen, Session, SessionError, SessionState};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

/// Contract name used when a deploy request names none
pub const DEFAULT_CONTRACT_NAME: &str = "HelloWorld";

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub session: Session,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct ApiError {
    pub error: String,
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

#[derive(Serialize)]
pub struct WalletResponse {
    pub wallet: String,
    pub contracts: usize,
}

/// Body of a `202 Accepted` reply
#[derive(Serialize)]
pub struct AcceptedResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum CompileResponse {
    Done(CompilationResult),
    Accepted(AcceptedResponse),
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum DeployResponse {
    Done(DeployResult),
    Accepted(AcceptedResponse),
}

// ============================================================================
// Request Types
// ============================================================================

#[derive(Deserialize)]
pub struct PageRequest {
    pub page: String,
}

#[derive(Deserialize)]
pub struct SourceRequest {
    pub source: String,
}

#[derive(Deserialize)]
pub struct SaveContractRequest {
    pub name: String,
    /// Replace the editor contents before saving
    pub source: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct DeployRequest {
    pub name: Option<String>,
}

/// `?wait=true` makes compile/deploy answer with the finished result
#[derive(Deserialize, Default)]
pub struct WaitQuery {
    #[serde(default)]
    pub wait: bool,
}

fn error_response(e: SessionError) -> (StatusCode, Json<ApiError>) {
    let status = match &e {
        SessionError::WalletNotConnected => StatusCode::CONFLICT,
        SessionError::ContractNotFound(_) => StatusCode::NOT_FOUND,
        SessionError::InvalidRecord(_) => StatusCode::BAD_REQUEST,
        SessionError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (
        status,
        Json(ApiError {
            error: e.to_string(),
        }),
    )
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /health - Health check
pub async fn health_check() -> &'static str {
    "OK"
}

/// GET /api/session - Full session state
pub async fn get_session(State(state): State<ApiState>) -> Json<SessionState> {
    Json(state.session.snapshot().await)
}

/// GET /api/view - Navbar and the active page's view
pub async fn get_view(State(state): State<ApiState>) -> Json<Screen> {
    Json(state.session.screen().await)
}

/// GET /api/network - Target network details
pub async fn get_network(State(state): State<ApiState>) -> Json<NetworkDescriptor> {
    Json(state.session.network().clone())
}

/// POST /api/page - Navigate
pub async fn set_page(
    State(state): State<ApiState>,
    Json(req): Json<PageRequest>,
) -> ApiResult<Json<Screen>> {
    let page: Page = req
        .page
        .parse()
        .map_err(|error| (StatusCode::BAD_REQUEST, Json(ApiError { error })))?;

    state.session.set_active_page(page).await;
    Ok(Json(state.session.screen().await))
}

/// POST /api/wallet/connect - Connect a wallet and load its contracts
pub async fn connect_wallet(State(state): State<ApiState>) -> ApiResult<Json<WalletResponse>> {
    let wallet = state
        .session
        .connect_wallet()
        .await
        .map_err(error_response)?;
    let contracts = state.session.snapshot().await.contracts.len();
    Ok(Json(WalletResponse { wallet, contracts }))
}

/// POST /api/wallet/disconnect - Forget the wallet
pub async fn disconnect_wallet(State(state): State<ApiState>) -> StatusCode {
    state.session.disconnect_wallet().await;
    StatusCode::NO_CONTENT
}

/// PUT /api/source - Replace the editor contents
pub async fn set_source(
    State(state): State<ApiState>,
    Json(req): Json<SourceRequest>,
) -> StatusCode {
    state.session.set_source(&req.source).await;
    StatusCode::NO_CONTENT
}

/// POST /api/compile - Compile the editor contents
pub async fn compile(
    State(state): State<ApiState>,
    Query(query): Query<WaitQuery>,
) -> (StatusCode, Json<CompileResponse>) {
    if query.wait {
        let result = state.session.compile().await;
        return (StatusCode::OK, Json(CompileResponse::Done(result)));
    }

    let session = state.session.clone();
    tokio::spawn(async move {
        session.compile().await;
    });
    (
        StatusCode::ACCEPTED,
        Json(CompileResponse::Accepted(AcceptedResponse {
            status: "compiling",
        })),
    )
}

/// POST /api/deploy - Deploy the last successful compile output
pub async fn deploy(
    State(state): State<ApiState>,
    Query(query): Query<WaitQuery>,
    Json(req): Json<DeployRequest>,
) -> ApiResult<(StatusCode, Json<DeployResponse>)> {
    let name = req
        .name
        .unwrap_or_else(|| DEFAULT_CONTRACT_NAME.to_string());

    if query.wait {
        let result = state.session.deploy(&name).await.map_err(error_response)?;
        return Ok((StatusCode::OK, Json(DeployResponse::Done(result))));
    }

    // Refusals are immediate; answer them synchronously
    let snapshot = state.session.snapshot().await;
    if snapshot.deploy_blocker().is_some() {
        let result = state.session.deploy(&name).await.map_err(error_response)?;
        return Ok((StatusCode::OK, Json(DeployResponse::Done(result))));
    }

    let session = state.session.clone();
    tokio::spawn(async move {
        if let Err(e) = session.deploy(&name).await {
            log::error!("Background deploy failed: {}", e);
        }
    });
    Ok((
        StatusCode::ACCEPTED,
        Json(DeployResponse::Accepted(AcceptedResponse {
            status: "deploying",
        })),
    ))
}

/// GET /api/contracts - The connected wallet's contracts
pub async fn list_contracts(State(state): State<ApiState>) -> ApiResult<Json<ContractCollection>> {
    let snapshot = state.session.snapshot().await;
    if !snapshot.wallet_connected() {
        return Err(error_response(SessionError::WalletNotConnected));
    }
    Ok(Json(snapshot.contracts))
}

/// POST /api/contracts - Save the editor contents as a draft
pub async fn save_contract(
    State(state): State<ApiState>,
    Json(req): Json<SaveContractRequest>,
) -> ApiResult<(StatusCode, Json<ContractRecord>)> {
    if let Some(source) = &req.source {
        state.session.set_source(source).await;
    }
    let record = state
        .session
        .save_draft(&req.name)
        .await
        .map_err(error_response)?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// POST /api/contracts/{name}/restore - Load a saved contract into the editor
pub async fn restore_contract(
    State(state): State<ApiState>,
    Path(name): Path<String>,
) -> ApiResult<Json<ContractRecord>> {
    let record = state
        .session
        .restore_contract(&name)
        .await
        .map_err(error_response)?;
    Ok(Json(record))
}
