//! REST API module
//!
//! HTTP backend for the browser front-end. One process serves one session.
//!
//! # Endpoints
//!
//! ## Session
//! - `GET /api/session` - Full session state
//! - `GET /api/view` - Navbar and active page view
//! - `POST /api/page` - Navigate (`{"page": "deploy"}`)
//! - `GET /api/network` - Target network details
//!
//! ## Wallet
//! - `POST /api/wallet/connect` - Connect and load contracts
//! - `POST /api/wallet/disconnect` - Forget the wallet
//!
//! ## Workflow
//! - `PUT /api/source` - Replace editor contents
//! - `POST /api/compile[?wait=true]` - Compile
//! - `POST /api/deploy[?wait=true]` - Deploy (`{"name": "HelloWorld"}`)
//!
//! ## Contracts
//! - `GET /api/contracts` - Connected wallet's contracts
//! - `POST /api/contracts` - Save a draft
//! - `POST /api/contracts/:name/restore` - Load a contract into the editor
//!
//! ## WebSocket
//! - `GET /ws` - Session events (CompileFinished, DeployFinished, ...)

pub mod handlers;
pub mod routes;
pub mod websocket;

pub use handlers::ApiState;
pub use routes::create_router;
