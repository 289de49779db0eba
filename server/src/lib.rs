// Glot server - Translation proxy with embedded web UI
//
// Serves the single-page front-end and the /api routes that relay
// translation requests to the configured upstream API.

mod api;
mod static_assets;

pub use api::{router, AppState, GlotServer};
