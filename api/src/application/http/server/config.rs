use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::{api_entities::response::Response, app_state::AppState};

/// Runtime configuration the UI layer needs for metadata and link generation.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConfigResponse {
    pub base_url: String,
}

pub async fn get_config(State(state): State<AppState>) -> Response<ConfigResponse> {
    Response::OK(ConfigResponse {
        base_url: state.args.server.base_url.clone(),
    })
}
