#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use flipr::application::services::ShortenerConfig;
use flipr::domain::entities::CodeBlockList;
use flipr::routes::router;
use flipr::state::AppState;

pub const BASE_URL: &str = "https://flipr.sh";

pub fn create_test_state() -> AppState {
    AppState::from_config(ShortenerConfig::default(), BASE_URL)
}

pub fn create_test_state_with_block_list(reserved: &str, offensive: &str) -> AppState {
    let config = ShortenerConfig {
        code_block_list: CodeBlockList::parse(reserved, offensive, ""),
        ..ShortenerConfig::default()
    };

    AppState::from_config(config, BASE_URL)
}

/// Full application router, minus trailing-slash normalization.
pub fn create_test_app(state: AppState) -> Router {
    router(state, "public")
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(create_test_app(state)).unwrap()
}
