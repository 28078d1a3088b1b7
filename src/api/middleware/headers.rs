//! Version and CORS response headers.

use axum::{
    extract::{Request, State},
    http::{HeaderName, HeaderValue, header},
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Header carrying the running crate version.
pub static VERSION_HEADER: HeaderName = HeaderName::from_static("x-flipr-version");

/// Header carrying the source revision the binary was built from.
pub static VCS_REF_HEADER: HeaderName = HeaderName::from_static("x-flipr-vcs-ref");

/// Revision baked in at compile time through the `VCS_REF` variable.
pub const VCS_REF: &str = match option_env!("VCS_REF") {
    Some(vcs_ref) => vcs_ref,
    None => "unknown",
};

/// Adds service headers to every response.
///
/// # Headers
///
/// - `x-flipr-version` - crate version
/// - `x-flipr-vcs-ref` - build revision, `unknown` when not set at build time
/// - `Access-Control-Allow-Origin` - the configured base URL
/// - `Access-Control-Allow-Headers` - `Content-Type`
/// - `Access-Control-Allow-Methods` - `GET, POST, OPTIONS`
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/api/shorten", post(shorten_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), headers::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    headers.insert(
        VERSION_HEADER.clone(),
        HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
    );
    if let Ok(vcs_ref) = HeaderValue::from_str(VCS_REF) {
        headers.insert(VCS_REF_HEADER.clone(), vcs_ref);
    }

    // Base URL is validated at startup, but never fail a response over a header
    if let Ok(origin) = HeaderValue::from_str(&st.base_url) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    }
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, POST, OPTIONS"),
    );

    response
}
