//! Development context detection.

use panel_core::HostContext;
use tracing::debug;
use url::Url;

/// Query marker that forces development mode.
const DEV_QUERY_KEY: &str = "zat";

/// Decide whether the panel is hosted or running standalone.
///
/// Development is detected by a `zat=true` query parameter or a `localhost`
/// host. Anything unparseable is treated as hosted.
pub fn detect_context(panel_url: &str) -> HostContext {
    let Ok(url) = Url::parse(panel_url) else {
        debug!("Unparseable panel URL, assuming hosted: {}", panel_url);
        return HostContext::Hosted;
    };

    let has_marker = url
        .query_pairs()
        .any(|(key, value)| key == DEV_QUERY_KEY && value == "true");
    let is_localhost = url.host_str() == Some("localhost");

    if has_marker || is_localhost {
        HostContext::Development
    } else {
        HostContext::Hosted
    }
}
