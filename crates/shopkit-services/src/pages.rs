//! Page rendering with a page-view ping.

use tracing::debug;

use crate::collaborators::Analytics;

/// Path reported to analytics for the rendered page.
pub const HOME_PATH: &str = "/home";

/// Renders the home page, then reports a view of [`HOME_PATH`].
///
/// The page view is only sent once the content exists.
pub async fn render_page(analytics: &dyn Analytics) -> String {
    let content = render_content().await;
    analytics.track_page_view(HOME_PATH);
    debug!(path = HOME_PATH, bytes = content.len(), "Rendered page");
    content
}

async fn render_content() -> String {
    tokio::task::yield_now().await;
    "<div>content</div>".to_string()
}
