//! Placeholder data feed.

/// Resolves to a small fixed list.
pub async fn fetch_data() -> Vec<u32> {
    tokio::task::yield_now().await;
    vec![1, 2, 3]
}
