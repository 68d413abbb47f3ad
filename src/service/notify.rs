use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Delivery of out-of-band notices to a user.
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Tell the user how to reset their password.
    async fn send_reset_notice(&self, username: &str) -> Result<()>;
}

/// Logs the notice instead of delivering it.
#[derive(Clone, Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl NotificationService for LogNotifier {
    async fn send_reset_notice(&self, username: &str) -> Result<()> {
        info!(username = %username, "password reset notice stub");
        Ok(())
    }
}
