//! Post-verification notifications
//!
//! Delivery is best-effort: callers spawn it and never observe the outcome.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_verified(&self, email: &str) -> anyhow::Result<()>;
}

/// Records the verification email in the log instead of handing it to a
/// mail transport.
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send_verified(&self, email: &str) -> anyhow::Result<()> {
        if !email.contains('@') {
            anyhow::bail!("not an email address: {}", email);
        }
        info!(email, "Sent email verification notice");
        Ok(())
    }
}

/// Runs the notification on a detached task. Failures are logged and dropped.
pub fn dispatch(notifier: Arc<dyn Notifier>, email: String) {
    tokio::spawn(async move {
        if let Err(e) = notifier.send_verified(&email).await {
            warn!("Notification to {} failed: {}", email, e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_log_notifier_accepts_email() {
        assert!(LogNotifier.send_verified("a@example.com").await.is_ok());
        assert!(LogNotifier.send_verified("nope").await.is_err());
    }

    #[tokio::test]
    async fn test_dispatch_runs_in_background() {
        let (tx, rx) = oneshot::channel();
        let mut tx = Some(tx);

        let mut notifier = MockNotifier::new();
        notifier
            .expect_send_verified()
            .withf(|email| email == "a@example.com")
            .times(1)
            .returning(move |email| {
                if let Some(tx) = tx.take() {
                    let _ = tx.send(email.to_string());
                }
                Ok(())
            });

        dispatch(Arc::new(notifier), "a@example.com".to_string());

        assert_eq!(rx.await.unwrap(), "a@example.com");
    }

    #[tokio::test]
    async fn test_dispatch_swallows_failure() {
        let (tx, rx) = oneshot::channel();
        let mut tx = Some(tx);
        let mut notifier = MockNotifier::new();
        notifier
            .expect_send_verified()
            .times(1)
            .returning(move |email| {
                if let Some(tx) = tx.take() {
                    let _ = tx.send(email.to_string());
                }
                Err(anyhow::anyhow!("smtp down"))
            });

        dispatch(Arc::new(notifier), "a@example.com".to_string());
        assert_eq!(rx.await.unwrap(), "a@example.com");
    }
}
