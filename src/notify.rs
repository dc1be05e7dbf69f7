//! User-facing confirmation and notification capability.
//!
//! The controller never talks to a UI toolkit directly; it goes through
//! the [`Notifier`] trait so shells and tests can supply their own.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Kind of notice surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Warning,
}

/// Confirmation and alert capability injected into the controller.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Ask the user a yes/no question; `false` means declined.
    async fn confirm(&self, prompt: &str) -> bool;

    /// Surface a notice to the user.
    async fn notify(&self, kind: NoticeKind, title: &str, message: &str);
}

/// Notifier that talks to the controlling terminal.
pub struct TerminalNotifier;

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn confirm(&self, prompt: &str) -> bool {
        use std::io::Write as _;

        print!("{} [y/N] ", prompt);
        let _ = std::io::stdout().flush();

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        if reader.read_line(&mut line).await.is_err() {
            return false;
        }

        matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    async fn notify(&self, kind: NoticeKind, title: &str, message: &str) {
        let tag = match kind {
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
            NoticeKind::Warning => "warn",
        };
        println!("[{}] {}: {}", tag, title, message);
    }
}
