//! # Taskdeck
//!
//! A minimal to-do client for a remote HTTP task store.
//!
//! This library provides:
//! - A typed gateway for the store's CRUD endpoints
//! - A list controller that applies confirm-then-apply mutations
//! - A pluggable notifier for confirmation and alert dialogs
//!
//! ```text
//!   Shell/View ──> TaskListController ──> TaskGateway ──> Remote Task Store
//!                         │
//!                         └──> Notifier (confirm / notify)
//! ```
//!
//! ## Flow
//! 1. The shell triggers a controller action
//! 2. The controller issues one gateway call
//! 3. The gateway unwraps the store's response envelope
//! 4. The controller mutates the local list and notifies the user
//!
//! ## Modules
//! - `config`: environment-driven configuration
//! - `controller`: local task list state and synchronization
//! - `gateway`: HTTP gateway to the remote store
//! - `model`: task record types
//! - `notify`: confirmation and notification capability

pub mod config;
pub mod controller;
pub mod gateway;
pub mod model;
pub mod notify;

pub use config::{Config, ConfigError};
pub use controller::{Draft, TaskListController};
pub use gateway::{GatewayError, HttpTaskGateway, TaskGateway};
pub use model::{status_label, NewTask, Task};
pub use notify::{NoticeKind, Notifier, TerminalNotifier};
