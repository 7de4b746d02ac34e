//! Session and history state machines.
//!
//! Both are plain Rust over a [`StateCell`](cell::StateCell): the UI backs
//! them with Leptos signals, the tests with `RefCell`.

pub mod cell;
pub mod history;
pub mod session;

pub use cell::StateCell;
pub use history::{HistoryCache, HistoryState};
pub use session::{CopyOutcome, RequestTicket, SessionController, SessionState};
