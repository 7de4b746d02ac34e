//! One-line verdict for a backend status check.

use leptos::prelude::*;

use crate::types::BackendStatus;

/// Icon, CSS class and detail text for a finished check.
///
/// A reply whose `status` is not "ok" is a failure; its message (or the raw
/// status when the message is empty) explains why.
pub fn verdict(outcome: &Result<BackendStatus, String>) -> (&'static str, &'static str, String) {
    match outcome {
        Ok(reply) => {
            let detail = if reply.message.is_empty() {
                reply.status.clone()
            } else {
                reply.message.clone()
            };
            if reply.is_ok() {
                ("\u{2713}", "status-badge status-pass", detail)
            } else {
                ("\u{2717}", "status-badge status-fail", detail)
            }
        }
        Err(reason) => ("\u{2717}", "status-badge status-fail", reason.clone()),
    }
}

#[component]
pub fn StatusBadge(
    #[prop(into)] label: String,
    /// Reply from `GET /`, or why there was none.
    outcome: Result<BackendStatus, String>,
) -> impl IntoView {
    let (icon, class, detail) = verdict(&outcome);

    view! {
        <div class="status-item">
            <span class=class>{icon}</span>
            <span class="status-name">{label}</span>
            <span class="status-detail">{detail}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(status: &str, message: &str) -> BackendStatus {
        BackendStatus {
            status: status.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_ok_reply_passes_with_message() {
        let (icon, class, detail) = verdict(&Ok(reply("ok", "Git Commit Message Composer API")));
        assert_eq!(icon, "\u{2713}");
        assert!(class.ends_with("status-pass"));
        assert_eq!(detail, "Git Commit Message Composer API");
    }

    #[test]
    fn test_other_status_fails_with_server_message() {
        let (_, class, detail) = verdict(&Ok(reply("degraded", "git binary not found")));
        assert!(class.ends_with("status-fail"));
        assert_eq!(detail, "git binary not found");

        let (_, _, detail) = verdict(&Ok(reply("degraded", "")));
        assert_eq!(detail, "degraded");
    }

    #[test]
    fn test_no_reply_fails_with_reason() {
        let (_, class, detail) = verdict(&Err("connection refused".to_string()));
        assert!(class.ends_with("status-fail"));
        assert_eq!(detail, "connection refused");
    }
}
