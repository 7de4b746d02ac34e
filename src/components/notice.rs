use leptos::prelude::*;

/// Transient message shown above the composer, e.g. after a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Renders the current notice with a dismiss button. No timers: it stays
/// until dismissed or replaced.
#[component]
pub fn NoticeBar(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = if n.is_error { "notice notice-error" } else { "notice notice-info" };
            view! {
                <div class=class role="status">
                    <span class="notice-text">{n.text}</span>
                    <button class="btn btn-small btn-link" on:click=move |_| notice.set(None)>
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}
