//! History panel showing previously generated commit messages.
//!
//! Pure rendering of a [`HistoryState`]; loading is owned by the
//! `HistoryCache` on the composer page.

use leptos::prelude::*;

use crate::state::HistoryState;
use crate::types::HistoryEntry;

#[component]
pub fn HistoryPanel(
    #[prop(into)] state: Signal<HistoryState>,
    /// Invoked when the user asks for a fresh copy.
    on_reload: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="card history-panel">
            <div class="history-header">
                <h3 class="history-title">"Recent History"</h3>
                <button
                    class="btn btn-small btn-secondary"
                    disabled=move || state.with(HistoryState::is_loading)
                    on:click=move |_| on_reload.run(())
                >
                    "Refresh"
                </button>
            </div>

            {move || match state.get() {
                HistoryState::NotLoaded | HistoryState::Loading => {
                    view! { <p class="history-loading">"Loading history..."</p> }.into_any()
                }
                HistoryState::LoadFailed(err) => {
                    view! { <p class="history-error">{format!("Could not load history: {}", err)}</p> }
                        .into_any()
                }
                HistoryState::Loaded(entries) if entries.is_empty() => {
                    view! {
                        <p class="history-empty">"No history yet. Generate your first commit!"</p>
                    }
                        .into_any()
                }
                HistoryState::Loaded(entries) => {
                    view! {
                        <div class="history-list">
                            <For
                                each=move || entries.clone()
                                key=|entry| entry.id
                                children=|entry| view! { <HistoryItem entry=entry /> }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn HistoryItem(entry: HistoryEntry) -> impl IntoView {
    let status_class = if entry.used { "history-status status-used" } else { "history-status" };
    let footer = format!("{} \u{2022} {}", entry.files_label(), entry.usage_label());

    view! {
        <div class="history-item">
            <div class="history-item-info">
                <span class="history-type">{entry.commit_type.to_uppercase()}</span>
                <span class="history-date">{entry.date_label()}</span>
            </div>
            <p class="history-headline">{entry.headline().to_string()}</p>
            <div class=status_class>{footer}</div>
        </div>
    }
}
