//! Composer page: analyze staged changes, show the message, copy or regenerate.
//!
//! Owns one [`SessionController`] and one [`HistoryCache`], both writing into
//! signals so the view re-renders on every transition.

use std::num::NonZeroU32;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpGateway;
use crate::clipboard::BrowserClipboard;
use crate::components::commit_message_display::CommitMessageDisplay;
use crate::components::commit_type_guide::CommitTypeGuide;
use crate::components::files_list::FilesList;
use crate::components::history_panel::HistoryPanel;
use crate::components::notice::{Notice, NoticeBar};
use crate::config::{ComposerConfig, ConfigContext};
use crate::state::{CopyOutcome, HistoryCache, HistoryState, SessionController, SessionState};

#[component]
pub fn ComposerPage() -> impl IntoView {
    // Read once per mount; saved settings apply on the next visit.
    let settings = use_context::<ConfigContext>()
        .map(|ctx| ctx.config.get_untracked())
        .unwrap_or_else(ComposerConfig::load);

    let base_url = match settings.base_url() {
        Ok(url) => url,
        Err(e) => {
            log::error!("Composer disabled: {}", e);
            return view! {
                <div class="page composer-page">
                    <div class="error-message">
                        <h3>"Configuration Error"</h3>
                        <p>{e.to_string()}</p>
                        <a href="/settings" class="btn btn-secondary">"Open Settings"</a>
                    </div>
                </div>
            }
            .into_any();
        }
    };
    let limit = settings.limit().unwrap_or(NonZeroU32::MIN);
    let gateway = HttpGateway::new(base_url);

    let session_state = RwSignal::new(SessionState::Idle);
    let history_state = RwSignal::new(HistoryState::NotLoaded);
    let notice = RwSignal::new(None::<Notice>);
    let show_history = RwSignal::new(false);

    // Shared through `Rc`, so they live in thread-local arena storage.
    let session =
        StoredValue::new_local(Rc::new(SessionController::new(gateway.clone(), session_state)));
    let history = StoredValue::new_local(Rc::new(HistoryCache::new(gateway, history_state, limit)));

    let busy = Signal::derive(move || session_state.with(SessionState::is_pending));
    let can_copy = Signal::derive(move || session_state.with(SessionState::can_copy));

    let on_analyze = move |_| {
        let session = session.get_value();
        spawn_local(async move {
            session.on_analyze().await;
        });
    };

    let on_regenerate = Callback::new(move |_| {
        let session = session.get_value();
        spawn_local(async move {
            session.on_regenerate().await;
        });
    });

    let on_copy = Callback::new(move |_| {
        let session = session.get_value();
        spawn_local(async move {
            match session.on_copy(&BrowserClipboard).await {
                CopyOutcome::Copied => notice.set(Some(Notice::info("Copied to clipboard!"))),
                CopyOutcome::Failed(err) => notice.set(Some(Notice::error(err.to_string()))),
                CopyOutcome::NothingToCopy => {}
            }
        });
    });

    let toggle_history = move |_| {
        let reveal = !show_history.get_untracked();
        show_history.set(reveal);
        if reveal {
            let history = history.get_value();
            spawn_local(async move {
                history.reveal().await;
            });
        }
    };

    let on_reload_history = Callback::new(move |_| {
        let history = history.get_value();
        spawn_local(async move {
            history.reload().await;
        });
    });

    view! {
        <div class="page composer-page">
            <div class="page-header">
                <div>
                    <h2>"Commit Composer"</h2>
                    <p class="page-description">
                        "Generate a conventional commit message from your staged changes."
                    </p>
                </div>
                <button class="btn btn-secondary" on:click=toggle_history>
                    {move || if show_history.get() { "Hide History" } else { "Show History" }}
                </button>
            </div>

            <NoticeBar notice=notice />

            <div class="composer-grid">
                <div class="composer-main">
                    <div class="card">
                        <h2>"Analyze Staged Changes"</h2>
                        <p>"Make sure you have staged your changes with " <code>"git add"</code> " first."</p>

                        <button
                            class="btn btn-primary btn-wide"
                            disabled=move || busy.get()
                            on:click=on_analyze
                        >
                            {move || if busy.get() {
                                view! { <span class="spinner"></span> " Analyzing..." }.into_any()
                            } else {
                                view! { "Generate Commit Message" }.into_any()
                            }}
                        </button>

                        {move || session_state.with(|s| s.error().map(|e| e.detail())).map(|detail| {
                            view! {
                                <div class="error-message">
                                    <p>{detail}</p>
                                </div>
                            }
                        })}
                    </div>

                    {move || session_state.with(|s| s.visible_result().cloned()).map(|result| {
                        view! {
                            <CommitMessageDisplay
                                result=result.clone()
                                busy=busy
                                can_copy=can_copy
                                on_copy=on_copy
                                on_regenerate=on_regenerate
                            />
                            <FilesList result=result />
                        }
                    })}
                </div>

                <div class="composer-side">
                    <div class="card quick-guide">
                        <h3>"Quick Guide"</h3>
                        <ol>
                            <li>"Make changes to your code"</li>
                            <li>"Stage changes: " <code>"git add ."</code></li>
                            <li>"Click \"Generate Commit Message\""</li>
                            <li>"Copy and use it in " <code>"git commit -m \"...\""</code></li>
                        </ol>
                    </div>

                    <CommitTypeGuide />

                    <Show when=move || show_history.get()>
                        <HistoryPanel state=history_state on_reload=on_reload_history />
                    </Show>
                </div>
            </div>
        </div>
    }
    .into_any()
}
