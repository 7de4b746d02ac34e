use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::HttpGateway;
use crate::components::status_badge::StatusBadge;
use crate::config::{ComposerConfig, ConfigContext};
use crate::types::BackendStatus;

#[component]
pub fn StatusPage() -> impl IntoView {
    let config = use_context::<ConfigContext>()
        .map(|ctx| ctx.config)
        .unwrap_or_else(|| RwSignal::new(ComposerConfig::load()));

    let (checking, set_checking) = signal(false);
    let (outcome, set_outcome) = signal::<Option<Result<BackendStatus, String>>>(None);

    let do_status_check = move || {
        set_checking.set(true);
        let base_url = config.with_untracked(ComposerConfig::base_url);
        spawn_local(async move {
            let outcome = match base_url {
                Ok(url) => HttpGateway::new(url).check_health().await.map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            set_outcome.set(Some(outcome));
            set_checking.set(false);
        });
    };

    // Auto-run on mount
    let auto_check = do_status_check.clone();
    Effect::new(move |_| {
        auto_check();
    });

    let run_check = move |_| {
        do_status_check();
    };

    view! {
        <div class="page status-page">
            <h2>"Backend Status"</h2>
            <p class="page-description">
                {move || format!("Checking the analysis backend at {}", config.with(|c| c.api_base_url.clone()))}
            </p>

            <button
                class="btn btn-primary"
                on:click=run_check
                disabled=move || checking.get()
            >
                {move || if checking.get() { "Checking..." } else { "Check Again" }}
            </button>

            {move || {
                outcome.get().map(|outcome| {
                    view! {
                        <div class="status-results">
                            <StatusBadge label="Analysis backend" outcome=outcome />
                        </div>
                    }
                })
            }}
        </div>
    }
}
