use leptos::prelude::*;

use crate::config::{self, ComposerConfig, ConfigContext};
use crate::theme::Theme;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let config = use_context::<ConfigContext>()
        .map(|ctx| ctx.config)
        .unwrap_or_else(|| RwSignal::new(ComposerConfig::load()));

    let current = config.get_untracked();
    let (base_url, set_base_url) = signal(current.api_base_url.clone());
    let (history_limit, set_history_limit) = signal(current.history_limit.to_string());
    let (theme, set_theme) = signal(current.theme);
    let (save_status, set_save_status) = signal::<Option<String>>(None);

    let save_settings = move |_| {
        let limit = match history_limit.get().trim().parse::<u32>() {
            Ok(limit) => limit,
            Err(_) => {
                set_save_status.set(Some("History limit must be a positive integer".to_string()));
                return;
            }
        };
        let updated = ComposerConfig {
            api_base_url: base_url.get().trim().to_string(),
            history_limit: limit,
            theme: theme.get(),
        };
        match config::save(&updated) {
            Ok(()) => {
                config.set(updated);
                set_save_status.set(Some("Settings saved".to_string()));
            }
            Err(e) => {
                set_save_status.set(Some(format!("Failed to save: {}", e)));
            }
        }
    };

    let reset_settings = move |_| match config::clear_saved() {
        Ok(()) => {
            let fresh = ComposerConfig::load();
            set_base_url.set(fresh.api_base_url.clone());
            set_history_limit.set(fresh.history_limit.to_string());
            set_theme.set(fresh.theme);
            config.set(fresh);
            set_save_status.set(Some("Settings reset".to_string()));
        }
        Err(e) => {
            set_save_status.set(Some(format!("Failed to reset: {}", e)));
        }
    };

    view! {
        <div class="page settings-page">
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"Backend"</h3>
                <p class="section-description">"Where the analysis service is running. Changes apply the next time the composer opens."</p>

                <div class="form-group">
                    <label for="api-base-url">"Backend URL"</label>
                    <input
                        id="api-base-url"
                        type="text"
                        placeholder="http://localhost:8000/"
                        class="input"
                        prop:value=move || base_url.get()
                        on:input=move |ev| set_base_url.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="history-limit">"History entries to show"</label>
                    <input
                        id="history-limit"
                        type="number"
                        min="1"
                        class="input"
                        prop:value=move || history_limit.get()
                        on:input=move |ev| set_history_limit.set(event_target_value(&ev))
                    />
                </div>
            </section>

            <section class="settings-section">
                <h3>"Appearance"</h3>
                <div class="form-group">
                    <label for="theme">"Theme"</label>
                    <select
                        id="theme"
                        class="input"
                        prop:value=move || theme.get().as_str()
                        on:change=move |ev| set_theme.set(Theme::from_value(&event_target_value(&ev)))
                    >
                        {Theme::ALL
                            .iter()
                            .map(|t| view! { <option value=t.as_str()>{t.as_str()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </section>

            <div class="input-row">
                <button class="btn btn-save" on:click=save_settings>"Save"</button>
                <button class="btn btn-secondary" on:click=reset_settings>"Reset to Defaults"</button>
            </div>
            <Show when=move || save_status.get().is_some()>
                <span class="status-text">{move || save_status.get().unwrap_or_default()}</span>
            </Show>
        </div>
    }
}
