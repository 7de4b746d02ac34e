//! Card showing the generated commit message with its type badge and actions.

use leptos::prelude::*;

use crate::types::AnalysisResult;

#[component]
pub fn CommitMessageDisplay(
    result: AnalysisResult,
    /// True while a request is in flight; disables regenerate.
    #[prop(into)]
    busy: Signal<bool>,
    /// False while the shown result is only the previous one.
    #[prop(into)]
    can_copy: Signal<bool>,
    on_copy: Callback<()>,
    on_regenerate: Callback<()>,
) -> impl IntoView {
    let badge_class = format!(
        "type-badge {}",
        result.commit_type.category().css_class()
    );
    let label = result.commit_type.label().to_string();

    view! {
        <div class="card commit-message">
            <div class="commit-message-header">
                <h2>"Generated Commit Message"</h2>
                <span class=badge_class>{label}</span>
            </div>

            <pre class="commit-message-body">{result.message}</pre>

            <div class="action-buttons">
                <button
                    class="btn btn-primary"
                    disabled=move || !can_copy.get()
                    on:click=move |_| on_copy.run(())
                >
                    "Copy to Clipboard"
                </button>
                <button
                    class="btn btn-secondary"
                    disabled=move || busy.get()
                    on:click=move |_| on_regenerate.run(())
                >
                    "Regenerate"
                </button>
            </div>

            <p class="hint">
                "Tip: paste it into " <code>"git commit -m \"...\""</code>
            </p>
        </div>
    }
}
