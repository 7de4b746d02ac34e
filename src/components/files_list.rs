use leptos::prelude::*;

use crate::types::AnalysisResult;

/// Changed paths plus the diff stat. The stat is shown even when no paths
/// came back, since binary-only changes report counts without files.
#[component]
pub fn FilesList(result: AnalysisResult) -> impl IntoView {
    let count = result.files_changed.len();
    let insertions = format!("{} insertions", result.insertions_label());
    let deletions = format!("{} deletions", result.deletions_label());

    view! {
        <div class="card files-list">
            <h3>{format!("Files Changed ({})", count)}</h3>
            <div class="diff-stats">
                <span class="diff-insertions">{insertions}</span>
                <span class="diff-deletions">{deletions}</span>
            </div>
            {if result.files_changed.is_empty() {
                view! { <p class="files-empty">"No file paths reported"</p> }.into_any()
            } else {
                view! {
                    <ul class="files-items">
                        {result
                            .files_changed
                            .into_iter()
                            .map(|file| view! { <li class="file-item"><code>{file}</code></li> })
                            .collect::<Vec<_>>()}
                    </ul>
                }
                    .into_any()
            }}
        </div>
    }
}
