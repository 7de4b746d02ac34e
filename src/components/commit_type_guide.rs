use leptos::prelude::*;

use crate::types::CommitCategory;

/// Static reference card for the conventional commit types.
#[component]
pub fn CommitTypeGuide() -> impl IntoView {
    view! {
        <div class="card type-guide">
            <h3>"Commit Types"</h3>
            <ul class="type-guide-list">
                {CommitCategory::ALL
                    .iter()
                    .map(|category| {
                        view! {
                            <li>
                                <span class=format!("type-prefix {}", category.css_class())>
                                    {format!("{}:", category.prefix())}
                                </span>
                                " "
                                {category.description()}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
