use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::sidebar::Sidebar;
use crate::config::{ComposerConfig, ConfigContext};
use crate::pages::composer::ComposerPage;
use crate::pages::settings::SettingsPage;
use crate::pages::status::StatusPage;
use crate::theme::apply_theme;

#[component]
pub fn App() -> impl IntoView {
    let config = RwSignal::new(ComposerConfig::load());
    provide_context(ConfigContext { config });

    // Apply theme to DOM whenever the config changes
    Effect::new(move |_| {
        apply_theme(config.with(|c| c.theme));
    });

    view! {
        <Router>
            <div class="app-layout">
                <Sidebar />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=ComposerPage />
                        <Route path=path!("/settings") view=SettingsPage />
                        <Route path=path!("/status") view=StatusPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
