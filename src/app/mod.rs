use crate::config::EnvConfig;
use crate::modal::ModalProvider;
use crate::pages::{DiariesPage, LoginPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new(EnvConfig::from_window())));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - Dialogs render inside <Router> so their content may use router hooks.
    view! {
        <Router>
            <ModalProvider>
                <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                    <Route path=path!("auth/login") view=LoginPage />
                    <Route path=path!("") view=DiariesPage />
                </Routes>
            </ModalProvider>
        </Router>
    }
}
