use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::estimate_page::EstimatePage;
use crate::components::hero_section::HeroSection;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! {
                <div class="min-h-screen flex items-center justify-center text-gray-500">
                    "Page not found"
                </div>
            }>
                <Route path=path!("/") view=EstimatePage />
                <Route path=path!("/free-report") view=HeroPage />
            </Routes>
        </Router>
    }
}

/// Landing page variant: hero section with the address autocomplete.
#[component]
fn HeroPage() -> impl IntoView {
    view! { <HeroSection /> }
}
