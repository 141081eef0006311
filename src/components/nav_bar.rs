//! Top navigation bar with page links and the dark-mode toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Navigation bar shown on every page.
#[component]
pub fn NavBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Pick up the stored preference once the client is running.
    Effect::new(move || {
        let enabled = dark_mode::init();
        ui.update(|state| state.dark_mode = enabled);
    });

    let on_toggle = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Support Plan"</span>
            <A href="/">"Additional Information"</A>
            <A href="/rubric">"Support Rubric"</A>
            <button class="nav-bar__toggle" on:click=on_toggle title="Toggle dark mode">
                {move || if ui.get().dark_mode { "Light" } else { "Dark" }}
            </button>
        </nav>
    }
}
