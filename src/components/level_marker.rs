//! "X" marker showing the current slider position on a continuum track.

use leptos::prelude::*;

use crate::util::marker_math::MARKER_GLYPH_OFFSET_PX;

/// Marker positioned at `position / levels` of the track's rendered width.
///
/// Recomputes on position change and on window resize; the resize listener
/// is detached when the component is torn down. Purely visual feedback with
/// no effect on any other state. Renders at the track origin on the server.
#[component]
pub fn LevelMarker(
    position: Signal<usize>,
    levels: usize,
    track_ref: NodeRef<leptos::html::Div>,
) -> impl IntoView {
    let left_px = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        use crate::util::marker_math::marker_left_px;

        let recompute = move || {
            if let Some(el) = track_ref.get_untracked() {
                let width = f64::from(el.offset_width());
                left_px.set(marker_left_px(position.get_untracked(), levels, width));
            }
        };

        Effect::new(move || {
            let _ = position.get();
            let _ = track_ref.get();
            recompute();
        });

        let listener = Closure::<dyn Fn()>::new(recompute);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
        }
        on_cleanup(move || {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (position, levels, track_ref);
    }

    view! {
        <div
            class="rubric-marker"
            style:left=move || format!("{}px", left_px.get() - MARKER_GLYPH_OFFSET_PX)
        >
            <span class="rubric-marker__glyph">"X"</span>
        </div>
    }
}
