use leptos::prelude::*;

use crate::core::motion::CursorPosition;

/// Glowing ring that follows the mouse pointer across the page
#[component]
pub fn NeonCursor() -> impl IntoView {
    let (position, set_position) = signal(CursorPosition::default());

    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            set_position.set(CursorPosition::new(
                f64::from(ev.client_x()),
                f64::from(ev.client_y()),
            ));
        });
        on_cleanup(move || handle.remove());
    }

    #[cfg(feature = "ssr")]
    let _ = set_position;

    view! {
        <div
            class="neon-cursor"
            style:left=move || format!("{}px", position.get().x)
            style:top=move || format!("{}px", position.get().y)
            aria-hidden="true"
        ></div>
    }
}
