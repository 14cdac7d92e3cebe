//! Decorative motion: hero particles, growing bars, the live map and
//! fade-in reveals

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::ViewportMargin;
use crate::core::decor::{
    BAR_HEIGHTS, PARTICLE_COUNT, PARTICLE_SEED, PIN_COUNT, bar_transition, map_pins,
    particle_field,
};
use crate::core::motion::Transition;
use crate::ui::in_view::use_in_view;

/// Slowly bobbing dots behind the hero
#[component]
pub fn ParticleField() -> impl IntoView {
    let particles = particle_field(PARTICLE_COUNT, PARTICLE_SEED);

    view! {
        <svg class="absolute inset-0 w-full h-full pointer-events-none" aria-hidden="true">
            {particles
                .into_iter()
                .map(|particle| {
                    view! {
                        <circle
                            cx=format!("{}%", particle.x)
                            cy=format!("{}%", particle.y)
                            r=particle.size.to_string()
                            fill="#60A5FA"
                            fill-opacity="0.4"
                        >
                            <animate
                                attributeName="cy"
                                dur=particle.duration()
                                values=particle.cy_values()
                                repeatCount="indefinite"
                            />
                        </circle>
                    }
                })
                .collect_view()}
        </svg>
    }
}

/// Bar chart whose bars grow to their heights when first seen
#[component]
pub fn AnimatedBars() -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let in_view = use_in_view(node_ref, ViewportMargin::default());

    view! {
        <div node_ref=node_ref class="flex items-end gap-2 h-32">
            {BAR_HEIGHTS
                .iter()
                .enumerate()
                .map(|(index, &height)| {
                    view! {
                        <div
                            class="flex-1 rounded-t-md bg-gradient-to-t from-[#0386D9] to-[#60A5FA] shadow-[0_0_12px_rgba(3,134,217,0.5)]"
                            style:transition=bar_transition(index).to_css()
                            style:height=move || {
                                if in_view.get() { format!("{}%", height) } else { "0%".to_string() }
                            }
                        ></div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Grid "map" with pins drifting around their resting points
#[component]
pub fn MovingPinsMap() -> impl IntoView {
    view! {
        <div class="relative h-40 rounded-xl border border-white/10 overflow-hidden landing-map-grid">
            {map_pins(PIN_COUNT)
                .into_iter()
                .map(|pin| {
                    view! {
                        <span class="map-pin" style=pin.style()>
                            <span class="map-pin-dot"></span>
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Fades and slides its children into place the first time they are seen
#[component]
pub fn Reveal(
    children: Children,
    /// Starting horizontal offset in pixels
    #[prop(default = 0.0)]
    offset_x: f64,
    /// Starting vertical offset in pixels
    #[prop(default = 20.0)]
    offset_y: f64,
    /// Seconds before the reveal starts
    #[prop(default = 0.0)]
    delay: f64,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let node_ref = NodeRef::<Div>::new();
    let in_view = use_in_view(node_ref, ViewportMargin::bottom_px(40.0));

    let transition = format!(
        "{}, {}",
        Transition::new("opacity", 0.6).delay(delay).to_css(),
        Transition::new("transform", 0.6).delay(delay).to_css()
    );

    view! {
        <div
            node_ref=node_ref
            class=class
            style:transition=transition
            style:opacity=move || if in_view.get() { "1" } else { "0" }
            style:transform=move || {
                if in_view.get() {
                    "translate(0px, 0px)".to_string()
                } else {
                    format!("translate({}px, {}px)", offset_x, offset_y)
                }
            }
        >
            {children()}
        </div>
    }
}
