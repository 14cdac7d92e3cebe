//! One-shot viewport detection
//!
//! `ViewportObserver` wraps a browser `IntersectionObserver` that reports the
//! first time its element enters the (margin-adjusted) viewport and then stops
//! watching. Dropping it disconnects the observer, so a component that owns
//! one never receives callbacks after it is torn down.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::ViewportMargin;

#[cfg(feature = "hydrate")]
pub use browser::ViewportObserver;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::core::ViewportMargin;

    type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    pub struct ViewportObserver {
        observer: IntersectionObserver,
        _callback: EntriesCallback,
    }

    impl ViewportObserver {
        /// Watch `element` and call `on_enter` once, the first time it intersects
        pub fn observe_once(
            element: &web_sys::Element,
            margin: &ViewportMargin,
            on_enter: impl FnOnce() + 'static,
        ) -> Result<Self, JsValue> {
            let mut on_enter = Some(on_enter);
            let callback = EntriesCallback::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    let entered = entries.iter().any(|entry| {
                        entry
                            .unchecked_into::<IntersectionObserverEntry>()
                            .is_intersecting()
                    });
                    if !entered {
                        return;
                    }
                    observer.disconnect();
                    if let Some(on_enter) = on_enter.take() {
                        on_enter();
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_root_margin(&margin.to_css());
            let observer =
                IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
            observer.observe(element);

            Ok(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for ViewportObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

/// Signal that flips to `true` the first time `node_ref` scrolls into view
/// and stays `true` afterwards.
///
/// Renders `false` on the server. If the browser cannot observe the element
/// the signal is set immediately so content is never left hidden.
pub fn use_in_view(node_ref: NodeRef<Div>, margin: ViewportMargin) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let observer = StoredValue::new_local(None::<ViewportObserver>);

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if in_view.get_untracked() || observer.with_value(Option::is_some) {
                return;
            }
            match ViewportObserver::observe_once(&element, &margin, move || set_in_view.set(true)) {
                Ok(watch) => observer.set_value(Some(watch)),
                Err(err) => {
                    leptos::logging::warn!("viewport observer unavailable: {:?}", err);
                    set_in_view.set(true);
                }
            }
        });

        on_cleanup(move || {
            observer.try_update_value(|slot| slot.take());
        });
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = (node_ref, margin, set_in_view);

    in_view
}
