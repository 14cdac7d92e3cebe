//! Count-up binding for the browser
//!
//! Connects a [`CountUp`](crate::core::CountUp) run to a DOM element: an
//! `IntersectionObserver` starts it, `requestAnimationFrame` drives it, and
//! the component's cleanup cancels whatever frame is still pending.

use leptos::html::Div;
use leptos::prelude::*;

use crate::core::CountUpOptions;

/// A count-up bound to an element
#[derive(Clone, Copy)]
pub struct CountUpSignal {
    /// Attach to the element whose visibility starts the count
    pub node_ref: NodeRef<Div>,
    /// Value to display; starts at `options.start`
    pub value: ReadSignal<i64>,
}

/// Count from `options.start` to `target` the first time `node_ref` becomes
/// visible. Later changes to `target` restart the count from the start.
///
/// The server always renders the start value so hydration sees the same text.
pub fn use_count_up(target: impl Into<Signal<i64>>, options: CountUpOptions) -> CountUpSignal {
    let target = target.into();
    let node_ref = NodeRef::<Div>::new();
    let (value, set_value) = signal(options.start);

    #[cfg(feature = "hydrate")]
    browser::bind(node_ref, target, options, set_value);

    #[cfg(not(feature = "hydrate"))]
    let _ = (target, set_value);

    CountUpSignal { node_ref, value }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use leptos::html::Div;
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;

    use crate::core::{CountUp, CountUpOptions, FrameHandle, FrameScheduler};
    use crate::ui::in_view::ViewportObserver;

    type SharedRun = Rc<RefCell<CountUp<RafScheduler>>>;

    /// Schedules one `requestAnimationFrame` callback at a time
    pub struct RafScheduler {
        callback: Closure<dyn FnMut(f64)>,
    }

    impl FrameScheduler for RafScheduler {
        fn request_frame(&mut self) -> Option<FrameHandle> {
            let window = web_sys::window()?;
            match window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
                Ok(id) => Some(FrameHandle(id)),
                Err(err) => {
                    leptos::logging::warn!("requestAnimationFrame failed: {:?}", err);
                    None
                }
            }
        }

        fn cancel_frame(&mut self, handle: FrameHandle) {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle.0);
            }
        }
    }

    /// Same clock `requestAnimationFrame` timestamps are measured on
    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|window| window.performance())
            .map(|performance| performance.now())
            .unwrap_or_default()
    }

    /// Everything that must be released together when the component goes away
    struct Binding {
        run: SharedRun,
        _observer: Option<ViewportObserver>,
    }

    pub fn bind(
        node_ref: NodeRef<Div>,
        target: Signal<i64>,
        options: CountUpOptions,
        set_value: WriteSignal<i64>,
    ) {
        let binding = StoredValue::new_local(None::<Binding>);

        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if binding.with_value(Option::is_some) {
                return;
            }

            let params = options.params(target.get_untracked());
            let run: SharedRun = Rc::new_cyclic(|weak: &Weak<RefCell<CountUp<RafScheduler>>>| {
                let weak = weak.clone();
                let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                    if let Some(run) = weak.upgrade() {
                        let value = run.borrow_mut().on_frame(timestamp);
                        set_value.set(value);
                    }
                });
                RefCell::new(CountUp::new(params, RafScheduler { callback }))
            });

            let weak = Rc::downgrade(&run);
            let observer = ViewportObserver::observe_once(&element, &options.margin, move || {
                if let Some(run) = weak.upgrade() {
                    let value = {
                        let mut run = run.borrow_mut();
                        run.on_visible(now_ms());
                        run.value()
                    };
                    set_value.set(value);
                }
            });

            let observer = match observer {
                Ok(observer) => Some(observer),
                Err(err) => {
                    // Without an observer the element counts as visible now
                    leptos::logging::warn!("viewport observer unavailable: {:?}", err);
                    let value = {
                        let mut run = run.borrow_mut();
                        run.on_visible(now_ms());
                        run.value()
                    };
                    set_value.set(value);
                    None
                }
            };

            binding.set_value(Some(Binding {
                run,
                _observer: observer,
            }));
        });

        // Also runs once on mount with the params the run was built from;
        // `retarget` leaves the run alone then
        Effect::new(move |_| {
            let params = options.params(target.get());
            let value = binding.with_value(|binding| {
                binding.as_ref().and_then(|binding| {
                    let mut run = binding.run.borrow_mut();
                    run.retarget(params, now_ms()).then(|| run.value())
                })
            });
            if let Some(value) = value {
                set_value.set(value);
            }
        });

        // Dropping the run cancels its pending frame; dropping the observer
        // disconnects it
        on_cleanup(move || {
            binding.try_update_value(|slot| slot.take());
        });
    }
}
