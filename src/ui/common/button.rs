use crate::ui::icon::Icon;
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ButtonVariant {
    /// Glowing brand-colored call to action
    Primary,
    /// Transparent with a light border
    Outline,
    /// Segment of a toggle group, currently selected
    ToggleOn,
    /// Segment of a toggle group, not selected
    ToggleOff,
}

/// Button size options
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::ToggleOn => "btn-toggle btn-toggle-on",
            ButtonVariant::ToggleOff => "btn-toggle",
        }
    }

    /// Toggle segment for the given selection state
    pub fn toggle(selected: bool) -> Self {
        if selected {
            ButtonVariant::ToggleOn
        } else {
            ButtonVariant::ToggleOff
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut classes = format!("btn-base {}", variant.class());
    for part in [size.class(), extra] {
        if !part.is_empty() {
            classes.push(' ');
            classes.push_str(part);
        }
    }
    classes
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// `type` attribute; "submit" inside forms
    #[prop(default = "button")]
    button_type: &'static str,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Render as a link to this target instead of a `<button>`
    #[prop(optional)]
    href: Option<&'static str>,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Optional icon name to show after text
    #[prop(optional)]
    trailing_icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = button_classes(variant, size, &class);

    let content = move || {
        view! {
            {icon.map(|name| view! { <Icon name=name class="w-5 h-5"/> })}
            {children()}
            {trailing_icon.map(|name| view! { <Icon name=name class="w-5 h-5"/> })}
        }
    };

    if let Some(href) = href {
        view! {
            <a href=href class=full_classes>
                {content()}
            </a>
        }
        .into_any()
    } else {
        view! {
            <button
                type=button_type
                class=full_classes
                on:click=move |_| {
                    if let Some(on_click) = on_click {
                        on_click.run(())
                    }
                }
            >
                {content()}
            </button>
        }
        .into_any()
    }
}

/// One segment of a [`ToggleGroup`]
#[component]
pub fn ToggleButton(
    /// Whether this option is the active one
    #[prop(into)]
    selected: Signal<bool>,
    /// Click handler
    on_click: Callback<()>,
    /// Button content
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                button_classes(ButtonVariant::toggle(selected.get()), ButtonSize::Small, "")
            }
            aria-pressed=move || selected.get().to_string()
            on:click=move |_| on_click.run(())
        >
            {children()}
        </button>
    }
}

/// Segmented control that selects one of several options
#[component]
pub fn ToggleGroup(
    /// Toggle buttons
    children: Children,
    /// Accessible name of the group
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="inline-flex rounded-full border border-white/10 bg-white/5 p-1" role="group" aria-label=label>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        assert_eq!(
            button_classes(ButtonVariant::Primary, ButtonSize::Medium, ""),
            "btn-base btn-primary"
        );
        assert_eq!(
            button_classes(ButtonVariant::Outline, ButtonSize::Large, "w-full"),
            "btn-base btn-outline btn-lg w-full"
        );
    }

    #[test]
    fn test_toggle_variant() {
        assert_eq!(ButtonVariant::toggle(true), ButtonVariant::ToggleOn);
        assert_eq!(ButtonVariant::toggle(false), ButtonVariant::ToggleOff);
    }
}
