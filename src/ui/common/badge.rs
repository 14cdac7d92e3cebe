use leptos::prelude::*;

use crate::ui::icon::Icon;

/// Badge variant types for different use cases
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum BadgeVariant {
    /// Rounded chip with a tinted border, for certifications and highlights
    Pill,
    /// Square tile, for integration names
    Tile,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Pill => "badge-pill",
            BadgeVariant::Tile => "badge-tile",
        }
    }
}

/// Small label with an optional leading icon
#[component]
pub fn Badge(
    /// Badge content
    children: Children,
    /// Visual variant
    #[prop(default = BadgeVariant::Pill)]
    variant: BadgeVariant,
    /// Optional icon to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    let full_classes = badge_classes(variant, &class);

    view! {
        <span class=full_classes>
            {icon.map(|name| view! { <Icon name=name class="w-4 h-4"/> })}
            {children()}
        </span>
    }
}

fn badge_classes(variant: BadgeVariant, extra: &str) -> String {
    if extra.is_empty() {
        format!("badge {}", variant.class())
    } else {
        format!("badge {} {}", variant.class(), extra)
    }
}

/// Wrapping row of badges
#[component]
pub fn BadgeGroup(
    /// Badge elements
    children: Children,
    /// Spacing between badges
    #[prop(default = "gap-2")]
    spacing: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex items-center flex-wrap {}", spacing)>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_classes() {
        assert_eq!(badge_classes(BadgeVariant::Pill, ""), "badge badge-pill");
        assert_eq!(
            badge_classes(BadgeVariant::Tile, "text-sm"),
            "badge badge-tile text-sm"
        );
    }
}
