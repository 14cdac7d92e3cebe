use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};

use crate::core::content::DEFAULT_SITE_URL;
use crate::ui::pages::LandingPage;

/// Spline web component used for the 3D hero and call to action scenes
const SPLINE_VIEWER_SCRIPT: &str =
    "https://unpkg.com/@splinetool/viewer@1.9.82/build/spline-viewer.js";

/// Body attribute carrying the site URL from the server render to hydration
pub const SITE_URL_ATTRIBUTE: &str = "data-site-url";

/// Public site URL, provided by the server for canonical and Open Graph links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl(pub String);

impl SiteUrl {
    /// URL from context, or the default when rendering outside the routes
    pub fn current() -> String {
        use_context::<SiteUrl>()
            .map(|url| url.0)
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string())
    }

    /// Canonical address of the landing page
    pub fn canonical() -> String {
        format!("{}/", Self::current())
    }

    /// URL the server wrote into the body, so the client renders the same head
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let url = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .and_then(|body| body.get_attribute(SITE_URL_ATTRIBUTE))
            .unwrap_or_else(|| DEFAULT_SITE_URL.to_string());
        Self(url)
    }
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let site_url = SiteUrl::current();

    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script type="module" src=SPLINE_VIEWER_SCRIPT></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-black text-white antialiased" data-site-url=site_url>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/novack.css"/>

        <LandingPage/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_url_defaults_without_context() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(SiteUrl::current(), DEFAULT_SITE_URL);
            assert_eq!(SiteUrl::canonical(), format!("{}/", DEFAULT_SITE_URL));
        });
    }

    #[test]
    fn test_site_url_from_context() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(SiteUrl("https://demo.novack.security".to_string()));
            assert_eq!(SiteUrl::canonical(), "https://demo.novack.security/");
        });
    }
}
