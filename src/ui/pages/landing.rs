//! Landing page component
//!
//! The Novack Security marketing page:
//! - SEO meta tags and JSON-LD structured data
//! - Hero with a Spline scene, particles and counted-up headline figures
//! - Features grid and an interactive dashboard preview
//! - Security, case studies and integrations
//! - Pricing with a monthly/annual toggle whose prices count up on change
//! - Demo request call to action and a footer with a newsletter form

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::app::SiteUrl;
use crate::core::CountUpOptions;
use crate::core::content::{
    CASE_STUDIES, CERTIFICATIONS, COPYRIGHT, CTA_PERKS, CTA_TITLE, FEATURES, FOOTER_COLUMNS,
    FOOTER_TAGLINE, Feature, HERO_STATS, HERO_SUBTITLE, HERO_TITLE, HeroStat, INTEGRATIONS,
    META_DESCRIPTION, NOTIFICATIONS, PREVIEW_METRICS, PRODUCT_NAME, SECURITY_ITEMS,
    SOCIAL_LINKS, SPLINE_SCENE_URL, recent_activity,
};
use crate::core::decor::{PREVIEW_SEED, preview_rates};
use crate::core::pricing::{Billing, PLAN_FEATURES, PLANS, Plan, Price, offers};
use crate::core::validation::FormStatus;
use crate::ui::common::{
    Badge, BadgeGroup, BadgeVariant, Button, ButtonSize, ButtonVariant, ToggleButton,
    ToggleGroup,
};
use crate::ui::count_up::use_count_up;
use crate::ui::cursor::NeonCursor;
use crate::ui::effects::{AnimatedBars, MovingPinsMap, ParticleField, Reveal};
use crate::ui::icon::{Icon, icons};

const PAGE_TITLE: &str = "Novack Security - Control Total de tu Seguridad Corporativa";

/// Anchor of the demo request form; every call to action points here
const DEMO_ANCHOR: &str = "#demo";

/// Landing page component
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="min-h-screen w-full bg-black text-white overflow-x-hidden">
            <NeonCursor />

            <HeroSection />
            <FeaturesSection />
            <PreviewSection />
            <SecuritySection />
            <PricingSection />
            <CtaSection />
            <Footer />

            <LandingStyles />
        </div>
    }
}

/// SEO meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let canonical = SiteUrl::canonical();

    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=META_DESCRIPTION />
        <Meta name="keywords" content="seguridad corporativa, control de acceso, gestión de visitantes, control de empleados, tarjetas de acceso, auditoría" />
        <Meta name="theme-color" content="#000000" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content=canonical.clone() />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=META_DESCRIPTION />
        <Meta property="og:locale" content="es_CR" />

        // Twitter
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:title" content=PAGE_TITLE />
        <Meta name="twitter:description" content=META_DESCRIPTION />

        // Canonical URL
        <Link rel="canonical" href=canonical />

        <script type="application/ld+json" inner_html=structured_data()></script>
    }
}

/// JSON-LD describing the product and its public prices
fn structured_data() -> String {
    serde_json::json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": PRODUCT_NAME,
        "applicationCategory": "SecurityApplication",
        "operatingSystem": "Web",
        "description": META_DESCRIPTION,
        "offers": offers(),
    })
    .to_string()
}

/// Spline 3D scene filling its positioned parent
#[component]
fn SplineScene() -> impl IntoView {
    view! {
        <spline-viewer url=SPLINE_SCENE_URL class="block w-full h-full" loading-anim-type="none"></spline-viewer>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative h-[100svh] w-full flex items-center">
            <div class="absolute inset-0">
                <SplineScene />
            </div>
            <div class="absolute inset-0 bg-gradient-to-b from-black/40 via-black/50 to-black/80 pointer-events-none"></div>
            <ParticleField />

            <div class="relative z-10 mx-auto max-w-7xl px-6 md:px-10 grid md:grid-cols-2 gap-8">
                <div class="py-14 md:py-24">
                    <Reveal>
                        <h1 class="text-4xl md:text-6xl lg:text-7xl font-extrabold leading-tight">
                            {HERO_TITLE}
                        </h1>
                    </Reveal>
                    <Reveal delay=0.1>
                        <p class="mt-4 text-white/80 text-lg md:text-xl">{HERO_SUBTITLE}</p>
                    </Reveal>
                    <Reveal delay=0.2 class="mt-8 flex flex-col sm:flex-row gap-3">
                        <Button href=DEMO_ANCHOR size=ButtonSize::Large trailing_icon=icons::ARROW_RIGHT>
                            "Comenzar Ahora"
                        </Button>
                        <Button
                            href=DEMO_ANCHOR
                            variant=ButtonVariant::Outline
                            size=ButtonSize::Large
                            icon=icons::PLAY_CIRCLE
                        >
                            "Ver Demo en Vivo"
                        </Button>
                    </Reveal>

                    <div class="mt-10 grid grid-cols-3 gap-3 max-w-lg">
                        {HERO_STATS
                            .into_iter()
                            .map(|stat| view! { <HeroStatCard stat=stat /> })
                            .collect_view()}
                    </div>
                </div>

                <div class="hidden md:flex items-end justify-end pb-12">
                    <div class="w-full max-w-md glass-card">
                        <div class="flex items-center justify-between mb-4">
                            <div class="flex items-center gap-2 text-white/80">
                                <Icon name=icons::SHIELD_CHECK class="h-5 w-5 text-[#34D399]" />
                                "Sistema"
                            </div>
                            <div class="text-xs text-white/60">"Tiempo real"</div>
                        </div>
                        <AnimatedBars />
                        <div class="mt-5">
                            <MovingPinsMap />
                        </div>
                        <div class="mt-4 flex items-center gap-2 text-white/80 text-sm">
                            <Icon name=icons::BELL class="h-4 w-4 text-[#F59E0B]" />
                            "3 nuevas alertas de acceso"
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Headline figure that counts up once the card is on screen
#[component]
fn HeroStatCard(stat: HeroStat) -> impl IntoView {
    let counter = use_count_up(Signal::stored(stat.target), CountUpOptions::default());
    let format = stat.format;

    view! {
        <div node_ref=counter.node_ref class="rounded-2xl backdrop-blur-md bg-white/5 border border-white/10 p-4">
            <div class="text-2xl font-bold tabular-nums">
                {move || format.render(counter.value.get())}
            </div>
            <div class="text-xs text-white/70">{stat.label}</div>
        </div>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="relative py-20">
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_20%_0%,rgba(3,134,217,0.25),transparent_40%),radial-gradient(circle_at_80%_100%,rgba(52,211,153,0.2),transparent_35%)]"></div>
            <div class="relative z-10 mx-auto max-w-7xl px-6 md:px-10">
                <Reveal offset_y=10.0>
                    <h2 class="text-3xl md:text-5xl font-bold">"Características Principales"</h2>
                </Reveal>
                <div class="mt-10 grid md:grid-cols-3 gap-6">
                    {FEATURES
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card glass-card">
            <div class="flex items-center gap-3">
                <div class="rounded-xl p-2 bg-[#0386D9]/20 text-[#60A5FA]">
                    <Icon name=feature.icon class="h-6 w-6" />
                </div>
                <h3 class="text-lg font-semibold">{feature.title}</h3>
            </div>
            <ul class="mt-4 space-y-2 text-sm text-white/80">
                {feature
                    .items
                    .into_iter()
                    .map(|item| {
                        view! {
                            <li class="flex items-center gap-2">
                                <Icon name=icons::CHECK class="h-4 w-4 text-[#34D399]" />
                                {item}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

/// Dashboard preview laid out as a bento grid
#[component]
fn PreviewSection() -> impl IntoView {
    let rates = preview_rates(PREVIEW_METRICS.len(), PREVIEW_SEED);

    view! {
        <section class="relative py-20">
            <div class="relative z-10 mx-auto max-w-7xl px-6 md:px-10">
                <Reveal offset_y=10.0>
                    <h2 class="text-3xl md:text-5xl font-bold">"Vista Previa Interactiva"</h2>
                </Reveal>
                <div class="mt-10 grid grid-cols-1 md:grid-cols-12 gap-6">
                    <Reveal class="md:col-span-7 bento-card">
                        <div class="flex items-center justify-between">
                            <div class="text-white/80">"Estadísticas"</div>
                            <div class="flex items-center gap-1 text-[#34D399]">
                                <Icon name=icons::STAR class="h-4 w-4" />
                                "Tiempo real"
                            </div>
                        </div>
                        <div class="mt-6">
                            <AnimatedBars />
                        </div>
                        <div class="mt-6 grid grid-cols-3 gap-3">
                            {PREVIEW_METRICS
                                .into_iter()
                                .zip(rates)
                                .enumerate()
                                .map(|(i, (metric, rate))| {
                                    view! {
                                        <div class="rounded-xl p-4 bg-black/30 border border-white/10">
                                            <div class="text-xs text-white/60">{metric}</div>
                                            <Reveal offset_y=0.0 delay={i as f64 * 0.1}>
                                                <div class="text-2xl font-bold">{format!("{}%", rate)}</div>
                                            </Reveal>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal delay=0.1 class="md:col-span-5 bento-card">
                        <div class="flex items-center justify-between">
                            <div class="text-white/80">"Mapa en Vivo"</div>
                            <div class="text-xs text-white/60">"Sedes"</div>
                        </div>
                        <div class="mt-4">
                            <MovingPinsMap />
                        </div>
                        <div class="mt-4 text-sm text-white/80">
                            "Visitantes moviéndose entre zonas seguras"
                        </div>
                    </Reveal>

                    <Reveal delay=0.15 class="md:col-span-4 bento-card">
                        <div class="flex items-center gap-2 text-white/80">
                            <Icon name=icons::BELL class="h-4 w-4 text-[#F59E0B]" />
                            "Notificaciones"
                        </div>
                        <ul class="mt-4 space-y-2 text-sm">
                            {NOTIFICATIONS
                                .into_iter()
                                .enumerate()
                                .map(|(i, notification)| {
                                    view! {
                                        <li>
                                            <Reveal offset_x={-10.0} offset_y=0.0 delay={i as f64 * 0.1} class="p-3 rounded-lg bg-black/30 border border-white/10">
                                                {notification}
                                            </Reveal>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Reveal>

                    <Reveal delay=0.2 class="md:col-span-8 bento-card">
                        <div class="flex items-center justify-between">
                            <div class="text-white/80">"Actividad Reciente"</div>
                            <div class="text-xs text-white/60">"Últimos 60 min"</div>
                        </div>
                        <div class="mt-4 grid grid-cols-2 gap-3">
                            {recent_activity()
                                .into_iter()
                                .enumerate()
                                .map(|(i, entry)| {
                                    view! {
                                        <Reveal offset_y=10.0 delay={i as f64 * 0.05} class="p-3 rounded-lg bg-black/30 border border-white/10 text-sm text-white/80">
                                            {entry}
                                        </Reveal>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SecuritySection() -> impl IntoView {
    view! {
        <section class="relative py-20 bg-[radial-gradient(circle_at_50%_0%,rgba(3,134,217,0.15),transparent_40%)]">
            <div class="relative z-10 mx-auto max-w-7xl px-6 md:px-10">
                <Reveal offset_y=10.0>
                    <h2 class="text-3xl md:text-5xl font-bold">"Seguridad de Nivel Empresarial"</h2>
                </Reveal>
                <div class="mt-10 grid md:grid-cols-3 gap-6">
                    <div class="glass-card">
                        <ul class="space-y-3 text-white/80">
                            {SECURITY_ITEMS
                                .into_iter()
                                .map(|(icon, text)| {
                                    view! {
                                        <li class="flex items-center gap-2">
                                            <Icon name=icon class="h-5 w-5" />
                                            {text}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                        <div class="mt-6">
                            <BadgeGroup>
                                {CERTIFICATIONS
                                    .into_iter()
                                    .map(|cert| view! { <Badge class="text-xs".to_string()>{cert}</Badge> })
                                    .collect_view()}
                            </BadgeGroup>
                        </div>
                    </div>

                    <div class="glass-card md:col-span-2">
                        <div class="text-white/80">"Casos de éxito"</div>
                        <div class="mt-4 flex gap-4 overflow-x-auto snap-x snap-mandatory pb-2">
                            {CASE_STUDIES
                                .into_iter()
                                .map(|case| {
                                    view! {
                                        <figure class="min-w-[280px] snap-center rounded-2xl p-5 bg-black/30 border border-white/10">
                                            <figcaption class="text-sm text-white/60">{case.company}</figcaption>
                                            <blockquote class="mt-2 text-lg">
                                                {format!("“{}”", case.quote)}
                                            </blockquote>
                                        </figure>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="glass-card">
                        <div class="text-white/80">"Integraciones"</div>
                        <div class="mt-4 grid grid-cols-2 gap-3 text-sm">
                            {INTEGRATIONS
                                .into_iter()
                                .map(|name| view! { <Badge variant=BadgeVariant::Tile>{name}</Badge> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Pricing section with the billing toggle
#[component]
fn PricingSection() -> impl IntoView {
    let (billing, set_billing) = signal(Billing::default());

    view! {
        <section id="pricing" class="relative py-20">
            <div class="relative z-10 mx-auto max-w-7xl px-6 md:px-10">
                <div class="flex items-center justify-between gap-4 flex-wrap">
                    <h2 class="text-3xl md:text-5xl font-bold">"Precios flexibles"</h2>
                    <ToggleGroup label="Periodo de facturación">
                        {Billing::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <ToggleButton
                                        selected=Signal::derive(move || billing.get() == option)
                                        on_click=Callback::new(move |_| set_billing.set(option))
                                    >
                                        {option.to_string()}
                                    </ToggleButton>
                                }
                            })
                            .collect_view()}
                    </ToggleGroup>
                </div>
                <div class="mt-10 grid md:grid-cols-3 gap-6">
                    {PLANS
                        .into_iter()
                        .map(|plan| view! { <PricingCard plan=plan billing=billing /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Pricing card whose amount counts up again whenever the billing period changes
#[component]
fn PricingCard(plan: Plan, billing: ReadSignal<Billing>) -> impl IntoView {
    let price = Signal::derive(move || plan.price(billing.get()));
    let amount = Signal::derive(move || price.get().amount().map(i64::from).unwrap_or_default());
    let counter = use_count_up(amount, CountUpOptions::default());

    let price_text = move || match price.get() {
        Price::Usd(_) => format!("${}", counter.value.get()),
        custom @ Price::Custom => custom.label(),
    };

    view! {
        <div node_ref=counter.node_ref class="pricing-card glass-card">
            <div class="text-sm text-white/60">{plan.name}</div>
            <div class="mt-2 text-4xl font-bold tabular-nums">
                {price_text}
                <span class="text-base font-normal text-white/60">
                    {move || price.get().suffix(billing.get())}
                </span>
            </div>
            <div class="mt-2 text-white/80">{plan.description}</div>
            <ul class="mt-4 space-y-2 text-sm text-white/80">
                {PLAN_FEATURES
                    .into_iter()
                    .map(|feature| {
                        view! {
                            <li class="flex items-center gap-2">
                                <Icon name=icons::CHECK class="h-4 w-4 text-[#34D399]" />
                                {feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <Button href=DEMO_ANCHOR class="mt-6 w-full".to_string()>
                "Elegir plan"
            </Button>
        </div>
    }
}

#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section id="demo" class="relative py-24 bg-gradient-to-b from-black via-black to-[#001320]">
            <div class="absolute inset-0 opacity-50">
                <SplineScene />
            </div>
            <div class="absolute inset-0 bg-gradient-to-b from-black/60 via-black/70 to-black/90 pointer-events-none"></div>
            <div class="relative z-10 mx-auto max-w-4xl px-6 text-center">
                <h2 class="text-3xl md:text-5xl font-extrabold">{CTA_TITLE}</h2>
                <p class="mt-3 text-white/80">{CTA_PERKS.join(" • ")}</p>
                <DemoRequestForm />
            </div>
        </section>
    }
}

fn demo_confirmation(email: &str) -> String {
    format!("¡Gracias! Te escribiremos a {} para agendar tu demo.", email)
}

fn newsletter_confirmation(email: &str) -> String {
    format!("Suscripción confirmada para {}.", email)
}

/// Email form of the final call to action. Confirms locally, nothing is sent.
#[component]
fn DemoRequestForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_status.set(FormStatus::submit(&email.get_untracked(), demo_confirmation));
    };

    view! {
        <form class="mt-8 flex flex-col sm:flex-row gap-3 justify-center" on:submit=on_submit novalidate=true>
            <div class="flex-1 min-w-[240px]">
                <label class="w-full rounded-xl border border-white/20 bg-white/5 p-3 flex items-center gap-2">
                    <Icon name=icons::MAIL class="h-5 w-5 text-white/60" />
                    <input
                        type="email"
                        name="email"
                        autocomplete="email"
                        placeholder="Tu email corporativo"
                        aria-label="Tu email corporativo"
                        class="bg-transparent w-full outline-none placeholder:text-white/50"
                        bind:value=email
                    />
                </label>
            </div>
            <Button button_type="submit" size=ButtonSize::Large>
                "Solicitar Demo"
            </Button>
        </form>
        <FormStatusMessage status=status />
    }
}

/// Validation error or confirmation under a form
#[component]
fn FormStatusMessage(status: ReadSignal<FormStatus>) -> impl IntoView {
    move || match status.get() {
        FormStatus::Idle => ().into_any(),
        FormStatus::Invalid(message) => view! {
            <p class="mt-3 text-sm text-[#F59E0B]" role="alert">{message}</p>
        }
        .into_any(),
        FormStatus::Sent(message) => view! {
            <p class="mt-3 text-sm text-[#34D399]" role="status">{message}</p>
        }
        .into_any(),
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="relative border-t border-white/10 bg-black">
            <div class="mx-auto max-w-7xl px-6 md:px-10 py-14">
                <div class="grid md:grid-cols-5 gap-10">
                    <div class="md:col-span-1">
                        <div class="text-2xl font-extrabold">
                            "Novack " <span class="text-[#0386D9]">"Security"</span>
                        </div>
                        <p class="mt-2 text-white/70 max-w-sm">{FOOTER_TAGLINE}</p>
                        <div class="mt-4 flex gap-3">
                            {SOCIAL_LINKS
                                .into_iter()
                                .map(|(icon, label)| {
                                    view! {
                                        <a
                                            href="#"
                                            class="p-2 rounded-lg border border-white/10 hover:border-[#0386D9]/60 transition"
                                            aria-label=label
                                        >
                                            <Icon name=icon class="h-5 w-5" />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    {FOOTER_COLUMNS
                        .into_iter()
                        .map(|column| {
                            view! {
                                <div>
                                    <div class="font-semibold text-white mb-3">{column.title}</div>
                                    <ul class="space-y-2 text-white/70">
                                        {column
                                            .links
                                            .into_iter()
                                            .map(|link| view! { <li><a href="#" class="hover:text-white transition">{link}</a></li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="mt-10 flex flex-col md:flex-row items-center justify-between gap-4">
                    <NewsletterForm />
                    <div class="text-white/60 text-sm">{COPYRIGHT}</div>
                </div>
            </div>
        </footer>
    }
}

/// Footer newsletter signup. Confirms locally, nothing is sent.
#[component]
fn NewsletterForm() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let (status, set_status) = signal(FormStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_status.set(FormStatus::submit(&email.get_untracked(), newsletter_confirmation));
    };

    view! {
        <div class="w-full md:w-auto">
            <form class="flex gap-2" on:submit=on_submit novalidate=true>
                <input
                    type="email"
                    name="email"
                    autocomplete="email"
                    placeholder="Tu email"
                    aria-label="Tu email"
                    class="px-4 py-2 rounded-xl bg-white/5 border border-white/10 placeholder:text-white/50"
                    bind:value=email
                />
                <Button button_type="submit" size=ButtonSize::Small>
                    "Suscribirme"
                </Button>
            </form>
            <FormStatusMessage status=status />
        </div>
    }
}

/// Page-specific CSS animations and component classes
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html { scroll-behavior: smooth; }

            /* Neon cursor */
            .neon-cursor {
                position: fixed;
                z-index: 9999;
                width: 2rem;
                height: 2rem;
                border-radius: 9999px;
                border: 1px solid rgba(3, 134, 217, 0.7);
                box-shadow: 0 0 40px #0386D9;
                transform: translate(-50%, -50%);
                pointer-events: none;
            }
            @media (pointer: coarse) {
                .neon-cursor { display: none; }
            }

            /* Buttons */
            .btn-base {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                gap: 0.5rem;
                padding: 0.5rem 1rem;
                border-radius: 0.75rem;
                font-weight: 600;
                color: white;
                transition: all 0.2s;
                cursor: pointer;
            }
            .btn-sm { padding: 0.375rem 0.75rem; font-size: 0.875rem; }
            .btn-lg { padding: 0.75rem 1.5rem; }
            .btn-primary {
                background-color: #0386D9;
                box-shadow: 0 10px 30px rgba(3, 134, 217, 0.6);
            }
            .btn-primary:hover { filter: brightness(1.1); }
            .btn-outline { border: 1px solid rgba(255, 255, 255, 0.2); }
            .btn-outline:hover { background-color: rgba(255, 255, 255, 0.1); }
            .btn-toggle {
                border-radius: 9999px;
                border: 1px solid transparent;
                font-weight: 500;
            }
            .btn-toggle-on { background-color: #0386D9; border-color: #0386D9; }

            /* Badges */
            .badge { display: inline-flex; align-items: center; gap: 0.375rem; }
            .badge-pill {
                padding: 0.25rem 0.75rem;
                border-radius: 9999px;
                border: 1px solid rgba(255, 255, 255, 0.15);
                background-color: rgba(255, 255, 255, 0.05);
            }
            .badge-tile {
                padding: 0.5rem 0.75rem;
                border-radius: 0.5rem;
                border: 1px solid rgba(255, 255, 255, 0.1);
                background-color: rgba(0, 0, 0, 0.3);
                transition: border-color 0.2s;
            }
            .badge-tile:hover { border-color: rgba(3, 134, 217, 0.4); }

            /* Cards */
            .glass-card {
                border-radius: 1.5rem;
                padding: 1.5rem;
                background-color: rgba(255, 255, 255, 0.05);
                border: 1px solid rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(12px);
            }
            .bento-card {
                border-radius: 1.5rem;
                padding: 1.5rem;
                background-image: linear-gradient(to bottom right, rgba(255, 255, 255, 0.05), rgba(255, 255, 255, 0.03));
                border: 1px solid rgba(255, 255, 255, 0.1);
                backdrop-filter: blur(12px);
            }
            .feature-card, .pricing-card { transition: transform 0.3s; }
            .feature-card:hover { transform: translateY(-4px); }
            .pricing-card:hover { transform: translateY(-8px); }

            /* Live map */
            .landing-map-grid {
                background-color: rgba(0, 0, 0, 0.3);
                background-image:
                    linear-gradient(rgba(255, 255, 255, 0.05) 1px, transparent 1px),
                    linear-gradient(90deg, rgba(255, 255, 255, 0.05) 1px, transparent 1px);
                background-size: 20px 20px;
            }
            .map-pin {
                position: absolute;
                left: var(--pin-x);
                top: var(--pin-y);
                transform: translate(-50%, -50%);
            }
            .map-pin-dot {
                display: block;
                width: 0.75rem;
                height: 0.75rem;
                border-radius: 9999px;
                background-color: #34D399;
                box-shadow: 0 0 12px #34D399;
            }
            @keyframes pin-drift {
                0%, 100% { left: var(--pin-x); top: var(--pin-y); }
                50% {
                    left: calc(var(--pin-x) + var(--drift-x));
                    top: calc(var(--pin-y) + var(--drift-y));
                }
            }

            spline-viewer { display: block; width: 100%; height: 100%; }

            @media (prefers-reduced-motion: reduce) {
                .map-pin { animation: none !important; }
                .feature-card, .pricing-card { transition: none; }
            }
            "#
        </style>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_data_lists_public_prices() {
        let data: serde_json::Value =
            serde_json::from_str(&structured_data()).expect("valid JSON-LD");

        assert_eq!(data["@type"], "SoftwareApplication");
        assert_eq!(data["name"], PRODUCT_NAME);

        let offers = data["offers"].as_array().expect("offers array");
        assert_eq!(offers.len(), 2);
        assert_eq!(offers[0]["@type"], "Offer");
        assert_eq!(offers[0]["price"], "49");
        assert_eq!(offers[1]["priceCurrency"], "USD");
    }

    #[test]
    fn test_form_confirmations_mention_the_address() {
        assert_eq!(
            FormStatus::submit("ana@empresa.com", demo_confirmation),
            FormStatus::Sent(
                "¡Gracias! Te escribiremos a ana@empresa.com para agendar tu demo.".to_string()
            )
        );
        assert!(matches!(
            FormStatus::submit("ana@", newsletter_confirmation),
            FormStatus::Invalid(_)
        ));
    }
}
