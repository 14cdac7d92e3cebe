//! Static copy for the landing page sections

/// Brand colors
pub mod brand {
    pub const PRIMARY: &str = "#0386D9";
    pub const SECONDARY: &str = "#34D399";
    pub const ACCENT: &str = "#60A5FA";
    pub const WARNING: &str = "#F59E0B";
}

pub const PRODUCT_NAME: &str = "Novack Security";

/// Canonical URL used when the server has no `SITE_URL` configured
pub const DEFAULT_SITE_URL: &str = "https://novack.security";

pub const META_DESCRIPTION: &str = "Plataforma unificada para gestionar visitantes, empleados, accesos y seguridad corporativa en tiempo real.";

/// Spline scene rendered behind the hero and the final call to action
pub const SPLINE_SCENE_URL: &str = "https://prod.spline.design/4HIlOdlXYYkZW66z/scene.splinecode";

pub const HERO_TITLE: &str = "Control Total de tu Seguridad Corporativa";
pub const HERO_SUBTITLE: &str =
    "Gestiona visitantes, empleados, acceso y seguridad desde una plataforma unificada e inteligente";

/// How a counted hero figure is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatFormat {
    /// Thousands separated with commas: `1,247`
    Grouped,
    /// Plain integer followed by a suffix: `15+`
    Suffixed(&'static str),
    /// Counted in tenths, shown with one decimal and a suffix: `99.9%`
    Tenths(&'static str),
}

impl StatFormat {
    pub fn render(&self, value: i64) -> String {
        match self {
            StatFormat::Grouped => group_thousands(value),
            StatFormat::Suffixed(suffix) => format!("{}{}", value, suffix),
            StatFormat::Tenths(suffix) => {
                let sign = if value < 0 { "-" } else { "" };
                let abs = value.unsigned_abs();
                format!("{}{}.{}{}", sign, abs / 10, abs % 10, suffix)
            }
        }
    }
}

/// A headline figure in the hero, counted up when it scrolls into view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroStat {
    pub label: &'static str,
    /// Target of the count-up, in display units of `format`
    pub target: i64,
    pub format: StatFormat,
}

pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat {
        label: "Visitantes Activos",
        target: 1247,
        format: StatFormat::Grouped,
    },
    HeroStat {
        label: "Empresas Confían",
        target: 15,
        format: StatFormat::Suffixed("+"),
    },
    HeroStat {
        label: "Uptime",
        target: 999,
        format: StatFormat::Tenths("%"),
    },
];

/// Format an integer with comma thousands separators
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Icon keys understood by `ui::icon::Icon`
pub mod icon {
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const PLAY_CIRCLE: &str = "play-circle";
    pub const BADGE_CHECK: &str = "badge-check";
    pub const USERS: &str = "users";
    pub const ID_CARD: &str = "id-card";
    pub const CALENDAR: &str = "calendar";
    pub const MESSAGE_SQUARE: &str = "message-square";
    pub const BAR_CHART: &str = "bar-chart";
    pub const SHIELD_CHECK: &str = "shield-check";
    pub const LOCK: &str = "lock";
    pub const REFRESH: &str = "refresh";
    pub const BELL: &str = "bell";
    pub const EYE: &str = "eye";
    pub const CHECK: &str = "check";
    pub const LINKEDIN: &str = "linkedin";
    pub const TWITTER: &str = "twitter";
    pub const YOUTUBE: &str = "youtube";
    pub const MAIL: &str = "mail";
    pub const STAR: &str = "star";
}

/// A card in the features grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: [&'static str; 2],
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: icon::BADGE_CHECK,
        title: "Gestión de Visitantes",
        items: ["Check-in/out automatizado con QR", "Notificaciones en tiempo real"],
    },
    Feature {
        icon: icon::USERS,
        title: "Control de Empleados",
        items: ["Base de datos centralizada", "Roles y permisos granulares"],
    },
    Feature {
        icon: icon::ID_CARD,
        title: "Sistema de Tarjetas",
        items: ["Asignación automática e inteligente", "Tracking en tiempo real"],
    },
    Feature {
        icon: icon::CALENDAR,
        title: "Gestión de Citas",
        items: ["Agendamiento inteligente", "Mapas de ubicación en vivo"],
    },
    Feature {
        icon: icon::MESSAGE_SQUARE,
        title: "Chat en Tiempo Real",
        items: ["Comunicación instantánea", "Salas por empresa"],
    },
    Feature {
        icon: icon::BAR_CHART,
        title: "Analytics & Reportes",
        items: ["Dashboard interactivo", "Métricas en tiempo real"],
    },
];

pub const PREVIEW_METRICS: [&str; 3] = ["Tasa de acceso", "Verificaciones", "Incidentes"];

pub const NOTIFICATIONS: [&str; 3] = [
    "Acceso denegado en Puerta 3",
    "Nuevo visitante registrado",
    "Tarjeta reemitida: Área B",
];

/// Number of entries in the recent activity card
pub const RECENT_ACTIVITY_COUNT: u32 = 6;

/// First check number shown in the recent activity card
pub const RECENT_ACTIVITY_BASE: u32 = 1000;

pub fn recent_activity() -> Vec<String> {
    (0..RECENT_ACTIVITY_COUNT)
        .map(|i| format!("Chequeo completado #{}", RECENT_ACTIVITY_BASE + i))
        .collect()
}

/// Security guarantees with their icons
pub const SECURITY_ITEMS: [(&str, &str); 5] = [
    (icon::LOCK, "Autenticación 2FA con SMS"),
    (icon::SHIELD_CHECK, "Encriptación end-to-end"),
    (icon::BELL, "Notificaciones push en tiempo real"),
    (icon::REFRESH, "Backups automáticos"),
    (icon::EYE, "Logs de auditoría completos"),
];

pub const CERTIFICATIONS: [&str; 3] = ["ISO 27001", "SOC 2", "GDPR Ready"];

/// A customer quote in the case studies carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseStudy {
    pub company: &'static str,
    pub quote: &'static str,
}

pub const CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        company: "TechCorp Solutions",
        quote: "Reducimos tiempo de check-in en 80%",
    },
    CaseStudy {
        company: "SecureNet Systems",
        quote: "Control total de accesos en múltiples sedes",
    },
    CaseStudy {
        company: "BlueShield Corp",
        quote: "Visibilidad en tiempo real de toda la operación",
    },
];

pub const INTEGRATIONS: [&str; 4] = ["Slack", "Google Calendar", "Microsoft Teams", "Zoom"];

pub const CTA_TITLE: &str = "¿Listo para Transformar tu Seguridad?";
pub const CTA_PERKS: [&str; 3] = ["Sin tarjeta de crédito", "Setup en 5 minutos", "Soporte 24/7"];

/// A titled group of links in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: [&'static str; 3],
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        title: "Producto",
        links: ["Features", "Precios", "Demo"],
    },
    FooterColumn {
        title: "Empresa",
        links: ["Sobre Nosotros", "Careers", "Blog"],
    },
    FooterColumn {
        title: "Recursos",
        links: ["Documentación", "API", "Soporte"],
    },
    FooterColumn {
        title: "Legal",
        links: ["Privacidad", "Términos", "Seguridad"],
    },
];

/// Social links as (icon, accessible label)
pub const SOCIAL_LINKS: [(&str, &str); 3] = [
    (icon::LINKEDIN, "LinkedIn"),
    (icon::TWITTER, "Twitter"),
    (icon::YOUTUBE, "YouTube"),
];

pub const FOOTER_TAGLINE: &str =
    "Plataforma unificada para administrar visitantes, empleados y accesos con confianza.";
pub const COPYRIGHT: &str = "© 2024 Novack Security Platform. Made with ❤️ in Costa Rica 🇨🇷";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1247), "1,247");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-1247), "-1,247");
    }

    #[test]
    fn test_stat_formats() {
        assert_eq!(StatFormat::Grouped.render(1169), "1,169");
        assert_eq!(StatFormat::Suffixed("+").render(15), "15+");
        assert_eq!(StatFormat::Tenths("%").render(999), "99.9%");
        assert_eq!(StatFormat::Tenths("%").render(5), "0.5%");
    }

    #[test]
    fn test_hero_stats_final_text() {
        let rendered: Vec<String> = HERO_STATS
            .iter()
            .map(|stat| stat.format.render(stat.target))
            .collect();
        assert_eq!(rendered, vec!["1,247", "15+", "99.9%"]);
    }

    #[test]
    fn test_recent_activity_numbering() {
        let items = recent_activity();
        assert_eq!(items.len(), 6);
        assert_eq!(items[0], "Chequeo completado #1000");
        assert_eq!(items[5], "Chequeo completado #1005");
    }

    #[test]
    fn test_feature_grid_is_complete() {
        assert_eq!(FEATURES.len(), 6);
        assert!(
            FEATURES
                .iter()
                .all(|f| !f.title.is_empty() && f.items.iter().all(|i| !i.is_empty()))
        );
    }
}
