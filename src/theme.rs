//! Light/dark theme as a pair of class-name tables selected by one flag.

/// Tailwind class strings for every themed surface on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeClasses {
    pub page: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub heading: &'static str,
    pub accent: &'static str,
    pub nav: &'static str,
    pub nav_link: &'static str,
    pub nav_link_active: &'static str,
    pub card: &'static str,
    pub border: &'static str,
    pub shadow: &'static str,
    pub input: &'static str,
    pub button: &'static str,
    pub button_ghost: &'static str,
    pub chip: &'static str,
    pub progress: &'static str,
    pub error: &'static str,
}

pub const LIGHT: ThemeClasses = ThemeClasses {
    page: "bg-rose-50",
    text: "text-slate-800",
    muted: "text-slate-500",
    heading: "text-slate-900",
    accent: "text-rose-500",
    nav: "bg-white/80 backdrop-blur",
    nav_link: "text-slate-600 hover:text-rose-500",
    nav_link_active: "text-rose-600 font-semibold",
    card: "bg-white",
    border: "border-rose-100",
    shadow: "shadow-lg shadow-rose-200/50",
    input: "bg-white border-rose-200 text-slate-800 placeholder-slate-400",
    button: "bg-rose-500 hover:bg-rose-600 text-white",
    button_ghost: "border-rose-300 text-rose-600 hover:bg-rose-100",
    chip: "bg-rose-100 text-rose-700",
    progress: "bg-rose-500",
    error: "text-red-600",
};

pub const DARK: ThemeClasses = ThemeClasses {
    page: "bg-slate-950",
    text: "text-slate-200",
    muted: "text-slate-400",
    heading: "text-white",
    accent: "text-pink-400",
    nav: "bg-slate-900/80 backdrop-blur",
    nav_link: "text-slate-300 hover:text-pink-400",
    nav_link_active: "text-pink-400 font-semibold",
    card: "bg-slate-900",
    border: "border-slate-800",
    shadow: "shadow-lg shadow-pink-900/30",
    input: "bg-slate-800 border-slate-700 text-slate-100 placeholder-slate-500",
    button: "bg-pink-500 hover:bg-pink-400 text-slate-950",
    button_ghost: "border-pink-400/50 text-pink-300 hover:bg-pink-500/10",
    chip: "bg-pink-500/15 text-pink-300",
    progress: "bg-pink-400",
    error: "text-red-400",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Theme {
    pub is_dark: bool,
}

impl Theme {
    pub fn new(is_dark: bool) -> Self {
        Self { is_dark }
    }

    pub fn toggled(self) -> Self {
        Self {
            is_dark: !self.is_dark,
        }
    }

    pub fn classes(self) -> &'static ThemeClasses {
        if self.is_dark {
            &DARK
        } else {
            &LIGHT
        }
    }

    /// Value for the `color-scheme` meta/attribute.
    pub fn scheme(self) -> &'static str {
        if self.is_dark {
            "dark"
        } else {
            "light"
        }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.is_dark {
            "☀️"
        } else {
            "🌙"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PRICING_PLANS, SKILLS};

    fn fields(c: &ThemeClasses) -> [&'static str; 17] {
        [
            c.page,
            c.text,
            c.muted,
            c.heading,
            c.accent,
            c.nav,
            c.nav_link,
            c.nav_link_active,
            c.card,
            c.border,
            c.shadow,
            c.input,
            c.button,
            c.button_ghost,
            c.chip,
            c.progress,
            c.error,
        ]
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default().classes(), &LIGHT);
        assert_eq!(Theme::default().scheme(), "light");
    }

    #[test]
    fn test_toggle_switches_every_class() {
        let light = Theme::new(false);
        let dark = light.toggled();
        assert!(dark.is_dark);
        assert_eq!(dark.classes(), &DARK);
        for (l, d) in fields(light.classes()).iter().zip(fields(dark.classes()).iter()) {
            assert_ne!(l, d, "class pair should differ between tables");
        }
        assert_eq!(dark.toggled(), light);
        assert_eq!(dark.toggled().classes(), &LIGHT);
    }

    #[test]
    fn test_toggle_leaves_content_untouched() {
        let skills_before = SKILLS.to_vec();
        let plans_before = PRICING_PLANS.to_vec();
        let mut theme = Theme::default();
        for _ in 0..3 {
            theme = theme.toggled();
            let _ = theme.classes();
        }
        assert_eq!(SKILLS, skills_before.as_slice());
        assert_eq!(PRICING_PLANS, plans_before.as_slice());
    }
}
