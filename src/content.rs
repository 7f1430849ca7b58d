//! Hand-authored page content.
//!
//! Everything here is `&'static` and read-only; views map these slices
//! straight into lists.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillGroup {
    Frontend,
    Backend,
    Tooling,
}

impl SkillGroup {
    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::Backend => "Backend",
            Self::Tooling => "Tooling",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub group: SkillGroup,
    /// Self-assessed, 0-100. Drives the meter width.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub stack: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub name: &'static str,
    pub blurb: &'static str,
    pub url: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPlan {
    pub name: &'static str,
    pub price: &'static str,
    pub cadence: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub const HERO_PHRASES: &[&str] = &[
    "I build fast web apps.",
    "I write Rust on both ends.",
    "I sweat the animation curves.",
    "I ship things people enjoy.",
];

pub const BIO: &[&str] = &[
    "I'm a full-stack engineer who likes the whole journey of a feature, from the database schema to the last easing curve on a hover state.",
    "For the past seven years I've shipped products for startups and agencies: real-time dashboards, storefronts, internal tools and the occasional game jam entry.",
    "These days most of my work is Rust and TypeScript. I care about accessible markup, boring infrastructure and interfaces that feel alive without getting in the way.",
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "Rust", group: SkillGroup::Backend, level: 90 },
    Skill { name: "TypeScript", group: SkillGroup::Frontend, level: 92 },
    Skill { name: "Leptos", group: SkillGroup::Frontend, level: 80 },
    Skill { name: "React", group: SkillGroup::Frontend, level: 88 },
    Skill { name: "CSS & Motion", group: SkillGroup::Frontend, level: 85 },
    Skill { name: "PostgreSQL", group: SkillGroup::Backend, level: 78 },
    Skill { name: "Axum", group: SkillGroup::Backend, level: 82 },
    Skill { name: "Docker", group: SkillGroup::Tooling, level: 75 },
    Skill { name: "CI/CD", group: SkillGroup::Tooling, level: 72 },
];

pub const EXPERIENCES: &[Experience] = &[
    Experience {
        company: "Lumen Labs",
        role: "Senior Full-stack Engineer",
        period: "2023 - Present",
        summary: "Lead engineer on a collaborative analytics product used by 40k teams.",
        highlights: &[
            "Rewrote the chart renderer in Rust + WASM, cutting frame time by 70%.",
            "Designed the realtime sync layer over WebSockets.",
            "Mentored four engineers through their first production launches.",
        ],
        stack: &["Rust", "WASM", "TypeScript", "PostgreSQL"],
    },
    Experience {
        company: "Northwind Studio",
        role: "Frontend Engineer",
        period: "2020 - 2023",
        summary: "Built marketing sites and storefronts for agency clients.",
        highlights: &[
            "Shipped 25+ client sites with a shared component library.",
            "Introduced visual regression testing to the agency pipeline.",
        ],
        stack: &["React", "Next.js", "GSAP", "Tailwind"],
    },
    Experience {
        company: "Freelance",
        role: "Web Developer",
        period: "2018 - 2020",
        summary: "Small business websites, booking systems and e-commerce.",
        highlights: &[
            "Built a booking platform still running for a chain of climbing gyms.",
        ],
        stack: &["PHP", "JavaScript", "MySQL"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        name: "Petalboard",
        blurb: "A drawing board with physics-based brush strokes, written in Rust and compiled to WASM.",
        url: "https://github.com/miraokafor/petalboard",
        tags: &["Rust", "WASM", "Canvas"],
    },
    Project {
        name: "Quill",
        blurb: "Markdown-first static blog engine with syntax highlighting and RSS.",
        url: "https://github.com/miraokafor/quill",
        tags: &["Rust", "Markdown"],
    },
    Project {
        name: "Tidepool",
        blurb: "Tiny self-hosted uptime monitor with a friendly status page.",
        url: "https://github.com/miraokafor/tidepool",
        tags: &["Axum", "SQLite"],
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "🌐",
        title: "Web Applications",
        description: "Full-stack apps from schema to UI, built to be maintained by your team after I leave.",
    },
    Service {
        icon: "⚡",
        title: "Performance Audits",
        description: "Profiling, bundle trimming and rendering fixes that make slow pages feel instant.",
    },
    Service {
        icon: "🎨",
        title: "Interactive Design",
        description: "Motion, micro-interactions and landing pages with personality, accessible by default.",
    },
    Service {
        icon: "🦀",
        title: "Rust Consulting",
        description: "Porting hot paths to Rust, reviewing crates and coaching teams adopting the language.",
    },
];

pub const PRICING_PLANS: &[PricingPlan] = &[
    PricingPlan {
        name: "Starter",
        price: "$1,500",
        cadence: "per project",
        features: &[
            "Single-page site",
            "Responsive layout",
            "Contact form",
            "One revision round",
        ],
        featured: false,
    },
    PricingPlan {
        name: "Professional",
        price: "$4,500",
        cadence: "per project",
        features: &[
            "Up to 8 pages",
            "Custom animations",
            "CMS or markdown blog",
            "Performance budget",
            "Three revision rounds",
        ],
        featured: true,
    },
    PricingPlan {
        name: "Retainer",
        price: "$95",
        cadence: "per hour",
        features: &[
            "Ongoing development",
            "Code reviews",
            "Priority support",
        ],
        featured: false,
    },
];

pub fn skills_in(group: SkillGroup) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| s.group == group)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_one_featured_plan() {
        assert_eq!(PRICING_PLANS.iter().filter(|p| p.featured).count(), 1);
    }

    #[test]
    fn test_skill_levels_in_range() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_skills_in_group() {
        let groups = [SkillGroup::Frontend, SkillGroup::Backend, SkillGroup::Tooling];
        let total: usize = groups.iter().map(|g| skills_in(*g).count()).sum();
        assert_eq!(total, SKILLS.len());
        assert!(skills_in(SkillGroup::Backend).any(|s| s.name == "Rust"));
    }

    #[test]
    fn test_experiences_have_highlights() {
        for exp in EXPERIENCES {
            assert!(!exp.highlights.is_empty(), "{} has no highlights", exp.company);
        }
    }
}
