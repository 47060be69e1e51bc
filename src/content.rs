//! Static copy for the page sections.
//!
//! Everything here is compile-time data; components render it as-is.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const BRAND: &str = "Spheremedia";
pub const SITE_TITLE: &str = "Spheremedia.in | We Design the Future of Brands";
pub const LOGO_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/7/75/Spheremedia-logo-pink.png/320px-Spheremedia-logo-pink.png";
pub const HEADLINE: &str = "We Design the Future of Brands";
pub const TAGLINE: &str = "Spheremedia.in – Where Creativity Meets Strategy";
pub const LAUNCH_LABEL: &str = "Launch Your Brand 🚀";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/spheremedia.in";

/// Element id of the first section revealed by the launch button.
pub const FIRST_SECTION_ID: &str = "about";

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "Spheremedia is a creative studio for brands that want to be remembered. \
     We pair strategy with craft, from the first logo sketch to the campaign that puts it in front of millions.",
    "Our team of designers, editors and growth specialists works as an extension of yours: \
     clear briefs, fast iterations, and work you will be proud to post.",
];

/// One card in the services grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub title: &'static str,
    pub summary: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Ad Campaign Creation",
        summary: "Concept, copy and creative for paid campaigns that convert.",
    },
    Service {
        title: "Social Media Management",
        summary: "Calendars, community and consistent posting across every channel.",
    },
    Service {
        title: "Brand Identity Design",
        summary: "Logos, palettes and guidelines that make you instantly recognisable.",
    },
    Service {
        title: "Motion Graphics & Reels",
        summary: "Short-form video and animation built for the scroll.",
    },
    Service {
        title: "Content Strategy",
        summary: "Pillars, formats and a plan for what to say and when.",
    },
    Service {
        title: "Instagram Growth Service",
        summary: "Audience research, hashtags and collaborations that grow real followers.",
    },
];

/// A past project shown in the portfolio grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub client: &'static str,
    pub category: &'static str,
    pub outcome: &'static str,
}

pub const PORTFOLIO: &[Project] = &[
    Project {
        client: "Chai Culture",
        category: "Brand Identity",
        outcome: "Full rebrand for a café chain opening its tenth store.",
    },
    Project {
        client: "Urban Threads",
        category: "Ad Campaign",
        outcome: "Festive-season campaign with a 3.2x return on ad spend.",
    },
    Project {
        client: "FitFuel",
        category: "Reels",
        outcome: "Thirty-reel series that tripled weekly profile visits.",
    },
    Project {
        client: "Nomad Stays",
        category: "Instagram Growth",
        outcome: "From 4k to 40k followers in six months.",
    },
];

/// Most stars a rating can show.
pub const MAX_STARS: u8 = 5;

/// A client rating card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rating {
    pub name: &'static str,
    pub stars: u8,
}

impl Rating {
    /// Star glyphs to render, clamped to [`MAX_STARS`].
    #[must_use]
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.stars.min(MAX_STARS)))
    }

    /// Accessible label, e.g. "4 out of 5 stars".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} out of {MAX_STARS} stars", self.stars.min(MAX_STARS))
    }
}

pub const RATINGS: &[Rating] = &[
    Rating { name: "Aarav Sharma 🇮🇳", stars: 5 },
    Rating { name: "Sophia Müller 🇩🇪", stars: 4 },
    Rating { name: "Liam Johnson 🇺🇸", stars: 5 },
    Rating { name: "Kavya Patel 🇮🇳", stars: 5 },
    Rating { name: "Jin Lee 🇰🇷", stars: 4 },
    Rating { name: "Fatima Khan 🇦🇪", stars: 5 },
];
