//! Storm category styling (JTWC classification codes).

/// RGBA color as renderers consume it.
pub type Rgba = [u8; 4];

/// Display properties of one storm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Classification code used by the feed, e.g. `STY`.
    pub code: &'static str,
    /// Coarser code used by downstream vessel routing (`STY` and `TC` fold
    /// into `TY`).
    pub routing_code: &'static str,
    pub name: &'static str,
    pub color: Rgba,
    pub icon: &'static str,
}

/// Style for codes missing from [`CATEGORIES`].
pub const UNKNOWN_CATEGORY: CategoryStyle = CategoryStyle {
    code: "",
    routing_code: "",
    name: "Unknown",
    color: [150, 150, 150, 255],
    icon: "🌀",
};

/// Known categories, strongest first.
pub const CATEGORIES: &[CategoryStyle] = &[
    CategoryStyle {
        code: "STY",
        routing_code: "TY",
        name: "Super Typhoon",
        color: [139, 0, 0, 255],
        icon: "🌀",
    },
    CategoryStyle {
        code: "TY",
        routing_code: "TY",
        name: "Typhoon",
        color: [220, 20, 60, 255],
        icon: "🌀",
    },
    CategoryStyle {
        code: "TC",
        routing_code: "TY",
        name: "Tropical Cyclone",
        color: [255, 69, 0, 255],
        icon: "🌀",
    },
    CategoryStyle {
        code: "H",
        routing_code: "H",
        name: "Hurricane",
        color: [255, 0, 0, 255],
        icon: "🌪️",
    },
    CategoryStyle {
        code: "TS",
        routing_code: "TS",
        name: "Tropical Storm",
        color: [255, 165, 0, 255],
        icon: "⛈️",
    },
    CategoryStyle {
        code: "SS",
        routing_code: "SS",
        name: "Subtropical Storm",
        color: [255, 215, 0, 255],
        icon: "🌩️",
    },
    CategoryStyle {
        code: "TD",
        routing_code: "TD",
        name: "Tropical Depression",
        color: [173, 216, 230, 255],
        icon: "☁️",
    },
    CategoryStyle {
        code: "SD",
        routing_code: "SD",
        name: "Subtropical Depression",
        color: [135, 206, 250, 255],
        icon: "☁️",
    },
    CategoryStyle {
        code: "EX",
        routing_code: "EX",
        name: "Extra Tropical",
        color: [176, 196, 222, 255],
        icon: "🌀",
    },
    CategoryStyle {
        code: "LO",
        routing_code: "LO",
        name: "Post Tropical",
        color: [169, 169, 169, 255],
        icon: "🌀",
    },
    CategoryStyle {
        code: "WV",
        routing_code: "WV",
        name: "Tropical Wave",
        color: [144, 238, 144, 255],
        icon: "〰️",
    },
    CategoryStyle {
        code: "I",
        routing_code: "I",
        name: "Invest",
        color: [211, 211, 211, 255],
        icon: "❓",
    },
    CategoryStyle {
        code: "DB",
        routing_code: "DB",
        name: "Disturbance",
        color: [192, 192, 192, 255],
        icon: "❔",
    },
];

/// Style for `code`, or [`UNKNOWN_CATEGORY`] if the code is not listed.
///
/// Codes match exactly; the feed always sends them upper-case.
pub fn lookup(code: &str) -> &'static CategoryStyle {
    CATEGORIES
        .iter()
        .find(|style| style.code == code)
        .unwrap_or(&UNKNOWN_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(lookup("TY").color, [220, 20, 60, 255]);
        assert_eq!(lookup("H").icon, "🌪️");
        assert_eq!(lookup("STY").name, "Super Typhoon");
        assert_eq!(lookup("TC").routing_code, "TY");
    }

    #[test]
    fn test_unknown_code_falls_back_to_gray() {
        for code in ["XX", "", "ty"] {
            let style = lookup(code);
            assert_eq!(style.color, [150, 150, 150, 255]);
            assert_eq!(style.icon, "🌀");
            assert_eq!(style.name, "Unknown");
        }
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in CATEGORIES.iter().enumerate() {
            assert!(CATEGORIES[i + 1..].iter().all(|b| b.code != a.code), "{}", a.code);
        }
        assert_eq!(CATEGORIES.len(), 13);
    }
}
