// Deterministic per-city color assignment
/// Accent colors for one city card, as `#rrggbb` hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// Eight-entry accent palette. Indigo, purple, pink, amber, emerald, cyan,
/// red, blue.
const PALETTE: [ColorScheme; 8] = [
    ColorScheme { primary: "#6366f1", secondary: "#818cf8" },
    ColorScheme { primary: "#8b5cf6", secondary: "#a78bfa" },
    ColorScheme { primary: "#ec4899", secondary: "#f472b6" },
    ColorScheme { primary: "#f59e0b", secondary: "#fbbf24" },
    ColorScheme { primary: "#10b981", secondary: "#34d399" },
    ColorScheme { primary: "#06b6d4", secondary: "#22d3ee" },
    ColorScheme { primary: "#ef4444", secondary: "#f87171" },
    ColorScheme { primary: "#3b82f6", secondary: "#60a5fa" },
];

/// Pick the palette entry for a city name.
///
/// The hash is the sum of the name's code points mod the palette size, so a
/// given city maps to the same scheme on every call and across collection
/// refreshes. No state is kept anywhere.
pub fn scheme_for(city: &str) -> ColorScheme {
    let hash: u32 = city.chars().map(|c| c as u32).sum();
    PALETTE[(hash % PALETTE.len() as u32) as usize]
}
