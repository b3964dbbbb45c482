use eframe::egui::Color32;

use cgpa_leaderboard::data::model::GpaTier;

// ---------------------------------------------------------------------------
// Podium medals
// ---------------------------------------------------------------------------

pub const GOLD: Color32 = Color32::from_rgb(255, 215, 0);
pub const SILVER: Color32 = Color32::from_rgb(192, 192, 192);
pub const BRONZE: Color32 = Color32::from_rgb(205, 127, 50);

/// Medal colour for ranks 1-3.
pub fn medal_color(rank: usize) -> Option<Color32> {
    match rank {
        1 => Some(GOLD),
        2 => Some(SILVER),
        3 => Some(BRONZE),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Row tints
// ---------------------------------------------------------------------------

/// Background tint for a leaderboard row. Podium rows use their medal.
pub fn row_tint(rank: usize, tier: GpaTier) -> Color32 {
    let base = medal_color(rank).unwrap_or_else(|| tier_color(tier));
    Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), 40)
}

pub fn tier_color(tier: GpaTier) -> Color32 {
    match tier {
        GpaTier::High => Color32::from_rgb(46, 160, 67),
        GpaTier::Good => Color32::from_rgb(88, 166, 255),
        GpaTier::Mid => Color32::from_rgb(210, 153, 34),
        GpaTier::Low => Color32::from_rgb(219, 109, 40),
        GpaTier::Fail => Color32::from_rgb(218, 54, 51),
    }
}

// ---------------------------------------------------------------------------
// Chart series
// ---------------------------------------------------------------------------

pub const COUNT_SERIES: Color32 = Color32::from_rgb(54, 162, 235);
pub const AVERAGE_SERIES: Color32 = Color32::from_rgb(255, 99, 132);
