//! Welcome banner: FIGlet "WORDLENS" shaded left to right, underlined, then a tagline.

use crossterm::QueueableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Ink blue (#3a5bd9).
const INK_BLUE: (u8, u8, u8) = (0x3a, 0x5b, 0xd9);
/// Paper gold (#e8b64c).
pub(crate) const PAPER_GOLD: (u8, u8, u8) = (0xe8, 0xb6, 0x4c);

const TAGLINE: &str = "a pocket dictionary for the terminal";

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb { r, g, b }
}

fn banner_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("WORDLENS").map(|f| f.to_string()))
        .unwrap_or_else(|| "WORDLENS".to_string())
}

/// Gradient position of column `col` in a banner `width` columns wide.
fn column_shade(col: usize, width: usize) -> (u8, u8, u8) {
    let t = if width <= 1 {
        0.0
    } else {
        col as f64 / (width - 1) as f64
    };
    lerp_rgb(INK_BLUE, PAPER_GOLD, t)
}

fn footer(mode: &str) -> String {
    format!(
        "{} · v{} · {} lookups",
        TAGLINE,
        env!("CARGO_PKG_VERSION"),
        mode
    )
}

/// Prints the banner, a rule as wide as the art, and the tagline with version and mode.
pub fn print_welcome(mode: &str) {
    let mut out = stdout();
    let art = banner_art();
    let width = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);

    for line in art.lines() {
        for (col, ch) in line.chars().enumerate() {
            let _ = out.queue(SetForegroundColor(rgb(column_shade(col, width))));
            let _ = out.queue(Print(ch));
        }
        let _ = out.queue(ResetColor);
        let _ = out.queue(Print("\r\n"));
    }

    let _ = out.queue(SetForegroundColor(Color::DarkGrey));
    let _ = out.queue(Print(format!("{}\r\n", "─".repeat(width.max(TAGLINE.len())))));
    let _ = out.queue(SetForegroundColor(rgb(PAPER_GOLD)));
    let _ = out.queue(Print(format!("{}\r\n\r\n", footer(mode))));
    let _ = out.queue(ResetColor);
    let _ = out.flush();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_runs_blue_to_gold() {
        assert_eq!(column_shade(0, 40), INK_BLUE);
        assert_eq!(column_shade(39, 40), PAPER_GOLD);
        assert_eq!(column_shade(0, 1), INK_BLUE);
    }

    #[test]
    fn test_banner_art_not_empty() {
        assert!(!banner_art().trim().is_empty());
    }

    #[test]
    fn test_footer_names_mode_and_version() {
        let f = footer("grounded");
        assert!(f.starts_with(TAGLINE));
        assert!(f.contains(env!("CARGO_PKG_VERSION")));
        assert!(f.ends_with("grounded lookups"));
    }
}
