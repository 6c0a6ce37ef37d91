//! Career catalog: the static list of professions the wizard can show.
//!
//! The list is bundled from `assets/careers.json` at compile time and
//! validated once at startup.

use std::collections::HashSet;

use ratzilla::ratatui::style::Color;
use serde::Deserialize;
use thiserror::Error;

const BUNDLED_CATALOG: &str = include_str!("../../assets/careers.json");

/// How many careers the dashboard recommends.
pub const RECOMMENDATION_LIMIT: usize = 3;

/// Symbol drawn next to a career.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    Code,
    Stethoscope,
    Scale,
    Palette,
    Chart,
    Calculator,
    HardHat,
    Flask,
    Megaphone,
    Heart,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Code => "</>",
            Glyph::Stethoscope => "✚",
            Glyph::Scale => "⚖",
            Glyph::Palette => "✎",
            Glyph::Chart => "▲",
            Glyph::Calculator => "∑",
            Glyph::HardHat => "⌂",
            Glyph::Flask => "⚗",
            Glyph::Megaphone => "◉",
            Glyph::Heart => "♥",
        }
    }
}

/// Styling token for a career's card and icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Cyan,
    Red,
    Yellow,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Blue => Color::Blue,
            Tone::Green => Color::Green,
            Tone::Purple => Color::Magenta,
            Tone::Orange => Color::LightRed,
            Tone::Pink => Color::LightMagenta,
            Tone::Cyan => Color::Cyan,
            Tone::Red => Color::Red,
            Tone::Yellow => Color::Yellow,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    pub id: String,
    pub name: String,
    pub icon: Glyph,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: String,
    pub color: Tone,
    pub icon_color: Tone,
    #[serde(default)]
    pub category: Option<String>,
}

impl Career {
    /// Whether any tag or the category matches one of `interests` (case-insensitive).
    pub fn matches_any(&self, interests: &[String]) -> bool {
        interests.iter().any(|interest| {
            self.tags.iter().any(|t| t.eq_ignore_ascii_case(interest))
                || self
                    .category
                    .as_deref()
                    .is_some_and(|c| c.eq_ignore_ascii_case(interest))
        })
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("career catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("career catalog is empty")]
    Empty,

    #[error("duplicate career id: {0}")]
    DuplicateId(String),
}

#[derive(Clone, Debug)]
pub struct Catalog {
    careers: Vec<Career>,
}

impl Catalog {
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let careers: Vec<Career> = serde_json::from_str(json)?;
        if careers.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for career in &careers {
            if !seen.insert(career.id.as_str()) {
                return Err(CatalogError::DuplicateId(career.id.clone()));
            }
        }
        Ok(Self { careers })
    }

    pub fn careers(&self) -> &[Career] {
        &self.careers
    }

    #[cfg(test)]
    pub fn get(&self, id: &str) -> Option<&Career> {
        self.careers.iter().find(|c| c.id == id)
    }

    /// Distinct categories in catalog order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for category in self.careers.iter().filter_map(|c| c.category.as_deref()) {
            if !out.contains(&category) {
                out.push(category);
            }
        }
        out
    }

    /// Careers in `category`, or every career for `None`.
    pub fn in_category(&self, category: Option<&str>) -> Vec<&Career> {
        self.careers
            .iter()
            .filter(|c| category.is_none() || c.category.as_deref() == category)
            .collect()
    }

    /// Up to `limit` careers matching the interests, in catalog order.
    /// Falls back to the head of the catalog when nothing matches.
    pub fn recommended(&self, interests: &[String], limit: usize) -> Vec<&Career> {
        let matching: Vec<&Career> = self
            .careers
            .iter()
            .filter(|c| c.matches_any(interests))
            .take(limit)
            .collect();
        if matching.is_empty() {
            self.careers.iter().take(limit).collect()
        } else {
            matching
        }
    }
}
