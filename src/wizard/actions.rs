//! Semantic action IDs for wizard click targets.

// ── Shared controls ────────────────────────────────────────────
pub const BACK: u16 = 1;
/// Advance: next onboarding slide, quiz "continue".
pub const NEXT: u16 = 2;
pub const SKIP: u16 = 3;
pub const START_ROADMAP: u16 = 4;
pub const SCROLL_UP: u16 = 5;
pub const SCROLL_DOWN: u16 = 6;

// ── Choices (1-based on screen) ────────────────────────────────
/// Option base: user types, quiz answers, checklist items. `[1]` = CHOICE_BASE+0.
pub const CHOICE_BASE: u16 = 10;

/// Career list base: + index into the listed careers.
pub const CAREER_BASE: u16 = 40;

// ── Dashboard tiles ────────────────────────────────────────────
pub const GO_EXPLORER: u16 = 100;
pub const GO_RESOURCES: u16 = 101;
pub const GO_NEXT_STEPS: u16 = 102;
pub const GO_QUIZ: u16 = 103;

// ── Explorer tabs ──────────────────────────────────────────────
/// Category tab base: +0 is "All", +n is the n-th catalog category.
pub const CATEGORY_BASE: u16 = 120;
