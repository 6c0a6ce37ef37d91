//! Screen trait, the screen factory, and layout helpers shared by all screens.

pub mod detail;
pub mod explorer;
pub mod home;
pub mod next_steps;
pub mod onboarding;
pub mod quiz;
pub mod resources;
pub mod roadmap;
pub mod user_type;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState, InputEvent};
use crate::widgets::ClickableList;

use super::actions::{BACK, SCROLL_DOWN, SCROLL_UP};
use super::catalog::Catalog;
use super::state::{Profile, ScreenEvent, ScreenId};

/// Read-only view of the session handed to screens.
pub struct ScreenContext<'a> {
    pub profile: &'a Profile,
    pub catalog: &'a Catalog,
}

/// How a screen responded to an input.
#[derive(Debug, PartialEq)]
pub enum Reaction {
    /// Not meant for this screen.
    Ignored,
    /// Changed screen-local state only.
    Consumed,
    /// Needs the wizard: profile update and/or navigation.
    Emit(ScreenEvent),
}

/// One wizard screen. Instances own their local UI state and are rebuilt
/// whenever the wizard moves to a different screen.
pub trait Screen {
    fn id(&self) -> ScreenId;

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> Reaction;

    fn render(
        &self,
        ctx: &ScreenContext,
        f: &mut Frame,
        area: Rect,
        click_state: &Rc<RefCell<ClickState>>,
    );
}

/// Fresh screen instance for `id`.
pub fn create_screen(id: ScreenId) -> Box<dyn Screen> {
    match id {
        ScreenId::Onboarding => Box::new(onboarding::OnboardingScreen::new()),
        ScreenId::UserType => Box::new(user_type::UserTypeScreen),
        ScreenId::Quiz => Box::new(quiz::QuizScreen::new()),
        ScreenId::Home => Box::new(home::HomeScreen),
        ScreenId::Explorer => Box::new(explorer::ExplorerScreen::new()),
        ScreenId::CareerDetail => Box::new(detail::CareerDetailScreen::new()),
        ScreenId::Roadmap => Box::new(roadmap::RoadmapScreen::new()),
        ScreenId::Resources => Box::new(resources::ResourcesScreen::new()),
        ScreenId::NextSteps => Box::new(next_steps::NextStepsScreen::new()),
    }
}

/// Shown by career-dependent screens while nothing is selected.
pub const NO_CAREER_SELECTED: &str = "No career selected";

// ── Input helpers ──────────────────────────────────────────────

/// `Esc`, `-` or the back control.
pub(crate) fn is_back(event: &InputEvent) -> bool {
    matches!(
        event,
        InputEvent::Esc | InputEvent::Key('-') | InputEvent::Click(BACK)
    )
}

/// 0-based index for digit keys `1`..`9`, with `0` meaning the tenth item.
pub(crate) fn digit_index(event: &InputEvent) -> Option<usize> {
    match event {
        InputEvent::Key(c @ '1'..='9') => Some(*c as usize - '1' as usize),
        InputEvent::Key('0') => Some(9),
        _ => None,
    }
}

/// Index of a click in `[base, base + len)`.
pub(crate) fn click_index(event: &InputEvent, base: u16, len: usize) -> Option<usize> {
    match event {
        InputEvent::Click(id) if *id >= base && ((*id - base) as usize) < len => {
            Some((*id - base) as usize)
        }
        _ => None,
    }
}

/// Key `[1]`.. or a click on the matching choice.
pub(crate) fn choice_index(event: &InputEvent, base: u16, len: usize) -> Option<usize> {
    digit_index(event)
        .filter(|&i| i < len)
        .or_else(|| click_index(event, base, len))
}

/// Apply an up/down scroll input, keeping the result within `0..=max`.
/// `None` when the input is not a scroll.
pub(crate) fn scrolled(event: &InputEvent, scroll: u16, max: u16) -> Option<u16> {
    let scroll = scroll.min(max);
    match event {
        InputEvent::Up | InputEvent::Key('k') | InputEvent::Click(SCROLL_UP) => {
            Some(scroll.saturating_sub(1))
        }
        InputEvent::Down | InputEvent::Key('j') | InputEvent::Click(SCROLL_DOWN) => {
            Some(scroll.saturating_add(1).min(max))
        }
        _ => None,
    }
}

/// Vertical scroll of a page body.
///
/// The upper bound is the wrapped height minus the viewport, which only the
/// renderer knows; [`render_page`] records it on every draw. Until the first
/// draw the offset is unbounded.
pub(crate) struct Scroll {
    offset: u16,
    max: Cell<u16>,
}

impl Scroll {
    pub fn new() -> Self {
        Self {
            offset: 0,
            max: Cell::new(u16::MAX),
        }
    }

    /// Offset in wrapped rows, as drawn.
    pub fn offset(&self) -> u16 {
        self.offset.min(self.max.get())
    }

    /// `true` if `event` was a scroll input.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match scrolled(event, self.offset, self.max.get()) {
            Some(offset) => {
                self.offset = offset;
                true
            }
            None => false,
        }
    }

    fn set_max(&self, max: u16) {
        self.max.set(max);
    }
}

// ── Line helpers ───────────────────────────────────────────────

pub(crate) fn key_hint(key: &str, label: impl Into<String>) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" [{}] ", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(label.into(), Style::default().fg(Color::White)),
    ])
}

pub(crate) fn heading(text: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", text.into()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn text(s: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", s.into()),
        Style::default().fg(Color::Gray),
    ))
}

pub(crate) fn bullet(s: impl Into<String>, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(color)),
        Span::styled(s.into(), Style::default().fg(Color::White)),
    ])
}

pub(crate) fn push_back(cl: &mut ClickableList<'static>) {
    cl.push_clickable(key_hint("-", "Back"), BACK);
}

/// Tap targets for the scroll keys, for touch screens without arrows.
pub(crate) fn push_scroll(cl: &mut ClickableList<'static>) {
    cl.push_clickable(key_hint("↑", "Scroll up"), SCROLL_UP);
    cl.push_clickable(key_hint("↓", "Scroll down"), SCROLL_DOWN);
}

// ── Layout ─────────────────────────────────────────────────────

/// A screen body above a fixed footer of controls.
pub(crate) struct Page<'a> {
    pub title: String,
    pub accent: Color,
    pub body: ClickableList<'a>,
    pub footer: ClickableList<'a>,
    /// `None` pins the body to its first row.
    pub scroll: Option<&'a Scroll>,
}

pub(crate) fn borders_for(area: Rect) -> Borders {
    if is_narrow_layout(area.width) {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    }
}

pub(crate) fn render_page(
    page: Page,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let borders = borders_for(area);
    let footer_height = if page.footer.len() == 0 {
        0
    } else {
        page.footer.len() as u16 + 2
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(footer_height)])
        .split(area);

    let mut cs = click_state.borrow_mut();

    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(page.accent))
        .title(Span::styled(
            format!(" {} ", page.title),
            Style::default()
                .fg(page.accent)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(chunks[0]);
    let max_scroll = page
        .body
        .visual_height(inner.width)
        .saturating_sub(inner.height);
    let scroll = match page.scroll {
        Some(s) => {
            s.set_max(max_scroll);
            s.offset()
        }
        None => 0,
    };

    page.body
        .register_targets(chunks[0], &mut cs, 1, 1, scroll, inner.width);
    let body = Paragraph::new(page.body.into_lines())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(body, chunks[0]);

    if footer_height > 0 {
        page.footer.register_targets(chunks[1], &mut cs, 1, 1, 0, 0);
        let footer_block = Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::DarkGray));
        f.render_widget(
            Paragraph::new(page.footer.into_lines()).block(footer_block),
            chunks[1],
        );
    }
}
