//! Career explorer: the whole catalog, filtered by category tabs.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Block;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::widgets::{ClickableList, TabBar};
use crate::wizard::actions::{CAREER_BASE, CATEGORY_BASE};
use crate::wizard::catalog::{Career, Catalog};
use crate::wizard::state::{ScreenEvent, ScreenId};

use super::home::career_line;
use super::{
    borders_for, choice_index, click_index, is_back, push_back, push_scroll, render_page, text,
    Page, Reaction, Screen, ScreenContext, Scroll,
};

pub struct ExplorerScreen {
    /// 0 = all careers, n = n-th catalog category.
    tab: usize,
    scroll: Scroll,
}

fn tab_labels(catalog: &Catalog) -> Vec<&str> {
    let mut labels = vec!["All"];
    labels.extend(catalog.categories());
    labels
}

impl ExplorerScreen {
    pub fn new() -> Self {
        Self {
            tab: 0,
            scroll: Scroll::new(),
        }
    }

    fn listed<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Career> {
        let categories = catalog.categories();
        let category = match self.tab {
            0 => None,
            n => categories.get(n - 1).copied(),
        };
        catalog.in_category(category)
    }

    fn select_tab(&mut self, tab: usize) {
        self.tab = tab;
        self.scroll = Scroll::new();
    }

    fn body(&self, catalog: &Catalog) -> ClickableList<'static> {
        let mut cl = ClickableList::new();
        let listed = self.listed(catalog);
        cl.push(text(format!("{} careers", listed.len())));
        cl.push(Line::from(""));
        for (i, career) in listed.iter().enumerate() {
            let key = if i < 9 {
                (i + 1).to_string()
            } else {
                "0".to_string()
            };
            cl.push_clickable(career_line(&key, career), CAREER_BASE + i as u16);
            cl.push(Line::from(Span::styled(
                format!("       {}", career.description),
                Style::default().fg(Color::Gray),
            )));
            if !career.tags.is_empty() {
                cl.push(Line::from(Span::styled(
                    format!("       #{}", career.tags.join(" #")),
                    Style::default().fg(career.color.color()),
                )));
            }
        }
        cl
    }
}

impl Screen for ExplorerScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Explorer
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> Reaction {
        if is_back(event) {
            return Reaction::Emit(ScreenEvent::Back);
        }

        let tab_count = ctx.catalog.categories().len() + 1;
        match event {
            InputEvent::Right => {
                self.select_tab((self.tab + 1) % tab_count);
                return Reaction::Consumed;
            }
            InputEvent::Left => {
                self.select_tab((self.tab + tab_count - 1) % tab_count);
                return Reaction::Consumed;
            }
            _ => {}
        }
        if let Some(tab) = click_index(event, CATEGORY_BASE, tab_count) {
            self.select_tab(tab);
            return Reaction::Consumed;
        }

        let listed = self.listed(ctx.catalog);
        if let Some(i) = choice_index(event, CAREER_BASE, listed.len()) {
            return Reaction::Emit(ScreenEvent::SelectCareer(listed[i].clone()));
        }

        if self.scroll.handle(event) {
            Reaction::Consumed
        } else {
            Reaction::Ignored
        }
    }

    fn render(
        &self,
        ctx: &ScreenContext,
        f: &mut Frame,
        area: Rect,
        click_state: &Rc<RefCell<ClickState>>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let mut bar = TabBar::new(" │ ");
        for (i, label) in tab_labels(ctx.catalog).into_iter().enumerate() {
            let style = if i == self.tab {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            bar = bar.tab(label, style, CATEGORY_BASE + i as u16);
        }
        {
            let mut cs = click_state.borrow_mut();
            bar.block(
                Block::default()
                    .borders(borders_for(area))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(f, chunks[0], &mut cs);
        }

        let mut footer = ClickableList::new();
        push_scroll(&mut footer);
        push_back(&mut footer);
        let page = Page {
            title: "Explore Careers".to_string(),
            accent: Color::Cyan,
            body: self.body(ctx.catalog),
            footer,
            scroll: Some(&self.scroll),
        };
        render_page(page, f, chunks[1], click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::state::Profile;

    fn with_ctx<R>(f: impl FnOnce(&ScreenContext) -> R) -> R {
        let profile = Profile::default();
        let catalog = Catalog::bundled().unwrap();
        let ctx = ScreenContext {
            profile: &profile,
            catalog: &catalog,
        };
        f(&ctx)
    }

    #[test]
    fn all_tab_lists_everything() {
        with_ctx(|ctx| {
            let screen = ExplorerScreen::new();
            assert_eq!(screen.listed(ctx.catalog).len(), ctx.catalog.careers().len());
        });
    }

    #[test]
    fn tabs_cycle_and_filter() {
        with_ctx(|ctx| {
            let mut screen = ExplorerScreen::new();
            assert_eq!(screen.handle_input(&InputEvent::Right, ctx), Reaction::Consumed);
            let first_category = ctx.catalog.categories()[0];
            assert!(screen
                .listed(ctx.catalog)
                .iter()
                .all(|c| c.category.as_deref() == Some(first_category)));

            screen.handle_input(&InputEvent::Left, ctx);
            screen.handle_input(&InputEvent::Left, ctx);
            assert_eq!(screen.tab, ctx.catalog.categories().len());
        });
    }

    #[test]
    fn clicking_a_tab() {
        with_ctx(|ctx| {
            let mut screen = ExplorerScreen::new();
            for _ in 0..4 {
                screen.handle_input(&InputEvent::Down, ctx);
            }
            assert_eq!(screen.scroll.offset(), 4);
            screen.handle_input(&InputEvent::Click(CATEGORY_BASE + 2), ctx);
            assert_eq!(screen.tab, 2);
            assert_eq!(screen.scroll.offset(), 0);
        });
    }

    #[test]
    fn selecting_within_a_tab() {
        with_ctx(|ctx| {
            let mut screen = ExplorerScreen::new();
            screen.handle_input(&InputEvent::Click(CATEGORY_BASE + 1), ctx);
            let expected = screen.listed(ctx.catalog)[0].clone();
            assert_eq!(
                screen.handle_input(&InputEvent::Key('1'), ctx),
                Reaction::Emit(ScreenEvent::SelectCareer(expected))
            );
        });
    }

    #[test]
    fn tenth_career_uses_zero() {
        with_ctx(|ctx| {
            let mut screen = ExplorerScreen::new();
            let listed = screen.listed(ctx.catalog);
            assert!(listed.len() >= 10);
            let expected = listed[9].clone();
            assert_eq!(
                screen.handle_input(&InputEvent::Key('0'), ctx),
                Reaction::Emit(ScreenEvent::SelectCareer(expected))
            );
        });
    }

    #[test]
    fn back_goes_to_wizard() {
        with_ctx(|ctx| {
            let mut screen = ExplorerScreen::new();
            assert_eq!(screen.handle_input(&InputEvent::Esc, ctx), Reaction::Emit(ScreenEvent::Back));
        });
    }

    #[test]
    fn tab_labels_start_with_all() {
        with_ctx(|ctx| {
            let labels = tab_labels(ctx.catalog);
            assert_eq!(labels[0], "All");
            assert_eq!(labels.len(), ctx.catalog.categories().len() + 1);
        });
    }

    #[test]
    fn every_career_key_is_clickable_on_a_phone() {
        use ratzilla::ratatui::backend::TestBackend;
        use ratzilla::ratatui::Terminal;

        with_ctx(|ctx| {
            let screen = ExplorerScreen::new();
            let cs = Rc::new(RefCell::new(ClickState::new()));
            let mut terminal = Terminal::new(TestBackend::new(32, 120)).unwrap();
            terminal
                .draw(|f| {
                    let area = f.area();
                    screen.render(ctx, f, area, &cs);
                })
                .unwrap();
            let buf = terminal.backend().buffer();
            let row_of = |hint: &str| {
                (0..buf.area.height).find(|&y| {
                    (0..buf.area.width)
                        .map(|x| buf[(x, y)].symbol())
                        .collect::<String>()
                        .contains(hint)
                })
            };

            let listed = screen.listed(ctx.catalog).len();
            for i in 0..listed {
                let key = if i < 9 { i + 1 } else { 0 };
                let hint = format!("[{}]", key);
                let row = row_of(&hint).unwrap_or_else(|| panic!("{} not drawn", hint));
                assert_eq!(
                    cs.borrow().hit_test(4, row),
                    Some(CAREER_BASE + i as u16),
                    "{}",
                    hint
                );
            }
        });
    }
}
