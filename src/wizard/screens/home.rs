//! Dashboard: greeting, recommended careers and quick links.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::widgets::ClickableList;
use crate::wizard::actions::{CAREER_BASE, GO_EXPLORER, GO_NEXT_STEPS, GO_QUIZ, GO_RESOURCES};
use crate::wizard::catalog::{Career, RECOMMENDATION_LIMIT};
use crate::wizard::state::{ScreenEvent, ScreenId};

use super::user_type::user_type_label;
use super::{
    choice_index, heading, key_hint, render_page, text, Page, Reaction, Screen, ScreenContext,
};

/// `(key, label, action id, target)`
const QUICK_LINKS: [(char, &str, u16, ScreenId); 4] = [
    ('e', "Explore all careers", GO_EXPLORER, ScreenId::Explorer),
    ('r', "Study resources", GO_RESOURCES, ScreenId::Resources),
    ('n', "Your next steps", GO_NEXT_STEPS, ScreenId::NextSteps),
    ('q', "Retake the quiz", GO_QUIZ, ScreenId::Quiz),
];

pub struct HomeScreen;

fn recommendations<'a>(ctx: &ScreenContext<'a>) -> Vec<&'a Career> {
    ctx.catalog
        .recommended(&ctx.profile.interests, RECOMMENDATION_LIMIT)
}

pub(crate) fn career_line(key: &str, career: &Career) -> Line<'static> {
    let mut line = key_hint(key, "");
    line.spans.pop();
    line.spans.push(Span::styled(
        format!("{} ", career.icon.symbol()),
        Style::default().fg(career.icon_color.color()),
    ));
    line.spans.push(Span::styled(
        career.name.clone(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    line
}

fn body(ctx: &ScreenContext) -> ClickableList<'static> {
    let profile = ctx.profile;
    let mut cl = ClickableList::new();

    cl.push(heading(format!("Hi, {}!", profile.name), Color::Cyan));
    if !profile.user_type.is_empty() {
        cl.push(text(format!("You are a: {}", user_type_label(&profile.user_type))));
    }
    if profile.interests.is_empty() {
        cl.push(text("Take the quiz to discover your interests."));
    } else {
        cl.push(text(format!("Your interests: {}", profile.interests.join(", "))));
    }
    if let Some(career) = profile.selected_career.career() {
        cl.push(text(format!("Currently exploring: {}", career.name)));
    }
    cl.push(Line::from(""));

    cl.push(heading("Recommended for you", Color::Yellow));
    for (i, career) in recommendations(ctx).into_iter().enumerate() {
        cl.push_clickable(career_line(&(i + 1).to_string(), career), CAREER_BASE + i as u16);
        cl.push(Line::from(Span::styled(
            format!("       {}", career.description),
            Style::default().fg(Color::DarkGray),
        )));
    }
    cl.push(Line::from(""));

    cl.push(heading("Quick links", Color::Green));
    for (key, label, action, _) in QUICK_LINKS {
        cl.push_clickable(key_hint(&key.to_ascii_uppercase().to_string(), label), action);
    }
    cl
}

impl Screen for HomeScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Home
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> Reaction {
        let recs = recommendations(ctx);
        if let Some(i) = choice_index(event, CAREER_BASE, recs.len()) {
            return Reaction::Emit(ScreenEvent::SelectCareer(recs[i].clone()));
        }
        let target = QUICK_LINKS.iter().find_map(|&(key, _, action, target)| {
            let hit = match event {
                InputEvent::Key(c) => c.to_ascii_lowercase() == key,
                InputEvent::Click(id) => *id == action,
                _ => false,
            };
            hit.then_some(target)
        });
        match target {
            Some(target) => Reaction::Emit(ScreenEvent::Navigate(target)),
            None => Reaction::Ignored,
        }
    }

    fn render(
        &self,
        ctx: &ScreenContext,
        f: &mut Frame,
        area: Rect,
        click_state: &Rc<RefCell<ClickState>>,
    ) {
        let page = Page {
            title: "Your Dashboard".to_string(),
            accent: Color::Cyan,
            body: body(ctx),
            footer: ClickableList::new(),
            scroll: None,
        };
        render_page(page, f, area, click_state);
    }
}
