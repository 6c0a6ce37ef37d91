//! Profile summary and an action checklist.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::widgets::ClickableList;
use crate::wizard::actions::CHOICE_BASE;
use crate::wizard::state::{Profile, ScreenEvent, ScreenId};

use super::user_type::user_type_label;
use super::{
    choice_index, heading, is_back, push_back, render_page, text, Page, Reaction, Screen,
    ScreenContext,
};

pub const CHECKLIST: [&str; 5] = [
    "Talk to someone working in your chosen field",
    "Shortlist colleges and their entrance exams",
    "Pick one study resource and start this week",
    "Build a small project or portfolio piece",
    "Review your roadmap again next month",
];

pub struct NextStepsScreen {
    done: [bool; CHECKLIST.len()],
}

fn summary(profile: &Profile) -> Vec<Line<'static>> {
    let user_type = if profile.user_type.is_empty() {
        "not chosen yet"
    } else {
        user_type_label(&profile.user_type)
    };
    let interests = if profile.interests.is_empty() {
        "none yet".to_string()
    } else {
        profile.interests.join(", ")
    };
    let career = profile
        .selected_career
        .career()
        .map(|c| c.name.as_str())
        .unwrap_or("not chosen yet");
    vec![
        text(format!("Name: {}", profile.name)),
        text(format!("You are a: {}", user_type)),
        text(format!("Interests: {}", interests)),
        text(format!("Career: {}", career)),
    ]
}

impl NextStepsScreen {
    pub fn new() -> Self {
        Self {
            done: [false; CHECKLIST.len()],
        }
    }

    fn completed(&self) -> usize {
        self.done.iter().filter(|&&d| d).count()
    }

    fn body(&self, profile: &Profile) -> ClickableList<'static> {
        let mut cl = ClickableList::new();
        cl.push(heading("Your profile", Color::Cyan));
        for line in summary(profile) {
            cl.push(line);
        }
        cl.push(Line::from(""));

        cl.push(heading("Checklist", Color::Green));
        for (i, item) in CHECKLIST.iter().enumerate() {
            let (mark, style) = if self.done[i] {
                (
                    "[✓]",
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                ("[ ]", Style::default().fg(Color::White))
            };
            cl.push_clickable(
                Line::from(vec![
                    Span::styled(
                        format!(" {} {} ", i + 1, mark),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*item, style),
                ]),
                CHOICE_BASE + i as u16,
            );
        }
        cl.push(Line::from(""));
        cl.push(text(format!(
            "{}/{} completed",
            self.completed(),
            CHECKLIST.len()
        )));
        cl
    }
}

impl Screen for NextStepsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::NextSteps
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &ScreenContext) -> Reaction {
        if is_back(event) {
            return Reaction::Emit(ScreenEvent::Back);
        }
        match choice_index(event, CHOICE_BASE, CHECKLIST.len()) {
            Some(i) => {
                self.done[i] = !self.done[i];
                Reaction::Consumed
            }
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
        let mut footer = ClickableList::new();
        push_back(&mut footer);
        let page = Page {
            title: "Next Steps".to_string(),
            accent: Color::Green,
            body: self.body(ctx.profile),
            footer,
            scroll: None,
        };
        render_page(page, f, area, click_state);
    }
}
