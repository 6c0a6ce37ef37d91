//! "Who are you?": picks the profile's user type.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::widgets::ClickableList;
use crate::wizard::actions::CHOICE_BASE;
use crate::wizard::state::{ScreenEvent, ScreenId};

use super::{
    choice_index, heading, is_back, key_hint, push_back, render_page, text, Page, Reaction, Screen,
    ScreenContext,
};

pub struct UserTypeOption {
    /// Value stored in the profile.
    pub id: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

pub const USER_TYPES: [UserTypeOption; 4] = [
    UserTypeOption {
        id: "student",
        label: "School Student",
        detail: "Class 9 to 12, choosing a stream",
    },
    UserTypeOption {
        id: "college",
        label: "College Student",
        detail: "Pursuing a degree or diploma",
    },
    UserTypeOption {
        id: "graduate",
        label: "Graduate / Job Seeker",
        detail: "Looking for the first job or a switch",
    },
    UserTypeOption {
        id: "parent",
        label: "Parent / Guardian",
        detail: "Helping a child decide",
    },
];

/// Display label for a stored user type, falling back to the raw value.
pub fn user_type_label(id: &str) -> &str {
    USER_TYPES
        .iter()
        .find(|o| o.id == id)
        .map(|o| o.label)
        .unwrap_or(id)
}

pub struct UserTypeScreen;

fn body() -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    cl.push(heading("Tell us about yourself", Color::Cyan));
    cl.push(text("This helps us personalise your career guidance."));
    cl.push(Line::from(""));
    for (i, option) in USER_TYPES.iter().enumerate() {
        cl.push_clickable(
            key_hint(&(i + 1).to_string(), option.label),
            CHOICE_BASE + i as u16,
        );
        cl.push(Line::from(Span::styled(
            format!("      {}", option.detail),
            Style::default().fg(Color::DarkGray),
        )));
    }
    cl
}

impl Screen for UserTypeScreen {
    fn id(&self) -> ScreenId {
        ScreenId::UserType
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &ScreenContext) -> Reaction {
        if is_back(event) {
            return Reaction::Emit(ScreenEvent::Back);
        }
        match choice_index(event, CHOICE_BASE, USER_TYPES.len()) {
            Some(i) => Reaction::Emit(ScreenEvent::UserTypeSelected(USER_TYPES[i].id.to_string())),
            None => Reaction::Ignored,
        }
    }

    fn render(
        &self,
        _ctx: &ScreenContext,
        f: &mut Frame,
        area: Rect,
        click_state: &Rc<RefCell<ClickState>>,
    ) {
        let mut footer = ClickableList::new();
        push_back(&mut footer);
        let page = Page {
            title: "Who are you?".to_string(),
            accent: Color::Cyan,
            body: body(),
            footer,
            scroll: None,
        };
        render_page(page, f, area, click_state);
    }
}
