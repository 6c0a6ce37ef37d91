//! Study resources grouped by kind. The groups do not depend on the career;
//! only the header does.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::widgets::ClickableList;
use crate::wizard::catalog::Career;
use crate::wizard::state::{ScreenEvent, ScreenId};

use super::{
    bullet, heading, is_back, push_back, push_scroll, render_page, text, Page, Reaction, Screen,
    ScreenContext, Scroll, NO_CAREER_SELECTED,
};

pub struct ResourceGroup {
    pub kind: &'static str,
    pub color: Color,
    /// `(name, description)`
    pub items: &'static [(&'static str, &'static str)],
}

pub const RESOURCE_GROUPS: [ResourceGroup; 4] = [
    ResourceGroup {
        kind: "Videos",
        color: Color::Red,
        items: &[
            ("MIT OpenCourseWare", "Free engineering courses"),
            ("Khan Academy", "Maths and science foundations"),
        ],
    },
    ResourceGroup {
        kind: "Courses",
        color: Color::Blue,
        items: &[
            ("Coursera - Computer Science", "Online degree programs"),
            ("NPTEL", "IIT courses with certificates"),
        ],
    },
    ResourceGroup {
        kind: "Books",
        color: Color::Green,
        items: &[
            ("Introduction to Algorithms", "By CLRS"),
            ("NCERT textbooks", "Class 11 and 12 fundamentals"),
        ],
    },
    ResourceGroup {
        kind: "Practice",
        color: Color::Yellow,
        items: &[
            ("Previous year papers", "Solve under exam conditions"),
            ("Weekly mock tests", "Track your progress"),
        ],
    },
];

fn body(career: Option<&Career>) -> ClickableList<'static> {
    let mut cl = ClickableList::new();
    match career {
        Some(career) => {
            cl.push(heading(
                format!("{} {}", career.icon.symbol(), career.name),
                career.color.color(),
            ));
            if !career.tags.is_empty() {
                cl.push(text(format!("Focus areas: {}", career.tags.join(", "))));
            }
        }
        None => cl.push(text(NO_CAREER_SELECTED)),
    }
    cl.push(Line::from(""));

    for group in &RESOURCE_GROUPS {
        cl.push(heading(group.kind, group.color));
        for (name, description) in group.items {
            cl.push(bullet(*name, group.color));
            cl.push(Line::from(Span::styled(
                format!("    {}", description),
                Style::default().fg(Color::Gray),
            )));
        }
        cl.push(Line::from(""));
    }
    cl
}

pub struct ResourcesScreen {
    scroll: Scroll,
}

impl ResourcesScreen {
    pub fn new() -> Self {
        Self {
            scroll: Scroll::new(),
        }
    }
}

impl Screen for ResourcesScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Resources
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &ScreenContext) -> Reaction {
        if is_back(event) {
            Reaction::Emit(ScreenEvent::Back)
        } else if self.scroll.handle(event) {
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
        let mut footer = ClickableList::new();
        push_scroll(&mut footer);
        push_back(&mut footer);
        let page = Page {
            title: "Study Resources".to_string(),
            accent: Color::Blue,
            body: body(ctx.profile.selected_career.career()),
            footer,
            scroll: Some(&self.scroll),
        };
        render_page(page, f, area, click_state);
    }
}
