//! Step-by-step roadmap for the selected career.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::widgets::ClickableList;
use crate::wizard::catalog::Career;
use crate::wizard::state::{Profile, ScreenEvent, ScreenId};

use super::user_type::user_type_label;
use super::{
    heading, is_back, push_back, push_scroll, render_page, text, Page, Reaction, Screen,
    ScreenContext, Scroll, NO_CAREER_SELECTED,
};

pub struct RoadmapStep {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

pub const ROADMAP_STEPS: [RoadmapStep; 6] = [
    RoadmapStep {
        id: 1,
        title: "Choose Science Stream (PCM/PCB)",
        description: "After 10th grade",
        time: "2 years",
    },
    RoadmapStep {
        id: 2,
        title: "Prepare for Entrance Exams",
        description: "JEE/NEET/CLAT etc.",
        time: "1-2 years",
    },
    RoadmapStep {
        id: 3,
        title: "Complete Graduation",
        description: "B.Tech/MBBS/LLB",
        time: "3-5 years",
    },
    RoadmapStep {
        id: 4,
        title: "Build Practical Skills",
        description: "Internships and projects",
        time: "6 months",
    },
    RoadmapStep {
        id: 5,
        title: "Get Certified",
        description: "Professional certifications",
        time: "3-6 months",
    },
    RoadmapStep {
        id: 6,
        title: "Apply for Jobs",
        description: "Entry-level positions",
        time: "Ongoing",
    },
];

/// Lines for one roadmap step: numbered title, description, duration.
pub(crate) fn step_lines(step: &RoadmapStep, accent: Color) -> [Line<'static>; 3] {
    [
        Line::from(vec![
            Span::styled(
                format!("  {}. ", step.id),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                step.title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("     {}", step.description),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("     ⏱ {}", step.time),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

/// Where to start reading the roadmap, by user type.
fn starting_point(user_type: &str) -> &'static str {
    match user_type {
        "student" => "Start from step 1 and plan your stream early.",
        "college" => "You are around step 3; focus on skills and certifications next.",
        "graduate" => "Jump to steps 4 to 6 and start applying.",
        "parent" => "Walk through these steps together with your child.",
        _ => "Follow the steps in order at your own pace.",
    }
}

fn body(career: &Career, profile: &Profile) -> ClickableList<'static> {
    let accent = career.color.color();
    let mut cl = ClickableList::new();
    cl.push(heading(
        format!("{} {}", career.icon.symbol(), career.name),
        accent,
    ));
    let mut plan_for = format!("Plan for {}", profile.name);
    if !profile.user_type.is_empty() {
        plan_for.push_str(&format!(" ({})", user_type_label(&profile.user_type)));
    }
    cl.push(text(plan_for));
    cl.push(text(starting_point(&profile.user_type)));
    cl.push(Line::from(""));
    for step in &ROADMAP_STEPS {
        for line in step_lines(step, accent) {
            cl.push(line);
        }
        cl.push(Line::from(""));
    }
    cl
}

pub struct RoadmapScreen {
    scroll: Scroll,
}

impl RoadmapScreen {
    pub fn new() -> Self {
        Self {
            scroll: Scroll::new(),
        }
    }
}

impl Screen for RoadmapScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Roadmap
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> Reaction {
        if is_back(event) {
            return Reaction::Emit(ScreenEvent::Back);
        }
        if ctx.profile.selected_career.career().is_some() && self.scroll.handle(event) {
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
        let body = match ctx.profile.selected_career.career() {
            Some(career) => body(career, ctx.profile),
            None => {
                let mut cl = ClickableList::new();
                cl.push(text(NO_CAREER_SELECTED));
                cl
            }
        };
        let mut footer = ClickableList::new();
        if ctx.profile.selected_career.career().is_some() {
            push_scroll(&mut footer);
        }
        push_back(&mut footer);
        let page = Page {
            title: "Career Roadmap".to_string(),
            accent: Color::LightRed,
            body,
            footer,
            scroll: Some(&self.scroll),
        };
        render_page(page, f, area, click_state);
    }
}
