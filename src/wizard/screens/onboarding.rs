//! Intro slides shown once at startup.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::widgets::ClickableList;
use crate::wizard::actions::{NEXT, SKIP};
use crate::wizard::state::{ScreenEvent, ScreenId};

use super::{heading, key_hint, render_page, text, Page, Reaction, Screen, ScreenContext};

pub struct Slide {
    pub symbol: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub color: Color,
}

pub const SLIDES: [Slide; 3] = [
    Slide {
        symbol: "◎",
        title: "Discover Your Path",
        body: "Answer a few quick questions and find careers that match what you enjoy.",
        color: Color::Blue,
    },
    Slide {
        symbol: "➜",
        title: "Get a Clear Roadmap",
        body: "See the streams, exams and degrees that lead to your chosen career, step by step.",
        color: Color::Magenta,
    },
    Slide {
        symbol: "★",
        title: "Learn and Grow",
        body: "Find study resources and concrete next steps so you always know what to do today.",
        color: Color::LightRed,
    },
];

pub struct OnboardingScreen {
    slide: usize,
}

impl OnboardingScreen {
    pub fn new() -> Self {
        Self { slide: 0 }
    }

    fn is_last(&self) -> bool {
        self.slide + 1 >= SLIDES.len()
    }

    fn body(&self) -> ClickableList<'static> {
        let slide = &SLIDES[self.slide];
        let mut cl = ClickableList::new();
        cl.push(Line::from(""));
        cl.push(Line::from(Span::styled(
            format!(" {}", slide.symbol),
            Style::default().fg(slide.color).add_modifier(Modifier::BOLD),
        )));
        cl.push(Line::from(""));
        cl.push(heading(slide.title, slide.color));
        cl.push(Line::from(""));
        cl.push(text(slide.body));
        cl.push(Line::from(""));

        let dots: Vec<Span> = (0..SLIDES.len())
            .map(|i| {
                if i == self.slide {
                    Span::styled(" ●", Style::default().fg(slide.color))
                } else {
                    Span::styled(" ○", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        cl.push(Line::from(dots));
        cl
    }

    fn footer(&self) -> ClickableList<'static> {
        let mut cl = ClickableList::new();
        if self.is_last() {
            cl.push_clickable(key_hint("N", "Get Started"), NEXT);
        } else {
            cl.push_clickable(key_hint("N", "Next"), NEXT);
            cl.push_clickable(key_hint("S", "Skip"), SKIP);
        }
        cl
    }
}

impl Screen for OnboardingScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Onboarding
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &ScreenContext) -> Reaction {
        match event {
            InputEvent::Enter | InputEvent::Right | InputEvent::Key('n') | InputEvent::Click(NEXT) => {
                if self.is_last() {
                    Reaction::Emit(ScreenEvent::OnboardingComplete)
                } else {
                    self.slide += 1;
                    Reaction::Consumed
                }
            }
            InputEvent::Key('s') | InputEvent::Click(SKIP) => {
                Reaction::Emit(ScreenEvent::OnboardingComplete)
            }
            InputEvent::Left if self.slide > 0 => {
                self.slide -= 1;
                Reaction::Consumed
            }
            _ => Reaction::Ignored,
        }
    }

    fn render(
        &self,
        _ctx: &ScreenContext,
        f: &mut Frame,
        area: Rect,
        click_state: &Rc<RefCell<ClickState>>,
    ) {
        let page = Page {
            title: format!("Welcome {}/{}", self.slide + 1, SLIDES.len()),
            accent: SLIDES[self.slide].color,
            body: self.body(),
            footer: self.footer(),
            scroll: None,
        };
        render_page(page, f, area, click_state);
    }
}
