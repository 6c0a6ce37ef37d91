//! Career quiz: the user's name, then a few single-choice questions whose
//! answers become the profile's interests.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::widgets::ClickableList;
use crate::wizard::actions::{BACK, CHOICE_BASE, NEXT};
use crate::wizard::state::{QuizResult, ScreenEvent, ScreenId};

use super::{
    choice_index, heading, is_back, key_hint, push_back, render_page, text, Page, Reaction, Screen,
    ScreenContext,
};

const MAX_NAME_LEN: usize = 24;

pub struct Question {
    pub prompt: &'static str,
    /// `(label, interest tag)`
    pub options: &'static [(&'static str, &'static str)],
}

pub const QUESTIONS: [Question; 3] = [
    Question {
        prompt: "Which subjects do you enjoy the most?",
        options: &[
            ("Science and Maths", "science"),
            ("Computers and Technology", "tech"),
            ("Arts and Design", "arts"),
            ("Business and Commerce", "business"),
        ],
    },
    Question {
        prompt: "What kind of work excites you?",
        options: &[
            ("Building and fixing things", "engineering"),
            ("Helping and caring for people", "healthcare"),
            ("Creating something original", "creative"),
            ("Leading teams and persuading others", "management"),
        ],
    },
    Question {
        prompt: "Where would you like to work?",
        options: &[
            ("A lab or research centre", "research"),
            ("A tech company", "tech"),
            ("A studio or agency", "creative"),
            ("A courtroom or public office", "law"),
        ],
    },
];

/// Step 0 collects the name; step `n` shows `QUESTIONS[n - 1]`.
pub struct QuizScreen {
    step: usize,
    name: String,
    answers: [Option<usize>; QUESTIONS.len()],
}

impl QuizScreen {
    pub fn new() -> Self {
        Self {
            step: 0,
            name: String::new(),
            answers: [None; QUESTIONS.len()],
        }
    }

    fn can_continue(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Chosen interest tags in question order, duplicates removed.
    fn interests(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for (question, answer) in QUESTIONS.iter().zip(self.answers.iter()) {
            if let Some(&(_, tag)) = answer.and_then(|i| question.options.get(i)) {
                if !out.iter().any(|t| t == tag) {
                    out.push(tag.to_string());
                }
            }
        }
        out
    }

    fn result(&self) -> QuizResult {
        QuizResult {
            name: self.name.trim().to_string(),
            interests: self.interests(),
        }
    }

    fn handle_name_input(&mut self, event: &InputEvent) -> Reaction {
        match event {
            // '-' is text here; only Esc and the back control leave.
            InputEvent::Esc | InputEvent::Click(BACK) => Reaction::Emit(ScreenEvent::Back),
            InputEvent::Enter | InputEvent::Click(NEXT) => {
                if self.can_continue() {
                    self.step = 1;
                    Reaction::Consumed
                } else {
                    Reaction::Ignored
                }
            }
            InputEvent::Backspace => {
                self.name.pop();
                Reaction::Consumed
            }
            InputEvent::Key(c) if !c.is_control() && self.name.chars().count() < MAX_NAME_LEN => {
                self.name.push(*c);
                Reaction::Consumed
            }
            _ => Reaction::Ignored,
        }
    }

    fn handle_question_input(&mut self, event: &InputEvent) -> Reaction {
        if is_back(event) {
            self.step -= 1;
            return Reaction::Consumed;
        }
        let question = &QUESTIONS[self.step - 1];
        let Some(choice) = choice_index(event, CHOICE_BASE, question.options.len()) else {
            return Reaction::Ignored;
        };
        self.answers[self.step - 1] = Some(choice);
        if self.step == QUESTIONS.len() {
            Reaction::Emit(ScreenEvent::QuizComplete(self.result()))
        } else {
            self.step += 1;
            Reaction::Consumed
        }
    }

    fn progress(&self) -> Line<'static> {
        let total = QUESTIONS.len() + 1;
        let filled = self.step + 1;
        let bar = "█".repeat(filled * 2) + &"░".repeat((total - filled) * 2);
        Line::from(vec![
            Span::styled(format!(" {} ", bar), Style::default().fg(Color::Magenta)),
            Span::styled(
                format!("{}/{}", filled, total),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    }

    fn body(&self) -> ClickableList<'static> {
        let mut cl = ClickableList::new();
        cl.push(self.progress());
        cl.push(Line::from(""));

        if self.step == 0 {
            cl.push(heading("What should we call you?", Color::Magenta));
            cl.push(Line::from(""));
            cl.push(Line::from(vec![
                Span::styled(" Name: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    self.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("▏", Style::default().fg(Color::Yellow)),
            ]));
            cl.push(Line::from(""));
            cl.push(text("Type your name and press Enter."));
            return cl;
        }

        let index = self.step - 1;
        let question = &QUESTIONS[index];
        cl.push(heading(question.prompt, Color::Magenta));
        cl.push(Line::from(""));
        for (i, (label, _)) in question.options.iter().enumerate() {
            let mut line = key_hint(&(i + 1).to_string(), *label);
            if self.answers[index] == Some(i) {
                line = line.style(Style::default().add_modifier(Modifier::REVERSED));
            }
            cl.push_clickable(line, CHOICE_BASE + i as u16);
        }
        cl
    }

    fn footer(&self) -> ClickableList<'static> {
        let mut cl = ClickableList::new();
        if self.step == 0 && self.can_continue() {
            cl.push_clickable(key_hint("Enter", "Continue"), NEXT);
        }
        push_back(&mut cl);
        cl
    }
}

impl Screen for QuizScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Quiz
    }

    fn handle_input(&mut self, event: &InputEvent, _ctx: &ScreenContext) -> Reaction {
        if self.step == 0 {
            self.handle_name_input(event)
        } else {
            self.handle_question_input(event)
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
            title: "Career Quiz".to_string(),
            accent: Color::Magenta,
            body: self.body(),
            footer: self.footer(),
            scroll: None,
        };
        render_page(page, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::catalog::Catalog;
    use crate::wizard::state::Profile;

    fn feed(screen: &mut QuizScreen, events: &[InputEvent]) -> Reaction {
        let profile = Profile::default();
        let catalog = Catalog::bundled().unwrap();
        let ctx = ScreenContext {
            profile: &profile,
            catalog: &catalog,
        };
        let mut last = Reaction::Ignored;
        for event in events {
            last = screen.handle_input(event, &ctx);
        }
        last
    }

    fn type_name(name: &str) -> Vec<InputEvent> {
        name.chars().map(InputEvent::Key).collect()
    }

    #[test]
    fn empty_name_cannot_continue() {
        let mut quiz = QuizScreen::new();
        assert_eq!(feed(&mut quiz, &[InputEvent::Enter]), Reaction::Ignored);
        feed(&mut quiz, &type_name("   "));
        assert_eq!(feed(&mut quiz, &[InputEvent::Enter]), Reaction::Ignored);
        assert_eq!(quiz.step, 0);
    }

    #[test]
    fn backspace_edits_name() {
        let mut quiz = QuizScreen::new();
        feed(&mut quiz, &type_name("Alexx"));
        feed(&mut quiz, &[InputEvent::Backspace]);
        assert_eq!(quiz.name, "Alex");
    }

    #[test]
    fn dash_is_part_of_a_name() {
        let mut quiz = QuizScreen::new();
        feed(&mut quiz, &type_name("Mary-Jane"));
        assert_eq!(quiz.name, "Mary-Jane");
        assert_eq!(quiz.step, 0);
    }

    #[test]
    fn name_length_is_capped() {
        let mut quiz = QuizScreen::new();
        feed(&mut quiz, &type_name(&"a".repeat(40)));
        assert_eq!(quiz.name.chars().count(), MAX_NAME_LEN);
    }

    #[test]
    fn esc_on_name_step_leaves_quiz() {
        let mut quiz = QuizScreen::new();
        assert_eq!(feed(&mut quiz, &[InputEvent::Esc]), Reaction::Emit(ScreenEvent::Back));
    }

    #[test]
    fn full_quiz_emits_result() {
        let mut quiz = QuizScreen::new();
        let mut events = type_name(" Alex ");
        events.push(InputEvent::Enter);
        events.push(InputEvent::Key('1')); // science
        events.push(InputEvent::Click(CHOICE_BASE + 1)); // healthcare
        events.push(InputEvent::Key('1')); // research
        assert_eq!(
            feed(&mut quiz, &events),
            Reaction::Emit(ScreenEvent::QuizComplete(QuizResult {
                name: "Alex".into(),
                interests: vec!["science".into(), "healthcare".into(), "research".into()],
            }))
        );
    }

    #[test]
    fn duplicate_tags_collapse() {
        let mut quiz = QuizScreen::new();
        let mut events = type_name("Sam");
        events.extend([
            InputEvent::Enter,
            InputEvent::Key('2'), // tech
            InputEvent::Key('3'), // creative
            InputEvent::Key('2'), // tech again
        ]);
        match feed(&mut quiz, &events) {
            Reaction::Emit(ScreenEvent::QuizComplete(result)) => {
                assert_eq!(result.interests, vec!["tech".to_string(), "creative".to_string()]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn back_on_question_returns_to_previous_step() {
        let mut quiz = QuizScreen::new();
        let mut events = type_name("Sam");
        events.extend([InputEvent::Enter, InputEvent::Key('1')]);
        feed(&mut quiz, &events);
        assert_eq!(quiz.step, 2);

        assert_eq!(feed(&mut quiz, &[InputEvent::Key('-')]), Reaction::Consumed);
        assert_eq!(quiz.step, 1);
        assert_eq!(feed(&mut quiz, &[InputEvent::Esc]), Reaction::Consumed);
        assert_eq!(quiz.step, 0);
        assert_eq!(quiz.name, "Sam");
    }

    #[test]
    fn out_of_range_choice_ignored() {
        let mut quiz = QuizScreen::new();
        let mut events = type_name("Sam");
        events.push(InputEvent::Enter);
        feed(&mut quiz, &events);
        assert_eq!(feed(&mut quiz, &[InputEvent::Key('9')]), Reaction::Ignored);
        assert_eq!(quiz.step, 1);
    }

    #[test]
    fn continue_hint_only_with_a_name() {
        let mut quiz = QuizScreen::new();
        assert_eq!(quiz.footer().action_ids(), vec![BACK]);
        feed(&mut quiz, &type_name("A"));
        assert_eq!(quiz.footer().action_ids(), vec![NEXT, BACK]);
    }
}
