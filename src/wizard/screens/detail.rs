//! Career detail: everything about the selected career on one scrolling page.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::Paragraph;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::widgets::ClickableList;
use crate::wizard::actions::START_ROADMAP;
use crate::wizard::catalog::Career;
use crate::wizard::state::{ScreenEvent, ScreenId};

use super::roadmap::{step_lines, ROADMAP_STEPS};
use super::{
    bullet, heading, is_back, key_hint, push_back, push_scroll, render_page, text, Page, Reaction,
    Screen, ScreenContext, Scroll, NO_CAREER_SELECTED,
};

const SOFTWARE_ENGINEER_SUMMARY: &str = "Software Engineers design, develop, and maintain \
software applications. They work on everything from mobile apps to large-scale systems, using \
programming languages and problem-solving skills to create technology solutions.";

const GENERIC_SUMMARY: &str = "A professional who specializes in this field, working to provide \
valuable services and expertise to individuals and organizations.";

const TRAITS: [&str; 4] = [
    "Analytical thinkers",
    "Problem solvers",
    "Tech enthusiasts",
    "Creative minds",
];

const EDUCATION_PATHS: [&str; 3] = [
    "After 12th: B.Tech/BE (4 years)",
    "After 12th: Diploma (3 years) + Lateral Entry",
    "Self-taught + Bootcamp",
];

/// Steps previewed before the full roadmap link.
const ROADMAP_PREVIEW: usize = 3;

/// `(name, level, deadline)`
const EXAMS: [(&str, &str, &str); 3] = [
    ("JEE Main", "National Level", "April 2025"),
    ("JEE Advanced", "National Level", "June 2025"),
    ("State Engineering Exams", "State Level", "May 2025"),
];

const SKILLS: [&str; 6] = [
    "Problem Solving",
    "Communication",
    "Technical Skills",
    "Time Management",
    "Teamwork",
    "Creativity",
];

/// `(kind, name, description)`
const STUDY_RESOURCES: [(&str, &str, &str); 3] = [
    ("YouTube", "MIT OpenCourseWare", "Free engineering courses"),
    ("Course", "Coursera - Computer Science", "Online degree programs"),
    ("Book", "Introduction to Algorithms", "By CLRS"),
];

/// `(level, range)`
const SALARY_BANDS: [(&str, &str); 3] = [
    ("Beginner", "₹3-5 LPA"),
    ("Average", "₹8-15 LPA"),
    ("Expert", "₹20+ LPA"),
];

const FUTURE_SCOPE: &str = "🚀 Excellent growth potential with increasing demand in AI, Cloud \
Computing, and Software Development.";

fn summary(career: &Career) -> &'static str {
    if career.name == "Software Engineer" {
        SOFTWARE_ENGINEER_SUMMARY
    } else {
        GENERIC_SUMMARY
    }
}

fn body(career: &Career) -> ClickableList<'static> {
    let accent = career.color.color();
    let mut cl = ClickableList::new();

    cl.push(Line::from(vec![
        Span::styled(
            format!(" {} ", career.icon.symbol()),
            Style::default().fg(career.icon_color.color()),
        ),
        Span::styled(
            career.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    cl.push(Line::from(Span::styled(
        format!(" {}", career.description),
        Style::default().fg(Color::White),
    )));
    cl.push(Line::from(""));

    cl.push(heading("What is this career?", Color::Cyan));
    cl.push(text(summary(career)));
    cl.push(Line::from(""));

    cl.push(heading("Who is this for?", Color::Magenta));
    for t in TRAITS {
        cl.push(bullet(t, Color::Magenta));
    }
    cl.push(Line::from(""));

    cl.push(heading("Required Education Path", Color::Green));
    for path in EDUCATION_PATHS {
        cl.push(bullet(format!("✓ {}", path), Color::Green));
    }
    cl.push(Line::from(""));

    cl.push(heading("Step-by-Step Roadmap", Color::LightRed));
    for step in ROADMAP_STEPS.iter().take(ROADMAP_PREVIEW) {
        for line in step_lines(step, accent) {
            cl.push(line);
        }
    }
    cl.push_clickable(key_hint("R", "View Complete Roadmap"), START_ROADMAP);
    cl.push(Line::from(""));

    cl.push(heading("Top Exams to Prepare For", Color::Blue));
    for (name, level, deadline) in EXAMS {
        cl.push(bullet(name, Color::Blue));
        cl.push(Line::from(Span::styled(
            format!("    {} · {}", level, deadline),
            Style::default().fg(Color::Gray),
        )));
    }
    cl.push(Line::from(""));

    cl.push(heading("Skills Required", Color::Yellow));
    cl.push(text(SKILLS.join(" · ")));
    cl.push(Line::from(""));

    cl.push(heading("Study Resources", Color::Cyan));
    for (kind, name, description) in STUDY_RESOURCES {
        cl.push(Line::from(vec![
            Span::styled(format!("  {:<8}", kind), Style::default().fg(Color::DarkGray)),
            Span::styled(name, Style::default().fg(Color::White)),
        ]));
        cl.push(Line::from(Span::styled(
            format!("          {}", description),
            Style::default().fg(Color::Gray),
        )));
    }
    cl.push(Line::from(""));

    cl.push(heading("Salary Range (India)", Color::Green));
    for (level, range) in SALARY_BANDS {
        cl.push(Line::from(vec![
            Span::styled(format!("  {:<10}", level), Style::default().fg(Color::Gray)),
            Span::styled(
                range,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    cl.push(Line::from(""));

    cl.push(heading("Future Scope", Color::Blue));
    cl.push(text(FUTURE_SCOPE));
    cl
}

/// The whole screen while nothing is selected.
fn placeholder() -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        NO_CAREER_SELECTED,
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center)
}

pub struct CareerDetailScreen {
    scroll: Scroll,
}

impl CareerDetailScreen {
    pub fn new() -> Self {
        Self {
            scroll: Scroll::new(),
        }
    }
}

impl Screen for CareerDetailScreen {
    fn id(&self) -> ScreenId {
        ScreenId::CareerDetail
    }

    fn handle_input(&mut self, event: &InputEvent, ctx: &ScreenContext) -> Reaction {
        if is_back(event) {
            return Reaction::Emit(ScreenEvent::Back);
        }
        if ctx.profile.selected_career.career().is_none() {
            return Reaction::Ignored;
        }
        match event {
            InputEvent::Enter | InputEvent::Key('r' | 'R') | InputEvent::Click(START_ROADMAP) => {
                Reaction::Emit(ScreenEvent::StartRoadmap)
            }
            _ if self.scroll.handle(event) => Reaction::Consumed,
            _ => Reaction::Ignored,
        }
    }

    fn render(
        &self,
        ctx: &ScreenContext,
        f: &mut Frame,
        area: Rect,
        click_state: &Rc<RefCell<ClickState>>,
    ) {
        let Some(career) = ctx.profile.selected_career.career() else {
            f.render_widget(placeholder(), area);
            return;
        };

        let mut footer = ClickableList::new();
        push_scroll(&mut footer);
        push_back(&mut footer);
        let page = Page {
            title: career.name.clone(),
            accent: career.color.color(),
            body: body(career),
            footer,
            scroll: Some(&self.scroll),
        };
        render_page(page, f, area, click_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::catalog::Catalog;
    use crate::wizard::state::{CareerSelection, Profile};
    use ratzilla::ratatui::backend::TestBackend;
    use ratzilla::ratatui::buffer::Buffer;
    use ratzilla::ratatui::Terminal;

    fn selected(career: &Career) -> Profile {
        Profile {
            selected_career: CareerSelection::Selected(career.clone()),
            ..Profile::default()
        }
    }

    #[test]
    fn placeholder_is_the_only_content() {
        use ratzilla::ratatui::widgets::Widget;

        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        placeholder().render(area, &mut buf);
        let rendered: Vec<String> = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
                    .trim()
                    .to_string()
            })
            .filter(|row| !row.is_empty())
            .collect();
        assert_eq!(rendered, vec![NO_CAREER_SELECTED.to_string()]);
    }

    #[test]
    fn header_shows_name_and_description_verbatim() {
        let catalog = Catalog::bundled().unwrap();
        for career in catalog.careers() {
            let lines = body(career).plain_text();
            assert!(lines[0].ends_with(&career.name));
            assert_eq!(lines[1].trim_start(), career.description);
        }
    }

    #[test]
    fn software_engineer_gets_its_own_summary() {
        let catalog = Catalog::bundled().unwrap();
        let se = catalog.get("software-engineer").unwrap();
        assert_eq!(summary(se), SOFTWARE_ENGINEER_SUMMARY);
        let doctor = catalog.get("doctor").unwrap();
        assert_eq!(summary(doctor), GENERIC_SUMMARY);
    }

    #[test]
    fn sections_in_order() {
        let catalog = Catalog::bundled().unwrap();
        let lines = body(&catalog.careers()[0]).plain_text();
        let position = |needle: &str| {
            lines
                .iter()
                .position(|l| l.contains(needle))
                .unwrap_or_else(|| panic!("missing {}", needle))
        };
        let order = [
            "What is this career?",
            "Who is this for?",
            "Required Education Path",
            "Step-by-Step Roadmap",
            "View Complete Roadmap",
            "Top Exams to Prepare For",
            "Skills Required",
            "Study Resources",
            "Salary Range (India)",
            "Future Scope",
        ];
        let positions: Vec<usize> = order.iter().map(|s| position(s)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn roadmap_preview_is_three_steps() {
        let catalog = Catalog::bundled().unwrap();
        let lines = body(&catalog.careers()[0]).plain_text();
        assert!(lines.iter().any(|l| l.contains("3. Complete Graduation")));
        assert!(!lines.iter().any(|l| l.contains("4. Build Practical Skills")));
    }

    #[test]
    fn start_roadmap_needs_a_career() {
        let catalog = Catalog::bundled().unwrap();
        let profile = selected(&catalog.careers()[0]);
        let ctx = ScreenContext {
            profile: &profile,
            catalog: &catalog,
        };
        let mut screen = CareerDetailScreen::new();
        assert_eq!(
            screen.handle_input(&InputEvent::Click(START_ROADMAP), &ctx),
            Reaction::Emit(ScreenEvent::StartRoadmap)
        );
        assert_eq!(
            screen.handle_input(&InputEvent::Key('r'), &ctx),
            Reaction::Emit(ScreenEvent::StartRoadmap)
        );

        let empty = Profile::default();
        let ctx = ScreenContext {
            profile: &empty,
            catalog: &catalog,
        };
        assert_eq!(screen.handle_input(&InputEvent::Key('r'), &ctx), Reaction::Ignored);
        assert_eq!(screen.handle_input(&InputEvent::Esc, &ctx), Reaction::Emit(ScreenEvent::Back));
    }

    fn draw(
        screen: &CareerDetailScreen,
        ctx: &ScreenContext,
        terminal: &mut Terminal<TestBackend>,
    ) -> (Buffer, Rc<RefCell<ClickState>>) {
        let cs = Rc::new(RefCell::new(ClickState::new()));
        terminal
            .draw(|f| {
                let area = f.area();
                screen.render(ctx, f, area, &cs);
            })
            .unwrap();
        (terminal.backend().buffer().clone(), cs)
    }

    fn row_containing(buf: &Buffer, needle: &str) -> Option<u16> {
        let area = buf.area;
        (area.y..area.y + area.height).find(|&y| {
            (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
                .contains(needle)
        })
    }

    #[test]
    fn one_up_after_the_bottom_moves_the_page() {
        let catalog = Catalog::bundled().unwrap();
        let profile = selected(catalog.get("software-engineer").unwrap());
        let ctx = ScreenContext {
            profile: &profile,
            catalog: &catalog,
        };
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let mut screen = CareerDetailScreen::new();
        draw(&screen, &ctx, &mut terminal);

        for _ in 0..200 {
            screen.handle_input(&InputEvent::Down, &ctx);
        }
        let (bottom, _) = draw(&screen, &ctx, &mut terminal);
        assert!(row_containing(&bottom, "Future Scope").is_some());

        screen.handle_input(&InputEvent::Down, &ctx);
        let (still_bottom, _) = draw(&screen, &ctx, &mut terminal);
        assert_eq!(still_bottom, bottom);

        screen.handle_input(&InputEvent::Up, &ctx);
        let (moved, _) = draw(&screen, &ctx, &mut terminal);
        assert_ne!(moved, bottom);
    }

    #[test]
    fn roadmap_hint_is_clickable_where_drawn() {
        let catalog = Catalog::bundled().unwrap();
        let profile = selected(catalog.get("software-engineer").unwrap());
        let ctx = ScreenContext {
            profile: &profile,
            catalog: &catalog,
        };
        let screen = CareerDetailScreen::new();
        for width in [40, 50, 80] {
            let mut terminal = Terminal::new(TestBackend::new(width, 90)).unwrap();
            let (buf, cs) = draw(&screen, &ctx, &mut terminal);
            let row = row_containing(&buf, "[R]")
                .unwrap_or_else(|| panic!("[R] not drawn at width {}", width));
            assert_eq!(
                cs.borrow().hit_test(width / 2, row),
                Some(START_ROADMAP),
                "width {}",
                width
            );
        }
    }

    #[test]
    fn scroll_stays_in_content() {
        let catalog = Catalog::bundled().unwrap();
        let profile = selected(&catalog.careers()[0]);
        let ctx = ScreenContext {
            profile: &profile,
            catalog: &catalog,
        };
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let mut screen = CareerDetailScreen::new();
        draw(&screen, &ctx, &mut terminal);
        let len = body(&catalog.careers()[0]).len();
        for _ in 0..len + 5 {
            screen.handle_input(&InputEvent::Down, &ctx);
        }
        let offset = screen.scroll.offset();
        assert!(offset > 0 && (offset as usize) < len);
        screen.handle_input(&InputEvent::Up, &ctx);
        assert_eq!(screen.scroll.offset(), offset - 1);
    }
}
