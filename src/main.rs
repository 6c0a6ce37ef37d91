mod input;
mod widgets;
mod wizard;

use std::{cell::RefCell, io, rc::Rc};

use input::{is_narrow_layout, pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use ratzilla::event::{MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::{Frame, Terminal};
use ratzilla::{DomBackend, WebRenderer};
use wizard::catalog::Catalog;
use wizard::Wizard;

/// Query the grid container's bounding rect and convert pixel coordinates to a cell.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols);
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows);

    web_sys::console::log_1(
        &format!(
            "click: pixel=({}, {}), cell=({:?}, {:?}), targets={}",
            mouse_x,
            mouse_y,
            col,
            row,
            cs.targets.len()
        )
        .into(),
    );

    Some((col?, row?))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let catalog = Catalog::bundled().map_err(|e| {
        web_sys::console::error_1(&format!("career catalog: {}", e).into());
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;

    let wizard = Rc::new(RefCell::new(Wizard::new(catalog)));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let wizard = wizard.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }

            let Some((col, row)) = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs) else {
                return;
            };
            let matched = cs.hit_test(col, row);
            drop(cs);

            if let Some(action_id) = matched {
                wizard
                    .borrow_mut()
                    .handle_input(&InputEvent::Click(action_id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let wizard = wizard.clone();
        move |key_event| {
            if let Some(event) = InputEvent::from_key_code(key_event.code) {
                wizard.borrow_mut().handle_input(&event);
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let wz = wizard.borrow();
            let size = f.area();

            // Update terminal dimensions and clear click targets
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            let main_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(10)])
                .split(size);

            render_title(f, &wz, main_chunks[0]);
            wz.render(f, main_chunks[1], &click_state);
        }
    });

    Ok(())
}

fn render_title(f: &mut Frame, wz: &Wizard, area: Rect) {
    let borders = if is_narrow_layout(area.width) {
        Borders::TOP | Borders::BOTTOM
    } else {
        Borders::ALL
    };
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "Career Compass",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", wz.current_screen().title()),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(
        Block::default()
            .borders(borders)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}
