use crate::round::Button;
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;

/// Fixed-rate frame loop: draw, poll input until the frame is due, then
/// apply pending table effects. Returns when the player quits.
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut AppState) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| {
            app.set_viewport(ui::canvas_viewport(f.area()));
            ui::draw(f, app);
        })?;

        let timeout = app.frame_time().saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let quit = match event::read()? {
                Event::Key(key) => handle_key(app, key),
                Event::Mouse(mouse) => {
                    handle_mouse(app, mouse);
                    false
                }
                _ => false,
            };
            if quit {
                log::info!("quit after {:.1}s", app.started.elapsed().as_secs_f32());
                break;
            }
        }

        if last_tick.elapsed() >= app.frame_time() {
            app.tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

/// Translate a mouse event into pointer input. Returns whether a button fired.
pub fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> bool {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.handle_input(InputAction::PointerDown(mouse.column, mouse.row))
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            app.handle_input(InputAction::PointerMove(mouse.column, mouse.row))
        }
        _ => false,
    }
}

/// Translate a key press. Returns `true` when the loop should end.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        return true;
    }
    let code = key.code;
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let _ = app.handle_input(InputAction::MenuInc);
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let _ = app.handle_input(InputAction::MenuDec);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::MenuCancel);
            }
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Char('m') | KeyCode::Char('M') => {
                let _ = app.handle_input(InputAction::ToggleMenu);
            }
            KeyCode::Char('f') | KeyCode::Char('F') => {
                let _ = app.handle_input(InputAction::Press(Button::Fold));
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                let _ = app.handle_input(InputAction::Press(Button::Check));
            }
            KeyCode::Char('b') | KeyCode::Char('B') => {
                let _ = app.handle_input(InputAction::Press(Button::Bet));
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char(' ') => {
                let _ = app.handle_input(InputAction::Press(Button::Deal));
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        },
    }
    false
}
