//! Keyboard input dispatch.
//!
//! | Key                 | Action                           |
//! |---------------------|----------------------------------|
//! | `j` / `↓`           | next company                     |
//! | `k` / `↑`           | previous company                 |
//! | `space` / `enter`   | toggle company under the cursor  |
//! | `c`                 | toggle currency                  |
//! | `l`                 | toggle language                  |
//! | `r`                 | refetch records                  |
//! | `q` / `esc`         | quit                             |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use revchart_core::session::SessionEvent;

use crate::app::AppState;
use crate::worker::WorkerCommand;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor_up(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_cursor_company(),
        KeyCode::Char('c') => app.apply(SessionEvent::ToggleCurrency),
        KeyCode::Char('l') => app.apply(SessionEvent::ToggleLanguage),
        KeyCode::Char('r') => {
            let cmd = WorkerCommand::FetchRecords {
                source: app.source.clone(),
            };
            if app.worker_tx.send(cmd).is_err() {
                warn!("worker channel closed, cannot refetch");
                app.set_error("worker stopped");
            } else {
                app.set_status("Refetching…");
            }
        }
        _ => {}
    }
}
