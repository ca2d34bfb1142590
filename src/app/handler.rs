use crate::app::action::Action;
use crate::app::event::{AppEvent, Notification};
use crate::app::state::*;
use crate::tracker::{ContextMenuRequest, MouseButton, Transition};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CMouseButton,
    MouseEvent, MouseEventKind,
};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(key),
        CEvent::Mouse(mouse) => {
            for notification in notifications_for(&mouse) {
                dispatch(state, notification);
            }
            vec![]
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(key: KeyEvent) -> Vec<Action> {
    if key.kind == KeyEventKind::Release {
        return vec![];
    }
    let quit = match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    };
    if quit {
        vec![Action::Quit]
    } else {
        vec![]
    }
}

fn button_code(button: CMouseButton) -> i16 {
    match button {
        CMouseButton::Left => MouseButton::Primary.code(),
        CMouseButton::Middle => MouseButton::Auxiliary.code(),
        CMouseButton::Right => MouseButton::Secondary.code(),
    }
}

/// Translate a terminal mouse report into tracker notifications.
///
/// A secondary press is followed by a context menu request, the same order a
/// browser raises `mousedown` then `contextmenu`.
fn notifications_for(mouse: &MouseEvent) -> Vec<Notification> {
    match mouse.kind {
        MouseEventKind::Down(button) => {
            let code = button_code(button);
            let mut out = vec![Notification::Press(code)];
            if button == CMouseButton::Right {
                out.push(Notification::ContextMenu);
            }
            out
        }
        MouseEventKind::Up(button) => vec![Notification::Release(button_code(button))],
        _ => vec![],
    }
}

/// Run one notification through the tracker and, for press/release, sync the
/// board.
fn dispatch(state: &mut AppState, notification: Notification) {
    let outcome = match notification {
        Notification::Press(code) | Notification::Release(code) => {
            let pressed = matches!(notification, Notification::Press(_));
            let transition = if pressed {
                state.tracker.press(code)
            } else {
                state.tracker.release(code)
            };
            match state.sync_display() {
                Ok(()) => {
                    state.status = describe(notification, transition, pressed);
                    Outcome::from(transition)
                }
                Err(e) => Outcome::DisplayError(e.to_string()),
            }
        }
        Notification::ContextMenu => {
            let mut request = ContextMenuRequest::new();
            state.tracker.suppress_context_menu(&mut request);
            tracing::debug!(
                prevented = request.is_default_prevented(),
                "context menu requested"
            );
            Outcome::Suppressed
        }
    };
    state.record(notification, outcome);
}

fn describe(notification: Notification, transition: Transition, pressed: bool) -> String {
    let verb = if pressed { "pressed" } else { "released" };
    match transition {
        Transition::Changed(button) => format!("{} {}", button, verb),
        Transition::Unchanged(button) => format!("{} already {}", button, verb),
        Transition::Ignored => format!("ignored {}", notification),
    }
}
