use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            handle_tick(state, Instant::now());
            vec![]
        }
    }
}

fn handle_tick(state: &mut AppState, now: Instant) {
    for card in &mut state.cards {
        if card.state.tick(now) {
            state.dirty = true;
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind != KeyEventKind::Release => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(_, _) | CEvent::FocusLost => {
            terminate_all(state);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn terminate_all(state: &mut AppState) {
    for card in &mut state.cards {
        let props = card.props.clone();
        card.state.terminate(&props);
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        KeyCode::Char('w') => return vec![Action::SaveConfig],
        KeyCode::Tab => {
            state.cycle_focus(true);
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus(false);
            return vec![];
        }
        _ => {}
    }

    let Some(card) = state.focused_card() else {
        return vec![];
    };

    let status = match card.kind {
        CardKind::Input => {
            let props = card.props.clone();
            let events = card.state.handle_key(key, &props);
            card.apply(events)
        }
        CardKind::Display => match key.code {
            KeyCode::Right | KeyCode::Up => {
                card.nudge(true);
                None
            }
            KeyCode::Left | KeyCode::Down => {
                card.nudge(false);
                None
            }
            _ => None,
        },
    };

    if let Some(status) = status {
        state.status = status;
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    let mut pressed = None;
    let mut statuses = Vec::new();

    for (i, card) in state.cards.iter_mut().enumerate() {
        if card.kind != CardKind::Input {
            continue;
        }
        let props = card.props.clone();
        let rating = card.rating;
        let events = card.state.handle_mouse(mouse, rating, &props);
        if events.is_empty() {
            continue;
        }
        if matches!(mouse.kind, MouseEventKind::Down(_)) {
            pressed = Some(i);
        }
        if let Some(status) = card.apply(events) {
            statuses.push(status);
        }
        state.dirty = true;
    }

    if let Some(i) = pressed {
        state.focus = i;
    }
    if let Some(status) = statuses.pop() {
        state.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui;
    use crossterm::event::MouseButton;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use starling::config::AppConfig;
    use starling::StarRatingProps;
    use std::time::Duration;

    fn app() -> AppState {
        AppState::new(AppConfig::default(), StarRatingProps::default())
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    fn draw(state: &mut AppState) {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui::render(f, state)).unwrap();
    }

    #[test]
    fn test_quit_keys() {
        let mut state = app();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('q'))), vec![Action::Quit]);
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_keyboard_commit_on_focused_card() {
        let mut state = app();
        handle_event(&mut state, key(KeyCode::Right));
        assert_eq!(state.status, "3 stars");
        assert_eq!(state.cards[0].rating, 2.5);
        handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(state.cards[0].rating, 3.0);
        assert_eq!(state.status, "Basic: 3");
    }

    #[test]
    fn test_display_card_nudges() {
        let mut state = app();
        let display = state
            .cards
            .iter()
            .position(|c| c.kind == CardKind::Display)
            .unwrap();
        state.focus = display;
        handle_event(&mut state, key(KeyCode::Left));
        assert_eq!(state.cards[display].rating, 3.0);
    }

    #[test]
    fn test_click_focuses_and_rates_card() {
        let mut state = app();
        draw(&mut state);
        let track = state.cards[1].state.track().unwrap();

        handle_event(&mut state, click(MouseEventKind::Down(MouseButton::Left), track.x, track.y));
        handle_event(&mut state, click(MouseEventKind::Up(MouseButton::Left), track.x, track.y));
        assert_eq!(state.focus, 1);
        assert_eq!(state.cards[1].rating, 1.0);
        assert!(state.cards[1].state.is_interacting());

        handle_tick(&mut state, Instant::now() + Duration::from_secs(1));
        assert!(!state.cards[1].state.is_interacting());
    }

    #[test]
    fn test_click_outside_cards_does_nothing() {
        let mut state = app();
        draw(&mut state);
        let before: Vec<f64> = state.cards.iter().map(|c| c.rating).collect();
        handle_event(&mut state, click(MouseEventKind::Down(MouseButton::Left), 99, 39));
        let after: Vec<f64> = state.cards.iter().map(|c| c.rating).collect();
        assert_eq!(before, after);
    }
}
