use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows taken by one example card: border, stars, caption, border.
pub const CARD_HEIGHT: u16 = 4;

pub struct AppLayout {
    pub header: Rect,
    pub cards: Vec<Rect>,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect, card_count: usize) -> AppLayout {
    // Main vertical split: header | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    // Two columns of cards
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content);

    let per_column = card_count.div_ceil(2);
    let mut cards = Vec::with_capacity(card_count);
    for (col, column) in columns.iter().enumerate() {
        let count = if col == 0 {
            per_column
        } else {
            card_count - per_column
        };
        let mut constraints = vec![Constraint::Length(CARD_HEIGHT); count];
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(*column);
        cards.extend(rows.iter().take(count).copied());
    }

    AppLayout {
        header,
        cards,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_split_across_columns() {
        let layout = compute_layout(Rect::new(0, 0, 100, 40), 7);
        assert_eq!(layout.cards.len(), 7);
        assert_eq!(layout.cards[0].x, 0);
        assert_eq!(layout.cards[4].y, layout.cards[0].y);
        assert!(layout.cards[4].x > layout.cards[3].x);
        assert_eq!(layout.status_bar, Rect::new(0, 39, 100, 1));
    }
}
