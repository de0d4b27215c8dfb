mod layout;
mod status_bar;
mod theme;

use crate::app::state::{AppState, CardKind, RatingCard};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use starling::rating::format_rating;
use starling::{StarRating, StarRatingDisplay};
use theme::Theme;

const HEADER: &str =
    " starling gallery  Tab/Shift-Tab focus  ←/→ adjust  Enter commit  w save config  q quit";

/// Draw the gallery. Takes the state mutably because each rating records
/// where its track was laid out.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.cards.len());

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(HEADER, Theme::header()))),
        app_layout.header,
    );

    let focus = state.focus;
    for (i, (card, card_area)) in state.cards.iter_mut().zip(app_layout.cards).enumerate() {
        render_card(frame, card_area, card, i == focus);
    }

    status_bar::render(frame, app_layout.status_bar, state);
}

fn render_card(frame: &mut Frame, area: Rect, card: &mut RatingCard, focused: bool) {
    let block = Block::default()
        .title(format!(" {} ", card.title))
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_focused()
        } else {
            Theme::border()
        });

    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width < 2 {
        return;
    }

    let stars_area = Rect {
        x: inner.x + 1,
        width: inner.width - 1,
        height: 1,
        ..inner
    };
    match card.kind {
        CardKind::Input => {
            let widget = StarRating::new(card.rating, card.props.clone()).focused(focused);
            frame.render_stateful_widget(widget, stars_area, &mut card.state);
        }
        CardKind::Display => {
            let widget = StarRatingDisplay::new(card.rating).props(card.props.display.clone());
            frame.render_widget(widget, stars_area);
        }
    }

    if inner.height < 2 {
        return;
    }
    let caption_area = Rect {
        y: inner.y + 1,
        ..stars_area
    };
    frame.render_widget(Paragraph::new(caption(card)), caption_area);
}

fn caption(card: &RatingCard) -> Line<'static> {
    let mut spans = vec![
        Span::styled("rating ", Theme::caption()),
        Span::styled(format_rating(card.rating), Theme::value()),
        Span::styled(format!("  step {}", card.props.display.step), Theme::caption()),
    ];
    if card.kind == CardKind::Input {
        let value = card.state.value(card.rating, &card.props);
        spans.push(Span::styled(
            format!("  value {}/{}", value.now, value.max),
            Theme::caption(),
        ));
        if card.state.staged() != card.rating {
            spans.push(Span::styled(
                format!("  staged {}", format_rating(card.state.staged())),
                Theme::value(),
            ));
        }
    }
    Line::from(spans)
}
