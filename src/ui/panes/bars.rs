//! Bar chart of the working array

use crate::playback::Player;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Width of each bar and the gap between bars so `count` bars fit in `width`
fn bar_geometry(width: u16, count: usize) -> (u16, u16) {
    let count = count.max(1) as u16;
    let gap = if width >= count.saturating_mul(2) { 1 } else { 0 };
    let usable = width.saturating_sub(gap * count.saturating_sub(1));
    ((usable / count).max(1), gap)
}

/// Render the array as vertical bars colored by highlight state
pub fn render_bars_pane(frame: &mut Frame, area: Rect, player: &Player) {
    let title = format!(" {} ", player.algorithm().name());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let values = player.array();
    if values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let highlight = player.highlight();
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = DEFAULT_THEME.bar_color(highlight.classify(index));
            Bar::default()
                .value(value.max(0) as u64)
                .text_value(String::new())
                .style(Style::default().fg(color))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let (bar_width, bar_gap) = bar_geometry(inner_width, values.len());

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(bar_gap)
        .max(player.scale().max(1) as u64);

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_geometry() {
        // plenty of room: gaps between bars
        assert_eq!(bar_geometry(100, 10), (9, 1));
        // too narrow for gaps
        assert_eq!(bar_geometry(60, 50), (1, 0));
        // never collapses to zero width
        assert_eq!(bar_geometry(10, 100), (1, 0));
    }
}
