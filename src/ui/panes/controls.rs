//! Controls pane: algorithm picker, description, speed/size readout and legend

use crate::catalog::Algorithm;
use crate::highlight::BarState;
use crate::playback::Player;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const LEGEND: [(BarState, &str); 5] = [
    (BarState::Default, "Unsorted"),
    (BarState::Comparing, "Compare"),
    (BarState::Swapping, "Swap/Write"),
    (BarState::SubSorted, "Partial"),
    (BarState::Sorted, "Sorted"),
];

fn algorithm_tabs(selected: Algorithm, locked: bool) -> Line<'static> {
    let mut spans = Vec::with_capacity(Algorithm::ALL.len() * 2);
    for algorithm in Algorithm::ALL {
        let style = if algorithm == selected {
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else if locked {
            Style::default().fg(DEFAULT_THEME.comment)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(format!(" {} ", algorithm.name()), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn legend() -> Line<'static> {
    let mut spans = Vec::with_capacity(LEGEND.len() * 2);
    for (state, label) in LEGEND {
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(DEFAULT_THEME.bar_color(state)),
        ));
        spans.push(Span::styled(
            format!("{}   ", label),
            Style::default().fg(DEFAULT_THEME.fg),
        ));
    }
    Line::from(spans)
}

/// Render the controls pane
pub fn render_controls_pane(frame: &mut Frame, area: Rect, player: &Player) {
    let block = Block::default()
        .title(" Controls ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let config = player.config();
    let algorithm = config.algorithm;
    let label_style = Style::default()
        .fg(DEFAULT_THEME.comment)
        .add_modifier(Modifier::BOLD);
    let value_style = Style::default().fg(DEFAULT_THEME.secondary);

    let lines = vec![
        algorithm_tabs(algorithm, player.is_running()),
        Line::from(""),
        Line::from(Span::styled(
            algorithm.name(),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            algorithm.description(),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("SPEED ", label_style),
            Span::styled(
                format!("{} ({}ms)", config.speed_label(), config.delay.as_millis()),
                value_style,
            ),
            Span::raw("    "),
            Span::styled("SIZE ", label_style),
            Span::styled(format!("{} items", config.size), value_style),
            Span::raw("    "),
            Span::styled("SORTED ", label_style),
            Span::styled(
                format!(
                    "{}/{}",
                    player.highlight().sorted_count(),
                    player.array().len()
                ),
                value_style,
            ),
        ]),
        legend(),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
