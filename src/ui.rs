use crate::app::App;
use ratatui::{
    prelude::{Constraint, Direction, Frame, Layout, Line, Rect, Span, Style, Stylize},
    widgets::{List, ListItem, Paragraph},
};
use sizzlefind::read_stylizing::match_highlighting::highlight_line;

const QUERY_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

fn split(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(QUERY_HEIGHT),
        ])
        .split(area)
}

/// Rows of the result list for a terminal `height` rows tall.
pub fn results_height(height: u16) -> u16 {
    height.saturating_sub(QUERY_HEIGHT + STATUS_HEIGHT).max(1)
}

pub fn render(app: &mut App, frame: &mut Frame) {
    let layout = split(frame.area());

    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|line| {
            let mut spans = vec![Span::styled(format!("{:>5} ", line.score), Style::new().dim())];
            spans.extend(highlight_line(&line.source, &line.matches, app.match_style).spans);
            ListItem::new(Line::from(spans))
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Style::new().reversed())
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, layout[0], &mut app.list_state);

    let status = match app.get_message() {
        Some(msg) => msg,
        None => format!("{}/{}", app.results.len(), app.total()),
    };
    frame.render_widget(Paragraph::new(status).dim(), layout[1]);

    frame.render_widget(&app.query_input, layout[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_results_height() {
        assert_eq!(results_height(24), 20);
        assert_eq!(results_height(2), 1);
    }

    #[test]
    fn test_render_lists_best_first() {
        let mut app = App::new(
            vec!["dt".to_string(), "cat".to_string(), "cut".to_string()],
            "cat",
            false,
        );
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal.draw(|frame| render(&mut app, frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let row = |y: u16| -> String {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect()
        };
        assert!(row(0).starts_with(">     6 cat"));
        assert!(row(1).starts_with("      3 cut"));
        assert!(row(2).starts_with("     -1 dt"));
        assert!(row(4).starts_with("3/3"));
        assert!(row(6).contains("cat"));
    }
}
