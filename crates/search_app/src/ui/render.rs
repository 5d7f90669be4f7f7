use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use search_core::{AppViewModel, Article, TrailingIndicator, ViewState};

const HELP_TEXT: &str =
    "Enter search | Tab/Ctrl-T trending | Up/Down scroll | Esc dismiss | Ctrl-C quit";

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let [input_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let input = Paragraph::new(view.input.as_str())
        .block(Block::default().borders(Borders::ALL).title("Search"));
    frame.render_widget(input, input_area);

    match view.view_state {
        ViewState::Idle => render_message(
            frame,
            body_area,
            "Type a keyword and press Enter.",
            Style::default().fg(Color::DarkGray),
        ),
        ViewState::ShowingHotKeywords => render_hot_keywords(frame, body_area, view),
        ViewState::Searching => render_message(
            frame,
            body_area,
            &format!("Searching for \"{}\"...", view.keyword),
            Style::default().fg(Color::Cyan),
        ),
        ViewState::ShowingResults => render_results(frame, body_area, view),
        ViewState::ShowingError => render_message(
            frame,
            body_area,
            view.error_message.as_deref().unwrap_or_default(),
            Style::default().fg(Color::Red),
        ),
    }

    let status = match view.notice {
        Some(notice) => Line::from(Span::styled(
            notice.message(),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )),
        None if view.view_state == ViewState::ShowingResults => Line::from(format!(
            "{} results, page {} | {}",
            view.results.len(),
            view.page,
            HELP_TEXT
        )),
        None => Line::from(HELP_TEXT),
    };
    frame.render_widget(Paragraph::new(status), status_area);
}

fn render_message(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let paragraph = Paragraph::new(Span::styled(text.to_string(), style))
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_hot_keywords(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let mut spans = Vec::with_capacity(view.hot_keywords.len() * 2);
    for (index, keyword) in view.hot_keywords.iter().enumerate() {
        let style = if index == view.hot_keyword_focus {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Green)
        };
        spans.push(Span::styled(format!("[{keyword}]"), style));
        spans.push(Span::raw(" "));
    }
    let tags = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Trending searches"),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(tags, area);
}

fn render_results(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let mut items: Vec<ListItem> = view.results.iter().map(article_item).collect();
    items.push(ListItem::new(Line::from(Span::styled(
        trailing_label(view.trailing),
        Style::default().fg(Color::DarkGray),
    ))));

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Results for \"{}\"", view.keyword)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default().with_selected(Some(view.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn article_item(article: &Article) -> ListItem<'static> {
    let meta = [
        article.author.as_str(),
        article.chapter.as_str(),
        article.published.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" · ");
    ListItem::new(vec![
        Line::from(Span::styled(
            article.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(meta, Style::default().fg(Color::DarkGray))),
    ])
}

fn trailing_label(trailing: TrailingIndicator) -> &'static str {
    match trailing {
        TrailingIndicator::MoreAvailable => "Scroll down for more",
        TrailingIndicator::Loading => "Loading more...",
        TrailingIndicator::NoMore => "No more results",
        TrailingIndicator::LoadError => "Failed to load more; scroll down to retry",
    }
}
