pub mod markdown;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};
use versewise_engine::{Role, Segment, extract_segments};

use crate::app::{App, Screen};
use theme::Theme;

pub fn draw(f: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Picker => draw_picker(f, app),
        Screen::Chat => draw_chat(f, app),
    }
}

fn draw_picker(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(2),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            "versewise",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Ask a scripture anything.",
            Style::default().fg(app.theme.muted),
        )),
    ]);
    f.render_widget(title, chunks[0]);

    let items: Vec<ListItem> = app
        .scriptures
        .iter()
        .map(|s| {
            ListItem::new(Line::from(vec![
                Span::styled(s.name, Style::default().fg(app.theme.text)),
                Span::styled(
                    format!("  {}", s.tradition),
                    Style::default().fg(app.theme.muted),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Scriptures"))
        .highlight_style(
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("❯ ");
    f.render_stateful_widget(list, chunks[1], &mut app.picker_state);

    let tagline = app
        .picker_state
        .selected()
        .and_then(|i| app.scriptures.get(i))
        .map(|s| s.tagline)
        .unwrap_or_default();
    let tagline = Paragraph::new(Line::from(Span::styled(
        tagline,
        Style::default()
            .fg(app.theme.muted)
            .add_modifier(Modifier::ITALIC),
    )))
    .wrap(Wrap { trim: true });
    f.render_widget(tagline, chunks[2]);

    f.render_widget(help_line(app, "↑/k ↓/j: Move | Enter: Open | q: Quit"), chunks[3]);
}

fn draw_chat(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(2),
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ]
            .as_ref(),
        )
        .split(f.area());

    draw_chat_header(f, app, chunks[0]);

    if app.messages.is_empty() && !app.is_loading {
        draw_welcome(f, app, chunks[1]);
    } else {
        draw_transcript(f, app, chunks[1]);
    }

    draw_input(f, app, chunks[2]);
    f.render_widget(
        help_line(
            app,
            "Enter: Send | Esc: Stop/Back | ↑/↓: Scroll | Tab: Suggestions | Ctrl-C: Quit",
        ),
        chunks[3],
    );
}

fn draw_chat_header(f: &mut Frame, app: &App, area: Rect) {
    let Some(scripture) = app.scripture else {
        return;
    };
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(
                scripture.name,
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ·  {}", scripture.tradition),
                Style::default().fg(app.theme.muted),
            ),
        ]),
        Line::from(Span::styled(
            "─".repeat(area.width as usize),
            Style::default().fg(app.theme.muted),
        )),
    ]);
    f.render_widget(header, area);
}

fn draw_welcome(f: &mut Frame, app: &App, area: Rect) {
    let Some(scripture) = app.scripture else {
        return;
    };
    let theme = &app.theme;
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            format!("Ask {}", scripture.name),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            scripture.tagline,
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];
    for question in &scripture.suggested_questions {
        lines.push(
            Line::from(Span::styled(
                format!("· {question}"),
                Style::default().fg(theme.text),
            ))
            .alignment(Alignment::Center),
        );
    }
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            "Tab cycles a suggestion into the input.",
            Style::default().fg(theme.muted),
        ))
        .alignment(Alignment::Center),
    );

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn draw_transcript(f: &mut Frame, app: &mut App, area: Rect) {
    let lines = transcript_lines(app);
    let total = wrapped_height(&lines, area.width.max(1));
    let max_scroll = total.saturating_sub(area.height);

    if app.stick_to_bottom {
        app.scroll = max_scroll;
    } else {
        app.scroll = app.scroll.min(max_scroll);
        if app.scroll == max_scroll {
            app.stick_to_bottom = true;
        }
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(paragraph, area);
}

/// Conservative wrapped-line estimate used to clamp scrolling; word wrapping
/// can only break earlier than the character count predicts.
fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    lines
        .iter()
        .map(|line| {
            let w = line.width() as u16;
            if w == 0 { 1 } else { w.div_ceil(width) }
        })
        .sum()
}

fn transcript_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let mut lines = Vec::new();

    for (idx, message) in app.messages.iter().enumerate() {
        match message.role {
            Role::User => {
                lines.push(
                    Line::from(Span::styled(
                        "You",
                        Style::default()
                            .fg(theme.muted)
                            .add_modifier(Modifier::BOLD),
                    ))
                    .alignment(Alignment::Right),
                );
                for text_line in message.content.lines() {
                    lines.push(
                        Line::from(Span::styled(
                            text_line.to_string(),
                            Style::default().fg(theme.user_text),
                        ))
                        .alignment(Alignment::Right),
                    );
                }
                lines.push(Line::default());
            }
            Role::Assistant => {
                lines.push(Line::from(Span::styled(
                    "Versewise",
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                )));

                let content = app.visible_content(idx, message);
                for segment in extract_segments(content) {
                    match segment {
                        Segment::Text { value } => {
                            lines.extend(markdown::render_markdown(&value, theme));
                        }
                        Segment::Verse { title, value } => {
                            lines.extend(verse_card_lines(&title, &value, theme));
                        }
                    }
                }

                if app.is_revealing(idx) {
                    push_caret(&mut lines, theme);
                }
                lines.push(Line::default());
            }
        }
    }

    if app.is_loading {
        lines.push(Line::from(Span::styled(
            "Versewise",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        let dots = ".".repeat(1 + app.tick % 3);
        lines.push(Line::from(Span::styled(
            format!("Consulting the verses{dots}"),
            Style::default()
                .fg(theme.shimmer)
                .add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::default());
    }

    lines
}

/// A verse quotation rendered as a distinguished card, set off from the
/// surrounding prose by a left border and its reference as the title.
fn verse_card_lines(title: &str, body: &str, theme: &Theme) -> Vec<Line<'static>> {
    let border = Style::default().fg(theme.verse_border);
    let mut lines = vec![Line::from(vec![
        Span::styled("╭─ ", border),
        Span::styled(
            title.to_uppercase(),
            Style::default()
                .fg(theme.verse_title)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    let body_lines: Vec<&str> = if body.is_empty() {
        vec![""]
    } else {
        body.lines().collect()
    };
    let last = body_lines.len() - 1;
    for (i, text_line) in body_lines.iter().enumerate() {
        let mut quoted = String::new();
        if i == 0 {
            quoted.push('“');
        }
        quoted.push_str(text_line);
        if i == last {
            quoted.push('”');
        }
        lines.push(Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(
                quoted,
                Style::default()
                    .fg(theme.verse_body)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    lines.push(Line::from(Span::styled("╰─", border)));
    lines
}

/// Trailing caret block shown while an answer is still revealing.
fn push_caret(lines: &mut Vec<Line<'static>>, theme: &Theme) {
    let caret = Span::styled("▌", Style::default().fg(theme.caret));
    match lines.last_mut() {
        Some(last) if !last.spans.is_empty() => last.spans.push(caret),
        _ => lines.push(Line::from(caret)),
    }
}

fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let Some(scripture) = app.scripture else {
        return;
    };
    let (content, style) = if app.input.is_empty() {
        let placeholder = if app.is_loading {
            "Generating response...".to_string()
        } else {
            format!("Ask about {}...", scripture.name)
        };
        (placeholder, Style::default().fg(app.theme.muted))
    } else {
        (app.input.clone(), Style::default().fg(app.theme.text))
    };

    let input = Paragraph::new(Line::from(Span::styled(content, style)))
        .block(Block::default().borders(Borders::ALL).title("Ask"));
    f.render_widget(input, area);

    if !app.is_loading {
        f.set_cursor_position(Position::new(input_cursor_x(area, &app.input), area.y + 1));
    }
}

/// Column for the input cursor: one cell past the typed text, clamped inside
/// the box border even when the input is wider than the area.
fn input_cursor_x(area: Rect, input: &str) -> u16 {
    let width = Line::from(input).width().min(u16::MAX as usize) as u16;
    area.x
        .saturating_add(1)
        .saturating_add(width)
        .min(area.right().saturating_sub(2))
}

fn help_line(app: &App, text: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(app.theme.muted),
    )))
}
