use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme::Theme;

/// Renders a markdown text segment to styled ratatui lines.
///
/// Covers what assistant prose actually uses: paragraphs, emphasis, strong,
/// inline code, headings, bullet lists, and fenced code blocks. Anything
/// fancier falls through as plain text.
pub fn render_markdown(text: &str, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut current_spans: Vec<Span<'static>> = Vec::new();

    let mut bold = false;
    let mut italic = false;
    let mut in_heading = false;
    let mut in_code_block = false;
    let mut list_depth: usize = 0;

    // Helper to flush the spans accumulated so far as one line
    fn flush(lines: &mut Vec<Line<'static>>, current_spans: &mut Vec<Span<'static>>) {
        if !current_spans.is_empty() {
            lines.push(Line::from(std::mem::take(current_spans)));
        }
    }

    let parser = Parser::new_ext(text, Options::empty());
    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                flush(&mut lines, &mut current_spans);
                in_heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                flush(&mut lines, &mut current_spans);
                in_heading = false;
            }

            Event::Start(Tag::Strong) => bold = true,
            Event::End(TagEnd::Strong) => bold = false,
            Event::Start(Tag::Emphasis) => italic = true,
            Event::End(TagEnd::Emphasis) => italic = false,

            Event::Start(Tag::Paragraph) => {}
            Event::End(TagEnd::Paragraph) => {
                flush(&mut lines, &mut current_spans);
                lines.push(Line::default());
            }

            Event::Start(Tag::List(_)) => {
                list_depth += 1;
            }
            Event::End(TagEnd::List(_)) => {
                list_depth = list_depth.saturating_sub(1);
                if list_depth == 0 {
                    lines.push(Line::default());
                }
            }
            Event::Start(Tag::Item) => {
                let indent = "  ".repeat(list_depth.saturating_sub(1));
                current_spans.push(Span::styled(
                    format!("{indent}• "),
                    Style::default().fg(theme.muted),
                ));
            }
            Event::End(TagEnd::Item) => {
                flush(&mut lines, &mut current_spans);
            }

            Event::Start(Tag::CodeBlock(_)) => {
                flush(&mut lines, &mut current_spans);
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
                lines.push(Line::default());
            }

            Event::Code(code) => {
                current_spans.push(Span::styled(
                    format!("`{code}`"),
                    Style::default().fg(theme.code_fg).bg(theme.code_bg),
                ));
            }

            Event::Text(text) => {
                if in_code_block {
                    for code_line in text.lines() {
                        lines.push(Line::from(Span::styled(
                            code_line.to_string(),
                            Style::default().fg(theme.code_fg).bg(theme.code_bg),
                        )));
                    }
                } else {
                    let style = if in_heading {
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        let mut style = Style::default().fg(if bold {
                            theme.bold
                        } else {
                            theme.text
                        });
                        if bold {
                            style = style.add_modifier(Modifier::BOLD);
                        }
                        if italic {
                            style = style.add_modifier(Modifier::ITALIC);
                        }
                        style
                    };
                    current_spans.push(Span::styled(text.to_string(), style));
                }
            }

            Event::SoftBreak => {
                current_spans.push(Span::raw(" "));
            }
            Event::HardBreak => {
                flush(&mut lines, &mut current_spans);
            }

            _ => {}
        }
    }

    flush(&mut lines, &mut current_spans);

    // Drop a trailing paragraph gap so segments butt up against what follows.
    while lines.last().is_some_and(|l| l.spans.is_empty()) {
        lines.pop();
    }
    lines
}
