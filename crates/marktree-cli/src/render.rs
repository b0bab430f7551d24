//! Document tree to styled ratatui lines

use marktree_engine::{Document, DocumentNode, InlineNode};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const CODE_INDENT: &str = "    ";

/// Collects spans into lines, starting a new line at each break.
#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl LineBuilder {
    fn push(&mut self, span: Span<'static>) {
        self.current.push(span);
    }

    fn break_line(&mut self) {
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        if !self.current.is_empty() || self.lines.is_empty() {
            self.break_line();
        }
        self.lines
    }
}

/// Renders a whole document, one blank line between blocks.
pub fn render_document(document: &Document) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, block) in document.blocks.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.extend(render_block(block));
    }
    lines
}

pub fn render_block(block: &DocumentNode) -> Vec<Line<'static>> {
    match block {
        DocumentNode::Heading { level, children } => {
            let style = heading_style(*level);
            let mut lines = render_inline(children, style);
            let prefix = format!("{} ", "#".repeat(usize::from(*level)));
            if let Some(first) = lines.first_mut() {
                first.spans.insert(0, Span::styled(prefix, style));
            }
            lines
        }
        DocumentNode::Paragraph { children } => render_inline(children, Style::default()),
        DocumentNode::List { start, items } => {
            let mut lines = Vec::new();
            for (i, item) in items.iter().enumerate() {
                let marker = match start {
                    Some(first) => format!("{}. ", first.saturating_add(i as u64)),
                    None => "• ".to_string(),
                };
                let indent = " ".repeat(marker.chars().count());
                for (j, mut line) in render_inline(item, Style::default()).into_iter().enumerate()
                {
                    let lead = if j == 0 { marker.clone() } else { indent.clone() };
                    line.spans.insert(0, Span::styled(lead, Style::default().fg(Color::Yellow)));
                    lines.push(line);
                }
            }
            lines
        }
        DocumentNode::CodeBlock { language, code } => {
            let style = Style::default().add_modifier(Modifier::DIM);
            let mut lines = Vec::new();
            if let Some(language) = language {
                lines.push(Line::from(Span::styled(
                    format!("{CODE_INDENT}[{language}]"),
                    style.add_modifier(Modifier::ITALIC),
                )));
            }
            lines.extend(
                code.lines()
                    .map(|line| Line::from(Span::styled(format!("{CODE_INDENT}{line}"), style))),
            );
            lines
        }
        DocumentNode::ImageBlock { alt_text, .. } => vec![Line::from(image_span(alt_text))],
    }
}

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Cyan,
        2 => Color::Green,
        _ => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn image_span(alt_text: &str) -> Span<'static> {
    Span::styled(
        format!("[image: {alt_text}]"),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::ITALIC),
    )
}

/// Converts inline content to styled lines
pub fn render_inline(nodes: &[InlineNode], base_style: Style) -> Vec<Line<'static>> {
    let mut out = LineBuilder::default();
    for node in nodes {
        render_inline_node(node, base_style, &mut out);
    }
    out.finish()
}

fn render_inline_node(node: &InlineNode, base_style: Style, out: &mut LineBuilder) {
    match node {
        InlineNode::Text { value } => out.push(Span::styled(value.clone(), base_style)),
        InlineNode::Strong { children } => {
            let style = base_style.add_modifier(Modifier::BOLD);
            for inner in children {
                render_inline_node(inner, style, out);
            }
        }
        InlineNode::Emphasis { children } => {
            let style = base_style.add_modifier(Modifier::ITALIC);
            for inner in children {
                render_inline_node(inner, style, out);
            }
        }
        InlineNode::Link { href, children } => {
            let style = base_style
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED);
            for inner in children {
                render_inline_node(inner, style, out);
            }
            out.push(Span::styled(
                format!(" ({href})"),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        InlineNode::InlineCode { value } => {
            let style = Style::default().fg(Color::Yellow).bg(Color::DarkGray);
            out.push(Span::styled(format!(" {value} "), style));
        }
        InlineNode::InlineImage { alt_text, .. } => out.push(image_span(alt_text)),
        InlineNode::LineBreak => out.break_line(),
    }
}
