use crate::Span;
use colored::{ColoredString, Colorize};

/// Picks the label and highlight color of a printed diagnostic.
pub trait DiagnosticColorer {
    fn title(&self) -> &'static str;
    fn primary_color(&self, token: &'_ str) -> ColoredString;
}

/// Print `description` followed by the source lines `span` points at, with
/// the spanned text highlighted. Spans outside `text` are clamped to it.
pub fn pretty_print(
    f: &mut dyn std::io::Write,
    file_name: &str,
    text: &str,
    span: Span,
    description: &str,
    colorer: &dyn DiagnosticColorer,
) -> std::io::Result<()> {
    let start = floor_char_boundary(text, span.start);
    let end = floor_char_boundary(text, span.end.max(span.start));

    let lines: Vec<&str> = text.split('\n').collect();
    let first_line = text[..start].matches('\n').count();
    let last_line = text[..end].matches('\n').count();

    let line = lines[first_line];
    let column = start - text[..start].rfind('\n').map_or(0, |newline| newline + 1);
    let highlight_end = floor_char_boundary(line, (column + end - start).min(line.len()));

    let (before, rest) = line.split_at(column);
    let (highlighted, after) = rest.split_at(highlight_end - column);

    let title = colorer.primary_color(colorer.title()).bold();
    let location = format!("{file_name}:{}", first_line + 1).underline();

    writeln!(f, "{title}: {}", description.bold())?;
    writeln!(f, "  {}  {location}", "-->".bright_blue().bold())?;
    writeln!(f, "{}", gutter(0))?;
    writeln!(f, "{}", numbered_line(first_line, &lines))?;
    writeln!(
        f,
        "{}{before}{}{after}",
        gutter(first_line + 1),
        colorer.primary_color(highlighted).bold()
    )?;

    if highlighted.is_empty() {
        let marker = colorer.primary_color("^ here").bold();
        writeln!(f, "{}{}{marker}", gutter(0), " ".repeat(column))?;
    }

    for number in first_line + 2..last_line + 2 {
        writeln!(f, "{}", numbered_line(number, &lines))?;
    }

    writeln!(f, "{}", gutter(0))
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());

    while !text.is_char_boundary(index) {
        index -= 1;
    }

    index
}

/// Line `number` (1-based) with its gutter, or an empty gutter past the end.
fn numbered_line(number: usize, lines: &[&str]) -> ColoredString {
    match number.checked_sub(1).and_then(|idx| lines.get(idx)) {
        Some(line) => ColoredString::from(format!("{}{line}", gutter(number)).as_str()),
        None => gutter(number),
    }
}

fn gutter(number: usize) -> ColoredString {
    if number > 0 {
        format!("{number:2} | ").bold().bright_blue()
    } else {
        "   | ".bold().bright_blue()
    }
}
