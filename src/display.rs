//! Output formatting: the decorative box and its plain "ugly" fallback.

use unicode_width::UnicodeWidthStr;

/// Format listed tasks as "index: description" lines. The index is the flat
/// index `done` accepts.
pub fn task_lines(items: &[(usize, &str)]) -> Vec<String> {
    items
        .iter()
        .map(|(index, desc)| format!("{}: {}", index, desc))
        .collect()
}

/// Render lines for the terminal: boxed by default, bare in ugly mode.
pub fn render(lines: &[String], ugly: bool) -> String {
    if ugly {
        plain(lines)
    } else {
        boxed(lines)
    }
}

fn plain(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Box sized to the widest line. Widths are display widths, not byte
/// lengths, so wide (CJK) descriptions keep the border aligned.
fn boxed(lines: &[String]) -> String {
    let inner = lines.iter().map(|line| line.width()).max().unwrap_or(0);

    let mut out = String::new();
    out.push('┌');
    out.push_str(&"─".repeat(inner + 2));
    out.push_str("┐\n");
    for line in lines {
        out.push_str("│ ");
        out.push_str(line);
        out.push_str(&" ".repeat(inner - line.width()));
        out.push_str(" │\n");
    }
    out.push('└');
    out.push_str(&"─".repeat(inner + 2));
    out.push_str("┘\n");
    out
}
