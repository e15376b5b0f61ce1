use unicode_width::UnicodeWidthChar;

use crate::model::{viewport::ViewPort, BufferLine};

const SELECTION_START: &str = "\x1b[7m";
const STYLE_RESET: &str = "\x1b[0m";

/// Renders a line into an ansi string starting at the view port's horizontal
/// index. Tabs expand to `tab_width` spaces and chars inside the inclusive
/// `selection` are printed in reverse video.
pub fn get_styled_content(
    line: &BufferLine,
    line_offset: usize,
    selection: Option<(usize, usize)>,
    viewport: &ViewPort,
) -> String {
    let tab_width = viewport.tab_width;

    let mut result = String::with_capacity(line.content.len());
    let mut is_styled = false;
    let mut column = 0;

    for (index, c) in line.content.chars().enumerate() {
        let offset = line_offset + index;
        let is_selected = selection.is_some_and(|(start, end)| start <= offset && offset <= end);

        let width = get_char_width(c, tab_width);
        let start = column;
        column += width;

        let hidden = viewport.horizontal_index.saturating_sub(start).min(width);
        if hidden > 0 && hidden == width {
            continue;
        }

        if is_selected != is_styled {
            result.push_str(if is_selected {
                SELECTION_START
            } else {
                STYLE_RESET
            });
            is_styled = is_selected;
        }

        if hidden > 0 {
            // partially scrolled out tab or wide char
            result.extend(std::iter::repeat(' ').take(width - hidden));
        } else {
            push_char(&mut result, c, tab_width);
        }
    }

    if is_styled {
        result.push_str(STYLE_RESET);
    }

    result
}

/// Terminal cells a char occupies. Control chars are printed as `?`.
pub fn get_char_width(c: char, tab_width: usize) -> usize {
    match c {
        '\t' => tab_width,
        c if c.is_control() => 1,
        c => c.width().unwrap_or(1),
    }
}

/// Screen column of the char at `index` after tab expansion and wide chars.
pub fn get_visual_index(line: &BufferLine, index: usize, tab_width: usize) -> usize {
    line.content
        .chars()
        .take(index)
        .map(|c| get_char_width(c, tab_width))
        .sum()
}

/// Char index covering the screen column `visual`. Columns behind the line
/// end resolve to the line length.
pub fn get_char_index(line: &BufferLine, visual: usize, tab_width: usize) -> usize {
    let mut width = 0;
    for (index, c) in line.content.chars().enumerate() {
        width += get_char_width(c, tab_width);
        if visual < width {
            return index;
        }
    }

    line.len()
}

fn push_char(result: &mut String, c: char, tab_width: usize) {
    match c {
        '\t' => result.extend(std::iter::repeat(' ').take(tab_width)),
        c if c.is_control() => result.push('?'),
        c => result.push(c),
    }
}
