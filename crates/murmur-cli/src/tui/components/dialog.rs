//! Dialog rendering
//!
//! Paints a `ViewModel` into the frame buffer. All positions come from the
//! engine; this module only converts them to cells and picks colors.

use murmur_core::dialog::{InputMode, StatusCaption, ViewModel};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::scrollbars::render_scrollbar;
use crate::tui::input::InputLine;
use crate::tui::theme::Theme;
use crate::tui::utils::{to_cells, truncate_ellipsis};

const BUTTON_LABEL: &str = "Ask";
const CARET: &str = "▏";

/// The trigger button, drawn whether or not the dialog is open
pub fn render_button(buf: &mut Buffer, vm: &ViewModel, theme: &Theme) {
    let area = to_cells(vm.button.bounds).intersection(buf.area);
    if area.is_empty() {
        return;
    }

    let color = if vm.button.pressed {
        theme.button_pressed_color
    } else {
        theme.button_color
    };
    let label = match (vm.visible, vm.status) {
        (true, StatusCaption::Thinking) => "…",
        _ => BUTTON_LABEL,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    block.render(area, buf);
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.text_color).add_modifier(Modifier::BOLD))
        .render(inner, buf);
}

/// The overlay panel and everything inside it
pub fn render_dialog(buf: &mut Buffer, vm: &ViewModel, input: &InputLine, theme: &Theme) {
    if !vm.visible {
        return;
    }

    let panel = to_cells(vm.geometry.panel).intersection(buf.area);
    if panel.is_empty() {
        return;
    }
    Clear.render(panel, buf);
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .style(Style::default().bg(theme.bg_color))
        .title(" murmur ")
        .render(panel, buf);

    let question = to_cells(vm.geometry.question).intersection(panel);
    if vm.input_mode == InputMode::AwaitingKeyboard {
        render_input(buf, question, vm, input, theme);
    } else {
        render_question(buf, question, vm, theme);
    }

    render_reply(buf, vm, panel, theme);

    if let Some(scrollbar) = &vm.scrollbar {
        render_scrollbar(buf, scrollbar, theme.accent_color, theme.scrollbar_bg_color);
    }

    let footer = to_cells(vm.geometry.footer).intersection(panel);
    render_footer(buf, footer, vm, input, theme);
}

fn render_input(buf: &mut Buffer, area: Rect, vm: &ViewModel, input: &InputLine, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    let confirm = format!("[{}]", input.options.confirm_label);
    let confirm_width = confirm.width() as u16;
    let field_width = area.width.saturating_sub(confirm_width + 1) as usize;

    let mut spans = vec![Span::styled("> ", Style::default().fg(theme.accent_color))];
    let text_width = field_width.saturating_sub(3);
    if input.buffer.is_empty() {
        if vm.caret_visible {
            spans.push(Span::styled(CARET, Style::default().fg(theme.accent_color)));
        }
        spans.push(Span::styled(
            truncate_ellipsis(&input.options.placeholder, text_width),
            Style::default().fg(theme.dim_color),
        ));
    } else {
        // Keep the tail visible while typing past the field width
        let mut shown: Vec<char> = Vec::new();
        let mut width = 0;
        for ch in input.buffer.chars().rev() {
            let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
            if width + w > text_width {
                break;
            }
            width += w;
            shown.push(ch);
        }
        let shown: String = shown.into_iter().rev().collect();
        spans.push(Span::styled(shown, Style::default().fg(theme.text_color)));
        if vm.caret_visible {
            spans.push(Span::styled(CARET, Style::default().fg(theme.accent_color)));
        }
    }

    Paragraph::new(Line::from(spans)).render(
        Rect::new(area.x, area.y, field_width as u16, 1.min(area.height)),
        buf,
    );
    Paragraph::new(confirm)
        .style(Style::default().fg(theme.accent_color).add_modifier(Modifier::BOLD))
        .render(
            Rect::new(
                area.x + area.width.saturating_sub(confirm_width),
                area.y,
                confirm_width.min(area.width),
                1.min(area.height),
            ),
            buf,
        );
}

fn render_question(buf: &mut Buffer, area: Rect, vm: &ViewModel, theme: &Theme) {
    let style = Style::default()
        .fg(theme.accent_color)
        .add_modifier(Modifier::BOLD);
    for (i, line) in vm.question_lines.iter().enumerate() {
        let y = area.y + i as u16;
        if y >= area.bottom() {
            break;
        }
        buf.set_stringn(area.x, y, line, area.width as usize, style);
    }
}

fn render_reply(buf: &mut Buffer, vm: &ViewModel, panel: Rect, theme: &Theme) {
    let viewport = to_cells(vm.geometry.reply).intersection(panel);
    if viewport.is_empty() {
        return;
    }

    let style = match vm.status {
        StatusCaption::Reply => Style::default().fg(theme.text_color),
        StatusCaption::Error(_) => Style::default().fg(theme.error_color),
        StatusCaption::AwaitingInput | StatusCaption::Thinking => Style::default()
            .fg(theme.dim_color)
            .add_modifier(Modifier::ITALIC),
    };

    for line in &vm.reply_lines {
        let y = line.y.round();
        if y < f32::from(viewport.y) || y >= f32::from(viewport.bottom()) {
            continue;
        }
        buf.set_stringn(viewport.x, y as u16, &line.text, viewport.width as usize, style);
    }
}

fn render_footer(buf: &mut Buffer, area: Rect, vm: &ViewModel, input: &InputLine, theme: &Theme) {
    if area.is_empty() {
        return;
    }

    let dim = Style::default().fg(theme.dim_color);
    let hint = truncate_ellipsis(vm.hint, area.width as usize);
    buf.set_stringn(area.x, area.y, &hint, area.width as usize, dim);

    if vm.input_mode == InputMode::AwaitingKeyboard {
        let counter = format!("{}/{}", input.char_count(), input.options.max_length);
        let width = counter.width() as u16;
        if width + hint.width() as u16 + 1 <= area.width {
            buf.set_stringn(area.right() - width, area.y, &counter, width as usize, dim);
        }
    } else if vm.reply_line_count > 0 && vm.scrollbar.is_some() {
        let lines = format!("{} lines", vm.reply_line_count);
        let width = lines.width() as u16;
        if width + hint.width() as u16 + 1 <= area.width {
            buf.set_stringn(area.right() - width, area.y, &lines, width as usize, dim);
        }
    }
}
