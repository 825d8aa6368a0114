//! UI rendering for TUI.

use crate::app::{App, AppMode, EditField, FormField};
use atelier_core::GenerationKind;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    if app.mode == AppMode::Locked {
        draw_gate(f, app);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(36)])
        .split(chunks[1]);

    match app.mode {
        AppMode::Form => draw_form(f, app, columns[0]),
        AppMode::Viewer => draw_viewer(f, app, columns[0]),
        AppMode::Locked => unreachable!("gate drawn above"),
    }
    draw_history(f, app, columns[1]);
    draw_status_bar(f, app, chunks[2]);

    if app.pending {
        draw_busy_overlay(f);
    }
    if let Some(message) = &app.error {
        draw_error_modal(f, message);
    }
}

/// Draw the header.
fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let mut title = String::from("Leonardo — by Lake and Land Studio");
    if !app.api_configured {
        title.push_str("  [API key missing: generation disabled]");
    }
    let style = if app.api_configured {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    };
    let header = Paragraph::new(title)
        .block(Block::default().borders(Borders::ALL))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the status bar with help text.
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode {
        AppMode::Locked => "Enter: unlock | Esc: quit",
        AppMode::Form => {
            "Tab/↑↓: field | ←→: value | Enter: generate | PgUp/PgDn: history | Ctrl+O: view | Esc: quit"
        }
        AppMode::Viewer => "Tab: edit field | Enter: re-generate | PgUp/PgDn: history | Esc: back",
    };
    let status_text = format!("{} | {}", app.status_message, help_text);
    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

/// Draw the passphrase gate.
fn draw_gate(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(8),
            Constraint::Min(0),
        ])
        .split(f.area());

    let masked = "*".repeat(app.passphrase_input.len());
    let mut lines = vec![
        Line::from(Span::styled(
            "Leonardo — by Lake and Land Studio",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Password: {masked}_")),
    ];
    if let Some(error) = &app.gate_error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(Color::Red),
        )));
    }

    let gate = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Enter Studio "))
        .alignment(Alignment::Center);
    f.render_widget(gate, chunks[1]);
}

fn field_line<'a>(app: &App, field: FormField, label: &'a str, value: String) -> Line<'a> {
    let style = if app.form.focused == field {
        Style::default().fg(Color::Black).bg(Color::Magenta)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{label:<14}"), Style::default().fg(Color::Yellow)),
        Span::styled(value, style),
    ])
}

/// Draw the generation form.
fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let form = &app.form;
    let mut lines = vec![
        field_line(app, FormField::SourcePath, "Source image", format!("{}_", form.source_path)),
        field_line(app, FormField::Prompt, "Prompt", format!("{}_", form.prompt)),
        field_line(app, FormField::Kind, "Generate", form.kind.to_string()),
    ];

    match form.kind {
        GenerationKind::Image => {
            lines.push(field_line(app, FormField::ImageStyle, "Style", form.image_style.to_string()));
            lines.push(field_line(app, FormField::Creativity, "Creativity", format!("{:>3} / 100", form.creativity)));
            lines.push(field_line(app, FormField::StyleStrength, "Strength", format!("{:>3} / 100", form.style_strength)));
        }
        GenerationKind::Video => {
            lines.push(field_line(app, FormField::VideoStyle, "Style", form.video_style.to_string()));
            lines.push(field_line(app, FormField::Duration, "Duration", form.duration.label().to_string()));
        }
    }
    lines.push(field_line(app, FormField::AspectRatio, "Aspect ratio", form.aspect_ratio.to_string()));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Generation "))
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

/// Draw the result viewer with edit prompts.
fn draw_viewer(f: &mut Frame, app: &App, area: Rect) {
    let Some(asset) = app.store.active() else {
        let empty = Paragraph::new("No asset selected")
            .block(Block::default().borders(Borders::ALL).title(" Result "));
        f.render_widget(empty, area);
        return;
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(6)])
        .split(area);

    let result = asset.result();
    let lines = vec![
        Line::from(format!("{}  ·  {}", asset.label(), asset.aspect_ratio())),
        Line::from(format!("Created: {}", asset.created_at().format("%Y-%m-%d %H:%M:%S UTC"))),
        Line::from(format!("Result: {} ({} bytes)", result.mime(), result.data().len())),
        Line::from(""),
        Line::from(Span::styled("Prompt", Style::default().fg(Color::Yellow))),
        Line::from(asset.prompt().to_string()),
    ];
    let detail = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Result "))
        .wrap(Wrap { trim: false });
    f.render_widget(detail, sections[0]);

    let focus_style = |field: EditField| {
        if app.edit.focused == Some(field) {
            Style::default().fg(Color::Black).bg(Color::Magenta)
        } else {
            Style::default()
        }
    };
    let edit_lines = vec![
        Line::from(vec![
            Span::styled("Add:    ", Style::default().fg(Color::Yellow)),
            Span::styled(format!("{}_", app.edit.positive), focus_style(EditField::Positive)),
        ]),
        Line::from(vec![
            Span::styled("Remove: ", Style::default().fg(Color::Yellow)),
            Span::styled(format!("{}_", app.edit.negative), focus_style(EditField::Negative)),
        ]),
    ];
    let edit = Paragraph::new(edit_lines)
        .block(Block::default().borders(Borders::ALL).title(" Edit "));
    f.render_widget(edit, sections[1]);
}

/// Draw the session history panel.
fn draw_history(f: &mut Frame, app: &App, area: Rect) {
    let active_id = app.store.active_id();
    let items: Vec<ListItem> = app
        .store
        .assets()
        .iter()
        .map(|asset| {
            let marker = if Some(asset.id()) == active_id { "▶ " } else { "  " };
            let line = format!(
                "{marker}{}  {}",
                asset.label(),
                asset.created_at().format("%H:%M:%S")
            );
            let style = if Some(asset.id()) == active_id {
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" History ({}) ", app.store.len())),
    );
    f.render_widget(list, area);
}

/// Draw the in-flight overlay.
fn draw_busy_overlay(f: &mut Frame) {
    let area = centered_rect(40, 5, f.area());
    f.render_widget(Clear, area);
    let overlay = Paragraph::new("Generating... this can take a few minutes")
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Magenta))
        .alignment(Alignment::Center);
    f.render_widget(overlay, area);
}

/// Draw the error modal.
fn draw_error_modal(f: &mut Frame, message: &str) {
    let area = centered_rect(60, 7, f.area());
    f.render_widget(Clear, area);
    let modal = Paragraph::new(message)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Error (any key to dismiss) "),
        )
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);
    f.render_widget(modal, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
