//! Widget rendering for the dashboard view.
//!
//! Consumes the chart specs from `folio-core` as an external rendering
//! collaborator: nothing in here aggregates records, it only maps specs onto
//! ratatui widgets.

use folio_core::chart::{BarChartSpec, DonutSpec, LineChartSpec, TreemapLeaf, TreemapSpec, data_label};
use folio_core::palette::Rgba;
use folio_core::record::FieldKey;
use folio_core::summary::Summary;
use folio_core::table::columns;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::{self, border};
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Points};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Clear, Dataset, GraphType,
    Paragraph, Row, Table, Wrap,
};

use super::dashboard::{DashboardApp, InputMode, View};

fn tui_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Render one full frame.
pub fn draw(frame: &mut Frame<'_>, app: &mut DashboardApp) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    match app.view {
        View::Charts => draw_charts(frame, app, chunks[0]),
        View::Table => draw_table(frame, app, chunks[0]),
    }

    draw_status_bar(frame, app, chunks[1]);

    if app.input_mode == InputMode::FilterPopup {
        draw_filter_popup(frame, app, area);
    }
}

// ---------------------------------------------------------------------------
// Charts view
// ---------------------------------------------------------------------------

fn draw_charts(frame: &mut Frame<'_>, app: &DashboardApp, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Fill(1),
            Constraint::Fill(1),
        ])
        .split(area);

    draw_summary_tiles(frame, &app.model.summary, rows[0]);

    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    draw_line_chart(frame, &app.model.period_line, mid[0]);
    draw_bar_chart(frame, &app.model.entity_bar, mid[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[2]);
    draw_bar_chart(frame, &app.model.function_bar, bottom[0]);
    draw_donut(frame, &app.model.monetization_donut, bottom[1]);
    draw_treemap(frame, &app.model.outputs_treemap, bottom[2]);
}

fn draw_summary_tiles(frame: &mut Frame<'_>, summary: &Summary, area: Rect) {
    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    draw_tile(frame, tiles[0], " Projects ", summary.total.to_string());
    draw_tile(frame, tiles[1], " Paid ", format!("{}%", summary.paid_pct));
    draw_tile(
        frame,
        tiles[2],
        " Value Realized ",
        format!("{}%", summary.valuable_pct),
    );
}

fn draw_tile(frame: &mut Frame<'_>, area: Rect, title: &str, value: String) {
    let paragraph = Paragraph::new(Line::styled(
        value,
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

#[allow(clippy::cast_precision_loss)]
fn draw_line_chart(frame: &mut Frame<'_>, spec: &LineChartSpec, area: Rect) {
    let points: Vec<(f64, f64)> = spec
        .data
        .values
        .iter()
        .enumerate()
        .map(|(i, &value)| (i as f64, value as f64))
        .collect();

    let datasets = vec![
        Dataset::default()
            .name(spec.series_name)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(tui_color(spec.stroke)))
            .data(&points),
    ];

    let x_max = spec.data.len().saturating_sub(1).max(1) as f64;
    let y_max = spec.data.max_value().max(1);

    let mut x_labels: Vec<Span<'_>> = Vec::new();
    if let Some(first) = spec.data.labels.first() {
        x_labels.push(Span::raw(first.clone()));
    }
    if let Some(last) = spec.data.labels.last() {
        if spec.data.len() > 1 {
            x_labels.push(Span::raw(last.clone()));
        }
    }

    let tick_style = Style::default().fg(Color::DarkGray);
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Projects by Period "),
        )
        .x_axis(
            Axis::default()
                .style(tick_style)
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(tick_style)
                .bounds([0.0, y_max as f64])
                .labels(vec![Span::raw("0"), Span::raw(y_max.to_string())]),
        );
    frame.render_widget(chart, area);
}

fn draw_bar_chart(frame: &mut Frame<'_>, spec: &BarChartSpec, area: Rect) {
    let bars: Vec<Bar<'_>> = spec
        .data
        .entries()
        .zip(spec.colors.iter())
        .map(|((label, value), color)| {
            Bar::default()
                .value(value)
                .text_value(data_label(value).unwrap_or_default())
                .label(Line::from(label.to_string()))
                .style(Style::default().fg(tui_color(*color)))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", spec.title)),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

#[allow(clippy::cast_precision_loss)]
fn draw_donut(frame: &mut Frame<'_>, spec: &DonutSpec, area: Rect) {
    let total: u64 = spec.data.values.iter().sum();
    let label_style = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Monetization "),
        )
        .x_bounds([-1.3, 1.3])
        .y_bounds([-1.3, 1.3])
        .paint(|ctx| {
            if total == 0 {
                return;
            }

            let mut start = 0.0_f64;
            for ((_, value), color) in spec.data.entries().zip(spec.colors.iter()) {
                let sweep = value as f64 / total as f64 * std::f64::consts::TAU;
                let coords = ring_coords(start, sweep);
                ctx.draw(&Points {
                    coords: &coords,
                    color: tui_color(*color),
                });
                start += sweep;
            }

            // Values-only labels at the slice midpoints.
            let mut start = 0.0_f64;
            for (_, value) in spec.data.entries() {
                let sweep = value as f64 / total as f64 * std::f64::consts::TAU;
                if let Some(text) = data_label(value) {
                    let mid = start + sweep / 2.0;
                    ctx.print(mid.cos() * 0.85, mid.sin() * 0.85, Line::styled(text, label_style));
                }
                start += sweep;
            }
        });
    frame.render_widget(canvas, area);
}

/// Sample a ring segment as canvas points between the inner and outer radii.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn ring_coords(start: f64, sweep: f64) -> Vec<(f64, f64)> {
    const RADII: [f64; 4] = [0.7, 0.8, 0.9, 1.0];
    let steps = ((sweep / 0.02).ceil() as usize).max(1);
    let mut coords = Vec::with_capacity((steps + 1) * RADII.len());
    for i in 0..=steps {
        let angle = start + sweep * (i as f64) / (steps as f64);
        for radius in RADII {
            coords.push((angle.cos() * radius, angle.sin() * radius));
        }
    }
    coords
}

fn draw_treemap(frame: &mut Frame<'_>, spec: &TreemapSpec, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Outputs ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let leaves: Vec<&TreemapLeaf> = spec.leaves.iter().filter(|leaf| leaf.weight > 0).collect();
    if leaves.is_empty() {
        return;
    }

    let total: u64 = leaves.iter().map(|leaf| leaf.weight).sum();
    let (top, bottom) = split_rows(&leaves, total);

    if bottom.is_empty() {
        draw_leaf_row(frame, &top, inner);
        return;
    }

    let row_weight = |row: &[&TreemapLeaf]| -> u16 {
        let sum: u64 = row.iter().map(|leaf| leaf.weight).sum();
        u16::try_from(sum).unwrap_or(u16::MAX)
    };
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(row_weight(&top)),
            Constraint::Fill(row_weight(&bottom)),
        ])
        .split(inner);
    draw_leaf_row(frame, &top, row_areas[0]);
    draw_leaf_row(frame, &bottom, row_areas[1]);
}

/// Split leaves into two weight-balanced rows. Fewer than three leaves stay
/// in a single row.
fn split_rows<'a>(
    leaves: &[&'a TreemapLeaf],
    total: u64,
) -> (Vec<&'a TreemapLeaf>, Vec<&'a TreemapLeaf>) {
    if leaves.len() <= 2 {
        return (leaves.to_vec(), Vec::new());
    }

    let mut cumulative = 0_u64;
    let mut split = leaves.len() - 1;
    for (i, leaf) in leaves.iter().enumerate() {
        cumulative += leaf.weight;
        if cumulative * 2 >= total {
            split = (i + 1).min(leaves.len() - 1);
            break;
        }
    }
    (leaves[..split].to_vec(), leaves[split..].to_vec())
}

fn draw_leaf_row(frame: &mut Frame<'_>, leaves: &[&TreemapLeaf], area: Rect) {
    let constraints: Vec<Constraint> = leaves
        .iter()
        .map(|leaf| Constraint::Fill(u16::try_from(leaf.weight).unwrap_or(u16::MAX)))
        .collect();
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (leaf, cell) in leaves.iter().zip(cells.iter()) {
        let style = Style::default()
            .bg(tui_color(leaf.color))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        // Group label, suppressed when the tile cannot fit it.
        let text = if usize::from(cell.width) >= leaf.group.chars().count() {
            leaf.group.clone()
        } else {
            String::new()
        };
        frame.render_widget(
            Paragraph::new(text).style(style).wrap(Wrap { trim: true }),
            *cell,
        );
    }
}

// ---------------------------------------------------------------------------
// Table view
// ---------------------------------------------------------------------------

fn draw_table(frame: &mut Frame<'_>, app: &mut DashboardApp, area: Rect) {
    let widths: Vec<Constraint> = columns()
        .iter()
        .map(|column| {
            column
                .width
                .map_or(Constraint::Min(column.min_width), Constraint::Length)
        })
        .collect();

    let header = Row::new(
        columns()
            .iter()
            .map(|column| Cell::from(column.field.as_str()))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row<'_>> = app
        .visible_rows
        .iter()
        .map(|record| {
            Row::new(
                FieldKey::ALL
                    .into_iter()
                    .map(|field| Cell::from(field.value(record).to_string()))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let filters = app.active_filters();
    let title = if filters.is_empty() {
        format!(" catalogue — {} records ", app.visible_rows.len())
    } else {
        format!(
            " catalogue — {} of {} records  [{} active filters] ",
            app.visible_rows.len(),
            app.model.rows.len(),
            filters.len()
        )
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .title(title),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(" ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

// ---------------------------------------------------------------------------
// Filter popup and status bar
// ---------------------------------------------------------------------------

fn draw_filter_popup(frame: &mut Frame<'_>, app: &DashboardApp, area: Rect) {
    let popup_w: u16 = 48;
    let popup_h: u16 = 8;
    let x = area.x + area.width.saturating_sub(popup_w) / 2;
    let y = area.y + area.height.saturating_sub(popup_h) / 2;
    let popup_area = Rect {
        x,
        y,
        width: popup_w.min(area.width),
        height: popup_h.min(area.height),
    };

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filter ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(block, popup_area);

    let inner = Rect {
        x: popup_area.x + 1,
        y: popup_area.y + 1,
        width: popup_area.width.saturating_sub(2),
        height: popup_area.height.saturating_sub(2),
    };

    let focused_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let normal_style = Style::default().fg(Color::White);
    let dim_style = Style::default().fg(Color::DarkGray);
    let val_style = Style::default().fg(Color::Green);

    for (i, control) in app.controls.iter().enumerate() {
        let row_y = inner.y + u16::try_from(i).unwrap_or(u16::MAX);
        if row_y >= inner.y + inner.height {
            break;
        }
        let row_area = Rect {
            y: row_y,
            height: 1,
            ..inner
        };

        let is_focused = app.focused_control == i;
        let label_style = if is_focused { focused_style } else { normal_style };
        let prefix = if is_focused { "► " } else { "  " };

        let val_display = control.selection().unwrap_or("(any)");
        let line = Line::from(vec![
            Span::styled(prefix.to_string(), focused_style),
            Span::styled(format!("{:<13}", control.field.as_str()), label_style),
            Span::styled(": ".to_string(), dim_style),
            Span::styled(val_display.to_string(), val_style),
            Span::styled("  ←/→ cycle".to_string(), dim_style),
        ]);
        frame.render_widget(Paragraph::new(line), row_area);
    }

    let hint_y = inner.y + inner.height.saturating_sub(1);
    let hint = Line::from(vec![
        Span::styled("c", focused_style),
        Span::styled(" clear  ", dim_style),
        Span::styled("Enter", focused_style),
        Span::styled(" done", dim_style),
    ]);
    frame.render_widget(
        Paragraph::new(hint),
        Rect {
            y: hint_y,
            height: 1,
            ..inner
        },
    );
}

fn draw_status_bar(frame: &mut Frame<'_>, app: &DashboardApp, area: Rect) {
    if let Some(ref status) = app.status {
        let line = Line::from(vec![Span::styled(
            status.clone(),
            Style::default().fg(Color::Cyan),
        )]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Left), area);
        return;
    }

    let key_style = Style::default().fg(Color::Cyan);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![
        Span::styled("q", key_style),
        Span::styled(" quit  ", dim_style),
        Span::styled("Tab", key_style),
        Span::styled(" view  ", dim_style),
        Span::styled("r", key_style),
        Span::styled(" reload", dim_style),
    ];
    if app.view == View::Table {
        spans.push(Span::styled("  j/k", key_style));
        spans.push(Span::styled(" move  ", dim_style));
        spans.push(Span::styled("f", key_style));
        spans.push(Span::styled(" filter", dim_style));
        let active = app.active_filters().len();
        if active > 0 {
            spans.push(Span::styled(
                format!("  [{active} active filters]"),
                Style::default().fg(Color::Yellow),
            ));
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Left),
        area,
    );
}
