//! Layout of the financial report

use tracing::{debug, warn};

use super::writer::{Cell, FontStyle, PageWriter, CONTENT_WIDTH, MARGIN};
use super::ReportInput;
use crate::charts::{palette, ChartImage, LegendEntry};
use crate::display::report::{format_date, truncate};
use crate::error::DashboardResult;
use crate::models::Transaction;

const TITLE_SIZE: f32 = 16.0;
const HEADING_SIZE: f32 = 12.0;
const BODY_SIZE: f32 = 10.0;
const TABLE_SIZE: f32 = 9.0;

/// Largest chart box: 400 x 250 pt
const CHART_MAX_WIDTH: f32 = 400.0 * 25.4 / 72.0;
const CHART_MAX_HEIGHT: f32 = 250.0 * 25.4 / 72.0;
/// Legend lines printed under a chart before the rest are summarized
const LEGEND_LIMIT: usize = 15;

const SUMMARY_WIDTHS: [f32; 2] = [60.0, 60.0];
const DETAIL_HEADER: [&str; 5] = ["Data", "Descrição", "Categoria", "Tipo", "Valor"];
const DETAIL_WIDTHS: [f32; 5] = [24.0, 62.0, 42.0, 20.0, 32.0];

pub(super) fn build(input: &ReportInput<'_>) -> DashboardResult<Vec<u8>> {
    let title = format!("Relatório Financeiro — {}", input.label);
    let mut writer = PageWriter::new(&title)?;

    writer.text(&title, TITLE_SIZE, FontStyle::Bold, palette::TEXT);
    writer.advance(4.0);

    summary_table(&mut writer, input);
    writer.advance(6.0);

    for chart in input.charts.iter().flatten() {
        chart_block(&mut writer, chart, input.options.currency);
        writer.advance(6.0);
    }

    detail_table(&mut writer, input);
    writer.advance(6.0);

    closing_block(&mut writer, input);

    debug!(
        "Report for '{}' laid out on {} pages",
        input.label,
        writer.page_count()
    );
    writer.finish()
}

fn summary_table(writer: &mut PageWriter, input: &ReportInput<'_>) {
    let currency = input.options.currency;
    let rows = [
        ("Entradas", input.summary.inbound),
        ("Saídas", input.summary.outbound_magnitude()),
        ("Saldo", input.summary.balance),
    ];

    writer.ensure_space(PageWriter::row_height(BODY_SIZE) * rows.len() as f32);
    for (i, (label, amount)) in rows.iter().enumerate() {
        let fill = (i == 0).then_some(palette::TABLE_HEADER);
        writer.table_row(
            &SUMMARY_WIDTHS,
            &[
                Cell::new(*label, palette::TEXT),
                Cell::new(amount.format_currency(currency), palette::TEXT),
            ],
            BODY_SIZE,
            FontStyle::Regular,
            fill,
            palette::TABLE_GRID,
        );
    }
}

fn chart_block(writer: &mut PageWriter, chart: &ChartImage, currency: &str) {
    let name = chart.kind.file_stem();
    let max_width = CHART_MAX_WIDTH.min(CONTENT_WIDTH);
    if !writer.image(&chart.png, max_width, CHART_MAX_HEIGHT, name) {
        return;
    }

    writer.advance(2.0);
    writer.text(&chart.title, HEADING_SIZE, FontStyle::Bold, palette::TEXT);

    for entry in chart.legend.iter().take(LEGEND_LIMIT) {
        legend_line(writer, entry, currency);
    }
    if chart.legend.len() > LEGEND_LIMIT {
        writer.text(
            &format!("+{} outros", chart.legend.len() - LEGEND_LIMIT),
            TABLE_SIZE,
            FontStyle::Regular,
            palette::TEXT,
        );
    }
}

fn legend_line(writer: &mut PageWriter, entry: &LegendEntry, currency: &str) {
    let height = PageWriter::line_height(TABLE_SIZE);
    writer.ensure_space(height);

    let mut text = format!(
        "{}: {}",
        truncate(&entry.label, 50),
        entry.value.format_currency(currency)
    );
    if let Some(share) = entry.share {
        text.push_str(&format!(" ({:.1}%)", share));
    }

    let top = writer.cursor();
    writer.rect(MARGIN, top + 0.8, 3.0, 3.0, Some(entry.color), None);
    writer.text_at(
        &text,
        TABLE_SIZE,
        FontStyle::Regular,
        palette::TEXT,
        MARGIN + 5.0,
        top + 3.5,
    );
    writer.advance(height);
}

fn detail_header(writer: &mut PageWriter) {
    let cells: Vec<Cell> = DETAIL_HEADER
        .iter()
        .map(|title| Cell::new(*title, palette::TEXT))
        .collect();
    writer.table_row(
        &DETAIL_WIDTHS,
        &cells,
        TABLE_SIZE,
        FontStyle::Bold,
        Some(palette::TABLE_HEADER),
        palette::TABLE_GRID,
    );
}

fn detail_row(txn: &Transaction, input: &ReportInput<'_>) -> Vec<Cell> {
    let options = &input.options;
    let amount_color = if txn.is_outbound() {
        palette::NEGATIVE
    } else {
        palette::POSITIVE
    };
    vec![
        Cell::new(format_date(txn.date(), options.date_format), palette::TEXT),
        Cell::new(
            truncate(txn.description(), options.description_max_len),
            palette::TEXT,
        ),
        Cell::new(txn.category(), palette::TEXT),
        Cell::new(txn.kind().as_str(), palette::TEXT),
        Cell::new(txn.amount().format_currency(options.currency), amount_color),
    ]
}

fn detail_table(writer: &mut PageWriter, input: &ReportInput<'_>) {
    let row_height = PageWriter::row_height(TABLE_SIZE);

    writer.text("Transações", HEADING_SIZE, FontStyle::Bold, palette::TEXT);
    writer.ensure_space(row_height * 2.0);
    detail_header(writer);

    for txn in input.records {
        if writer.ensure_space(row_height) {
            detail_header(writer);
        }
        writer.table_row(
            &DETAIL_WIDTHS,
            &detail_row(txn, input),
            TABLE_SIZE,
            FontStyle::Regular,
            None,
            palette::TABLE_GRID,
        );
    }
}

fn closing_block(writer: &mut PageWriter, input: &ReportInput<'_>) {
    if let Some(bytes) = input.trailing_image {
        if writer.image(bytes, CONTENT_WIDTH, CHART_MAX_HEIGHT, "trailing image") {
            return;
        }
        warn!("Falling back to a text summary at the end of the report");
    }

    let currency = input.options.currency;
    let summary = input.summary;
    writer.text("Resumo", HEADING_SIZE, FontStyle::Bold, palette::TEXT);
    for line in [
        format!(
            "{} transações no período {}.",
            input.records.len(),
            input.label
        ),
        format!("Entradas: {}", summary.inbound.format_currency(currency)),
        format!(
            "Saídas: {}",
            summary.outbound_magnitude().format_currency(currency)
        ),
        format!("Saldo: {}", summary.balance.format_currency(currency)),
    ] {
        writer.text(&line, BODY_SIZE, FontStyle::Regular, palette::TEXT);
    }
}
