//! Bar charts: inbound vs outbound, and individual expenses

use plotters::prelude::{Color, Rectangle, RGBColor};

use super::canvas::{render_png, MAX_SIDE};
use super::palette::{self, Rgb};
use super::{ChartImage, ChartKind, LegendEntry};
use crate::error::DashboardResult;
use crate::reports::{ExpenseList, Summary};

const SUMMARY_WIDTH: u32 = 800;
const SUMMARY_HEIGHT: u32 = 400;
const MARGIN: i32 = 30;

const EXPENSES_WIDTH: u32 = 1000;
const EXPENSE_ROW: u32 = 28;
const EXPENSES_MAX_HEIGHT: u32 = 2000;

/// Length in pixels of a bar for `value` on an axis where `max` spans `span` pixels
fn scaled(value: f64, max: f64, span: i32) -> i32 {
    if max <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / max) * f64::from(span)).round() as i32
}

fn fill(color: Rgb) -> plotters::style::ShapeStyle {
    RGBColor::from(color).filled()
}

/// Two vertical bars: total inbound and total outbound magnitude
///
/// With both totals at zero only the axis is drawn.
pub fn summary_bar(summary: &Summary, label: &str) -> DashboardResult<ChartImage> {
    let inbound = summary.inbound.as_f64();
    let outbound = summary.outbound_magnitude().as_f64();
    let max = inbound.max(outbound);

    let width = SUMMARY_WIDTH as i32;
    let height = SUMMARY_HEIGHT as i32;
    let baseline = height - MARGIN;
    let span = baseline - MARGIN;
    let bar_width = width / 5;
    let centers = [width / 3, 2 * width / 3];
    let bars = [(inbound, palette::INBOUND), (outbound, palette::OUTBOUND)];

    let png = render_png(SUMMARY_WIDTH, SUMMARY_HEIGHT, |root| {
        // Quarter guides behind the bars
        for step in 1..=4 {
            let y = baseline - span * step / 4;
            root.draw(&Rectangle::new(
                [(MARGIN, y), (width - MARGIN, y + 1)],
                fill(palette::GUIDE),
            ))?;
        }

        for (center, (value, color)) in centers.iter().zip(bars) {
            let bar_height = scaled(value, max, span);
            if bar_height > 0 {
                root.draw(&Rectangle::new(
                    [
                        (center - bar_width / 2, baseline - bar_height),
                        (center + bar_width / 2, baseline),
                    ],
                    fill(color),
                ))?;
            }
        }

        root.draw(&Rectangle::new(
            [(MARGIN, baseline), (width - MARGIN, baseline + 2)],
            fill(palette::AXIS),
        ))?;
        Ok(())
    })?;

    Ok(ChartImage {
        kind: ChartKind::Summary,
        title: format!("Resumo Financeiro — {}", label),
        width: SUMMARY_WIDTH,
        height: SUMMARY_HEIGHT,
        png,
        legend: vec![
            LegendEntry {
                label: "Entradas".to_string(),
                color: palette::INBOUND,
                value: summary.inbound,
                share: None,
            },
            LegendEntry {
                label: "Saídas".to_string(),
                color: palette::OUTBOUND,
                value: summary.outbound_magnitude(),
                share: None,
            },
        ],
    })
}

/// One horizontal bar per expense, largest at the top
///
/// Returns `None` when there are no expenses. Rows shrink as the list grows
/// so the image never grows past `EXPENSES_MAX_HEIGHT` plus margins.
pub fn expense_bars(expenses: &ExpenseList) -> DashboardResult<Option<ChartImage>> {
    if expenses.is_empty() {
        return Ok(None);
    }

    let count = expenses.len() as f64;
    let row = f64::from(EXPENSE_ROW).min(f64::from(EXPENSES_MAX_HEIGHT) / count);
    let height = ((row * count).ceil() as u32 + 2 * MARGIN as u32).min(MAX_SIDE);
    let max = expenses.largest().as_f64();

    let thickness = ((row * 2.0 / 3.0).round() as i32).max(1);
    let left = MARGIN;
    let span = EXPENSES_WIDTH as i32 - 2 * MARGIN;

    let png = render_png(EXPENSES_WIDTH, height, |root| {
        for (i, txn) in expenses.items.iter().enumerate() {
            let top = MARGIN + (i as f64 * row) as i32;
            let length = scaled(txn.amount().abs().as_f64(), max, span);
            if length > 0 {
                root.draw(&Rectangle::new(
                    [(left, top), (left + length, top + thickness)],
                    fill(palette::OUTBOUND),
                ))?;
            }
        }

        root.draw(&Rectangle::new(
            [(left - 2, MARGIN), (left, height as i32 - MARGIN)],
            fill(palette::AXIS),
        ))?;
        Ok(())
    })?;

    let legend = expenses
        .items
        .iter()
        .map(|txn| LegendEntry {
            label: txn.description().to_string(),
            color: palette::OUTBOUND,
            value: txn.amount().abs(),
            share: None,
        })
        .collect();

    Ok(Some(ChartImage {
        kind: ChartKind::Expenses,
        title: "Gastos Individuais".to_string(),
        width: EXPENSES_WIDTH,
        height,
        png,
        legend,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionType};
    use chrono::NaiveDate;
    use image::GenericImageView;

    fn outbound(desc: &str, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
            desc,
            "cat",
            Money::from_cents(cents),
            TransactionType::Outbound,
        )
    }

    #[test]
    fn test_scaled() {
        assert_eq!(scaled(50.0, 100.0, 200), 100);
        assert_eq!(scaled(0.0, 100.0, 200), 0);
        assert_eq!(scaled(10.0, 0.0, 200), 0);
    }

    #[test]
    fn test_summary_bar() {
        let records = vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                "Salário",
                "Salário",
                Money::from_cents(300000),
                TransactionType::Inbound,
            ),
            outbound("Mercado", -25050),
        ];
        let chart = summary_bar(&Summary::generate(&records), "2024-01").unwrap();

        assert_eq!(chart.kind, ChartKind::Summary);
        assert_eq!(chart.title, "Resumo Financeiro — 2024-01");
        assert_eq!(chart.legend.len(), 2);
        assert_eq!(chart.legend[1].value, Money::from_cents(25050));

        let img = image::load_from_memory(&chart.png).unwrap();
        assert_eq!(img.dimensions(), (SUMMARY_WIDTH, SUMMARY_HEIGHT));
        // Middle of the inbound bar is painted in the inbound colour
        let px = img.get_pixel(SUMMARY_WIDTH / 3, SUMMARY_HEIGHT / 2);
        assert_eq!(&px.0[..3], &[0xF4, 0x8F, 0xB1]);
    }

    #[test]
    fn test_summary_bar_with_zero_totals() {
        let chart = summary_bar(&Summary::generate(&[]), "Todos os meses").unwrap();
        assert!(!chart.png.is_empty());
        assert!(chart.legend.iter().all(|l| l.value.is_zero()));
    }

    #[test]
    fn test_expense_bars() {
        let expenses = ExpenseList::from_records(&[
            outbound("Café", -500),
            outbound("Aluguel", -120000),
        ]);
        let chart = expense_bars(&expenses).unwrap().unwrap();
        assert_eq!(chart.kind, ChartKind::Expenses);
        assert_eq!(chart.height, 2 * EXPENSE_ROW + 2 * MARGIN as u32);
        assert_eq!(chart.legend[0].label, "Aluguel");
        assert_eq!(chart.legend[1].value, Money::from_cents(500));
    }

    #[test]
    fn test_expense_bars_many_rows_stay_bounded() {
        let records: Vec<Transaction> = (1..=3000).map(|i| outbound("x", -i)).collect();
        let chart = expense_bars(&ExpenseList::from_records(&records))
            .unwrap()
            .unwrap();
        assert!(chart.height <= EXPENSES_MAX_HEIGHT + 2 * MARGIN as u32);
        assert_eq!(chart.legend.len(), 3000);
    }

    #[test]
    fn test_expense_bars_empty() {
        assert!(expense_bars(&ExpenseList::default()).unwrap().is_none());
    }
}
