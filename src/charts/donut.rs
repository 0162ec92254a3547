//! Spending per category as a donut

use std::f64::consts::PI;

use plotters::prelude::{Circle, Color, Polygon, RGBColor, WHITE};

use super::canvas::render_png;
use super::palette;
use super::{ChartImage, ChartKind, LegendEntry};
use crate::error::DashboardResult;
use crate::reports::Summary;

const SIDE: u32 = 600;
const OUTER_RADIUS: f64 = 260.0;
const INNER_RADIUS: i32 = 130;
/// Largest angle between two consecutive arc points, in degrees
const ARC_STEP: f64 = 2.0;
/// Wedges start at the top and run counter-clockwise
const START_ANGLE: f64 = 90.0;

/// Points of a pie wedge spanning `from`..`to` degrees, centre first
fn wedge(center: (i32, i32), radius: f64, from: f64, to: f64) -> Vec<(i32, i32)> {
    let steps = ((to - from) / ARC_STEP).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let theta = (from + (to - from) * i as f64 / steps as f64) * PI / 180.0;
        points.push((
            center.0 + (radius * theta.cos()).round() as i32,
            center.1 - (radius * theta.sin()).round() as i32,
        ));
    }
    points
}

/// Donut of spending per category, largest category first
///
/// Returns `None` when the view has no spending to divide.
pub fn category_donut(summary: &Summary) -> DashboardResult<Option<ChartImage>> {
    let total = summary.outbound_magnitude();
    if !summary.has_spending() || total.is_zero() {
        return Ok(None);
    }

    let center = (SIDE as i32 / 2, SIDE as i32 / 2);
    let mut spans = Vec::with_capacity(summary.categories.len());
    let mut angle = START_ANGLE;
    for category in &summary.categories {
        let sweep = category.total.as_f64() / total.as_f64() * 360.0;
        spans.push((angle, angle + sweep));
        angle += sweep;
    }

    let png = render_png(SIDE, SIDE, |root| {
        for (i, (from, to)) in spans.iter().enumerate() {
            if to - from <= 0.0 {
                continue;
            }
            let color = RGBColor::from(palette::category_color(i));
            root.draw(&Polygon::new(
                wedge(center, OUTER_RADIUS, *from, *to),
                color.filled(),
            ))?;
        }
        root.draw(&Circle::new(center, INNER_RADIUS, WHITE.filled()))?;
        Ok(())
    })?;

    let legend = summary
        .categories
        .iter()
        .enumerate()
        .map(|(i, category)| LegendEntry {
            label: category.category.clone(),
            color: palette::category_color(i),
            value: category.total,
            share: Some(category.percentage),
        })
        .collect();

    Ok(Some(ChartImage {
        kind: ChartKind::Categories,
        title: "Distribuição de Gastos".to_string(),
        width: SIDE,
        height: SIDE,
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

    fn spend(category: &str, cents: i64) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "gasto",
            category,
            Money::from_cents(cents),
            TransactionType::Outbound,
        )
    }

    #[test]
    fn test_wedge_geometry() {
        let points = wedge((100, 100), 50.0, 90.0, 180.0);
        assert_eq!(points[0], (100, 100));
        assert_eq!(points[1], (100, 50));
        assert_eq!(*points.last().unwrap(), (50, 100));
        // 90 degrees in steps of at most 2 degrees
        assert_eq!(points.len(), 47);
    }

    #[test]
    fn test_category_donut() {
        let summary = Summary::generate(&[spend("Moradia", -7500), spend("Lazer", -2500)]);
        let chart = category_donut(&summary).unwrap().unwrap();

        assert_eq!(chart.kind, ChartKind::Categories);
        assert_eq!(chart.title, "Distribuição de Gastos");
        assert_eq!(chart.legend.len(), 2);
        assert_eq!(chart.legend[0].label, "Moradia");
        assert_eq!(chart.legend[0].share, Some(75.0));
        assert_eq!(chart.legend[1].color, palette::category_color(1));

        let img = image::load_from_memory(&chart.png).unwrap();
        let c = SIDE / 2;
        // Hole in the middle
        assert_eq!(&img.get_pixel(c, c).0[..3], &[255, 255, 255]);
        // Left of the hole falls in the first (75%) wedge
        let first = palette::category_color(0);
        assert_eq!(&img.get_pixel(c - 195, c).0[..3], &[first.r, first.g, first.b]);
        // Upper right quadrant is the second (25%) wedge
        let second = palette::category_color(1);
        let px = img.get_pixel(c + 138, c - 138);
        assert_eq!(&px.0[..3], &[second.r, second.g, second.b]);
    }

    #[test]
    fn test_single_category_fills_ring() {
        let summary = Summary::generate(&[spend("Moradia", -1000)]);
        let chart = category_donut(&summary).unwrap().unwrap();
        assert_eq!(chart.legend[0].share, Some(100.0));
    }

    #[test]
    fn test_category_donut_without_spending() {
        assert!(category_donut(&Summary::generate(&[])).unwrap().is_none());
    }

    #[test]
    fn test_zero_spending_has_no_donut() {
        let summary = Summary::generate(&[spend("Moradia", 0)]);
        assert!(category_donut(&summary).unwrap().is_none());
    }
}
