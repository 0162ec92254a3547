//! PDF report export
//!
//! Builds an A4 report for one view of the ledger: title, summary table,
//! charts with their legends, the transaction table and a closing image or
//! text summary. The document is produced in memory; the caller decides
//! where the bytes go.

mod report;
mod writer;

use std::path::Path;

use tracing::{debug, warn};

use crate::charts::ChartImage;
use crate::error::DashboardResult;
use crate::models::Transaction;
use crate::reports::Summary;

/// Presentation settings for the report
#[derive(Debug, Clone, Copy)]
pub struct ReportOptions<'a> {
    pub currency: &'a str,
    pub date_format: &'a str,
    pub description_max_len: usize,
}

impl Default for ReportOptions<'_> {
    fn default() -> Self {
        Self {
            currency: "R$",
            date_format: "%d/%m/%Y",
            description_max_len: 30,
        }
    }
}

/// Everything the report shows
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub label: &'a str,
    pub records: &'a [Transaction],
    pub summary: &'a Summary,
    /// Chart slots in report order; empty slots are skipped
    pub charts: &'a [Option<ChartImage>],
    /// Encoded image closing the report, if one is available
    pub trailing_image: Option<&'a [u8]>,
    pub options: ReportOptions<'a>,
}

/// Lay out the report and return the PDF bytes
///
/// Images that cannot be embedded are skipped with a warning; only a
/// failure to produce the document itself is an error.
pub fn build_report(input: &ReportInput<'_>) -> DashboardResult<Vec<u8>> {
    report::build(input)
}

/// Read the closing image from disk
///
/// A missing or unreadable file yields `None`, which makes the report end
/// with a text summary instead.
pub fn load_trailing_image(path: &Path) -> Option<Vec<u8>> {
    if !path.exists() {
        debug!("No trailing image at {}", path.display());
        return None;
    }
    match std::fs::read(path) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!("Could not read trailing image {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{palette, render_all, Rgb};
    use crate::models::{Money, TransactionType};
    use crate::reports::ExpenseList;
    use chrono::NaiveDate;
    use printpdf::lopdf::content::Content;
    use printpdf::lopdf::{Document, Object};
    use tempfile::TempDir;

    /// Text strings and fill colours drawn on one page
    #[derive(Default)]
    struct PageContent {
        texts: Vec<String>,
        fills: Vec<(f32, f32, f32)>,
    }

    impl PageContent {
        fn has_text(&self, text: &str) -> bool {
            self.texts.iter().any(|t| t == text)
        }

        fn has_fill(&self, color: Rgb) -> bool {
            let (r, g, b) = color.to_unit();
            self.fills.iter().any(|(fr, fg, fb)| {
                (fr - r).abs() < 1e-3 && (fg - g).abs() < 1e-3 && (fb - b).abs() < 1e-3
            })
        }
    }

    fn string_of(obj: &Object) -> Option<String> {
        match obj {
            Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }

    fn read_pages(pdf: &[u8]) -> Vec<PageContent> {
        assert!(pdf.starts_with(b"%PDF"));
        let doc = Document::load_mem(pdf).unwrap();
        doc.get_pages()
            .values()
            .map(|id| {
                let data = doc.get_page_content(*id).unwrap();
                let mut page = PageContent::default();
                for op in Content::decode(&data).unwrap().operations {
                    match op.operator.as_str() {
                        "Tj" => page.texts.extend(op.operands.iter().filter_map(string_of)),
                        "TJ" => {
                            if let Some(Object::Array(items)) = op.operands.first() {
                                page.texts.push(items.iter().filter_map(string_of).collect());
                            }
                        }
                        "rg" => {
                            let c: Vec<f32> =
                                op.operands.iter().filter_map(|o| o.as_float().ok()).collect();
                            if let [r, g, b] = c[..] {
                                page.fills.push((r, g, b));
                            }
                        }
                        _ => {}
                    }
                }
                page
            })
            .collect()
    }

    fn all_texts(pages: &[PageContent]) -> Vec<String> {
        pages.iter().flat_map(|p| p.texts.iter().cloned()).collect()
    }

    fn records() -> Vec<Transaction> {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        vec![
            Transaction::new(
                day(1),
                "Salário",
                "Salário",
                Money::from_cents(300000),
                TransactionType::Inbound,
            ),
            Transaction::new(
                day(2),
                "Supermercado",
                "Alimentação",
                Money::from_cents(-25050),
                TransactionType::Outbound,
            ),
            Transaction::new(
                day(5),
                "Aluguel de janeiro com uma descrição bem comprida",
                "Moradia",
                Money::from_cents(-120000),
                TransactionType::Outbound,
            ),
        ]
    }

    fn input<'a>(
        records: &'a [Transaction],
        summary: &'a Summary,
        charts: &'a [Option<ChartImage>],
    ) -> ReportInput<'a> {
        ReportInput {
            label: "2024-01",
            records,
            summary,
            charts,
            trailing_image: None,
            options: ReportOptions::default(),
        }
    }

    #[test]
    fn test_build_report_with_charts() {
        let records = records();
        let summary = Summary::generate(&records);
        let charts = render_all(&summary, &ExpenseList::from_records(&records), "2024-01");

        let pdf = build_report(&input(&records, &summary, &charts)).unwrap();
        let pages = read_pages(&pdf);
        let texts = all_texts(&pages);

        // Summary rows
        assert!(texts.iter().any(|t| t == "Entradas"));
        assert!(texts.iter().any(|t| t == "Saldo"));
        assert!(texts.iter().any(|t| t == "R$ 3,000.00"));
        // Chart titles and the expense legend
        assert!(texts.iter().any(|t| t.starts_with("Resumo Financeiro")));
        assert!(texts.iter().any(|t| t == "Gastos Individuais"));
        assert!(texts.iter().any(|t| t == "Supermercado: R$ 250.50"));
        // Long descriptions are cut to description_max_len
        assert!(texts.iter().any(|t| t == "Aluguel de janeiro com uma..."));
        assert!(!texts.iter().any(|t| t.contains("comprida")));
        // Amounts are red for money out and green for money in
        assert!(pages.iter().any(|p| p.has_fill(palette::NEGATIVE)));
        assert!(pages.iter().any(|p| p.has_fill(palette::POSITIVE)));
    }

    #[test]
    fn test_amount_colors_follow_direction() {
        let records: Vec<Transaction> = records().into_iter().skip(1).collect();
        let summary = Summary::generate(&records);

        let pdf = build_report(&input(&records, &summary, &[])).unwrap();
        let pages = read_pages(&pdf);
        assert!(pages.iter().any(|p| p.has_fill(palette::NEGATIVE)));
        assert!(!pages.iter().any(|p| p.has_fill(palette::POSITIVE)));
    }

    #[test]
    fn test_corrupt_chart_is_skipped() {
        let records = records();
        let summary = Summary::generate(&records);
        let mut charts = render_all(&summary, &ExpenseList::from_records(&records), "2024-01");
        if let Some(chart) = charts[0].as_mut() {
            chart.png = vec![0, 1, 2, 3];
        }

        let pdf = build_report(&input(&records, &summary, &charts)).unwrap();
        let texts = all_texts(&read_pages(&pdf));
        // The broken chart leaves out its title and legend, the others stay
        assert!(!texts.iter().any(|t| t.starts_with("Resumo Financeiro")));
        assert!(texts.iter().any(|t| t == "Gastos Individuais"));
        assert!(texts.iter().any(|t| t == "Data"));
    }

    #[test]
    fn test_empty_view_builds() {
        let summary = Summary::generate(&[]);
        let charts = render_all(&summary, &ExpenseList::default(), "2023-12");

        let pdf = build_report(&input(&[], &summary, &charts)).unwrap();
        let pages = read_pages(&pdf);
        assert_eq!(pages.len(), 1);
        let texts = all_texts(&pages);
        assert!(texts.iter().any(|t| t == "Data"));
        assert!(texts.iter().any(|t| t.starts_with("0 transa")));
    }

    #[test]
    fn test_long_table_spans_pages() {
        let records: Vec<Transaction> = (0..200)
            .map(|i| {
                Transaction::new(
                    NaiveDate::from_ymd_opt(2024, 2, 1 + i % 28).unwrap(),
                    format!("Compra {}", i),
                    "Diversos",
                    Money::from_cents(-100 - i as i64),
                    TransactionType::Outbound,
                )
            })
            .collect();
        let summary = Summary::generate(&records);

        let pdf = build_report(&input(&records, &summary, &[])).unwrap();
        let pages = read_pages(&pdf);
        assert!(pages.len() > 1);
        // The table header is repeated on every page the table runs onto
        let table_pages: Vec<&PageContent> = pages
            .iter()
            .filter(|p| p.texts.iter().any(|t| t.starts_with("Compra ")))
            .collect();
        assert!(table_pages.len() > 1);
        assert!(table_pages
            .iter()
            .all(|p| p.has_text("Data") && p.has_text("Valor")));
        let texts = all_texts(&pages);
        assert!(texts.iter().any(|t| t == "Compra 0"));
        assert!(texts.iter().any(|t| t == "Compra 199"));
    }

    #[test]
    fn test_time_fields_in_date_format_fall_back() {
        let records = records();
        let summary = Summary::generate(&records);
        let mut with_time = input(&records, &summary, &[]);
        with_time.options.date_format = "%d/%m/%Y %H:%M";

        let texts = all_texts(&read_pages(&build_report(&with_time).unwrap()));
        assert!(texts.iter().any(|t| t == "2024-01-02"));
    }

    #[test]
    fn test_trailing_image_and_fallback() {
        let records = records();
        let summary = Summary::generate(&records);
        let chart = crate::charts::summary_bar(&summary, "2024-01").unwrap();

        let mut with_image = input(&records, &summary, &[]);
        with_image.trailing_image = Some(chart.png.as_slice());
        let texts = all_texts(&read_pages(&build_report(&with_image).unwrap()));
        assert!(!texts.iter().any(|t| t == "Resumo"));

        let mut with_garbage = input(&records, &summary, &[]);
        with_garbage.trailing_image = Some(b"not a png".as_slice());
        let texts = all_texts(&read_pages(&build_report(&with_garbage).unwrap()));
        assert!(texts.iter().any(|t| t == "Resumo"));
        assert!(texts.iter().any(|t| t.starts_with("3 transa")));
        assert!(texts.iter().any(|t| t == "Saldo: R$ 1,549.50"));

        let without_image = input(&records, &summary, &[]);
        let texts = all_texts(&read_pages(&build_report(&without_image).unwrap()));
        assert!(texts.iter().any(|t| t == "Resumo"));
    }

    #[test]
    fn test_load_trailing_image() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("image.png");
        assert!(load_trailing_image(&path).is_none());

        std::fs::write(&path, b"bytes").unwrap();
        assert_eq!(load_trailing_image(&path).unwrap(), b"bytes");
    }
}
