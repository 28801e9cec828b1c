use crate::domain::model::{LanguageStat, StatisticsReport};
use crate::utils::error::Result;
use serde::Serialize;

pub const HEADER: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

pub const NO_ESTIMATE: &str = "—";

fn row_cells(language: &str, stat: &LanguageStat) -> [String; 4] {
    [
        language.to_string(),
        stat.vacancies_found.to_string(),
        stat.vacancies_processed.to_string(),
        stat.average_salary
            .map(|salary| salary.to_string())
            .unwrap_or_else(|| NO_ESTIMATE.to_string()),
    ]
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push_str(&format!(" {:<width$} |", cell, width = width));
    }
    line
}

/// Top border with the title laid over it, when the title fits.
fn title_border(title: &str, widths: &[usize]) -> String {
    let plain = border(widths);
    let plain_len = plain.chars().count();
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > plain_len {
        return plain;
    }

    let mut line = String::from("+");
    line.push_str(title);
    line.extend(plain.chars().skip(1 + title_len));
    line
}

/// Renders the report as a fixed-width ASCII table, one row per language.
pub fn render_table(title: &str, report: &StatisticsReport) -> String {
    let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
    let rows: Vec<[String; 4]> = report
        .iter()
        .map(|(language, stat)| row_cells(language, stat))
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![
        title_border(title, &widths),
        row_line(&header, &widths),
        border(&widths),
    ];
    lines.extend(rows.iter().map(|row| row_line(row, &widths)));
    lines.push(border(&widths));

    lines.join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    title: &'a str,
    statistics: &'a StatisticsReport,
}

pub fn render_json(title: &str, report: &StatisticsReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonReport {
        title,
        statistics: report,
    })?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(line: &str) -> Vec<String> {
        line.trim_matches('|')
            .split('|')
            .map(|cell| cell.trim().to_string())
            .collect()
    }

    fn sample_report() -> StatisticsReport {
        let mut report = StatisticsReport::new();
        report.insert(
            "Python",
            LanguageStat {
                vacancies_found: 10,
                vacancies_processed: 4,
                average_salary: Some(90000),
            },
        );
        report
    }

    #[test]
    fn test_row_follows_header() {
        let table = render_table("HeadHunter Moscow", &sample_report());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(cells(lines[1]), HEADER.to_vec());
        assert_eq!(cells(lines[3]), vec!["Python", "10", "4", "90000"]);
    }

    #[test]
    fn test_title_is_embedded_in_top_border() {
        let table = render_table("SuperJob Moscow", &sample_report());
        let first = table.lines().next().unwrap();

        assert!(first.starts_with("+SuperJob Moscow-"));
        assert!(first.ends_with('+'));
        let last = table.lines().last().unwrap();
        assert_eq!(first.chars().count(), last.chars().count());
    }

    #[test]
    fn test_missing_average_uses_placeholder() {
        let mut report = StatisticsReport::new();
        report.insert("C#", LanguageStat::default());

        let table = render_table("HeadHunter Moscow", &report);
        let row = table.lines().nth(3).unwrap();
        assert_eq!(cells(row), vec!["C#", "0", "0", NO_ESTIMATE]);
    }

    #[test]
    fn test_rows_keep_report_order_and_width() {
        let mut report = sample_report();
        report.insert(
            "JavaScript",
            LanguageStat {
                vacancies_found: 1_234,
                vacancies_processed: 567,
                average_salary: Some(185_000),
            },
        );

        let table = render_table("t", &report);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[3].starts_with("| Python "));
        assert!(lines[4].starts_with("| JavaScript "));
        let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_json() {
        let json = render_json("HeadHunter Moscow", &sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "HeadHunter Moscow");
        assert_eq!(value["statistics"]["Python"]["vacancies_found"], 10);
        assert_eq!(value["statistics"]["Python"]["average_salary"], 90000);
    }
}
