//! Plain-text table used by the `list` command.

use crate::domain::{Expense, Identifiable};

const DESCRIPTION_WIDTH: usize = 20;
const ELLIPSIS: &str = "...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub struct TableColumn {
    pub header: &'static str,
    pub min_width: usize,
    pub alignment: Alignment,
}

impl TableColumn {
    pub const fn new(header: &'static str, min_width: usize, alignment: Alignment) -> Self {
        Self {
            header,
            min_width,
            alignment,
        }
    }
}

pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Width of each column: the widest of header, cells and the column minimum.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .fold(column.header.len().max(column.min_width), usize::max)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let header: Vec<String> = self.columns.iter().map(|c| c.header.to_string()).collect();
        let mut lines = vec![self.render_row(&header, &widths)];
        lines.extend(self.rows.iter().map(|row| self.render_row(row, &widths)));
        lines.join("\n")
    }

    fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        self.columns
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(idx, (column, width))| {
                let text = row.get(idx).map(String::as_str).unwrap_or("");
                match column.alignment {
                    Alignment::Left => format!("{:<width$}", text, width = *width),
                    Alignment::Right => format!("{:>width$}", text, width = *width),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    }
}

/// Shortens `text` to `width` characters, marking the cut with `...`.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

pub fn expense_table(expenses: &[Expense], money: impl Fn(f64) -> String) -> Table {
    Table {
        columns: vec![
            TableColumn::new("ID", 4, Alignment::Left),
            TableColumn::new("Date", 10, Alignment::Left),
            TableColumn::new("Category", 12, Alignment::Left),
            TableColumn::new("Description", DESCRIPTION_WIDTH, Alignment::Left),
            TableColumn::new("Amount", 10, Alignment::Right),
        ],
        rows: expenses
            .iter()
            .map(|expense| {
                vec![
                    expense.id().to_string(),
                    expense.created_at().format("%Y-%m-%d").to_string(),
                    expense.category.to_string(),
                    truncate(&expense.description, DESCRIPTION_WIDTH),
                    money(expense.amount),
                ]
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use chrono::NaiveDate;

    #[test]
    fn truncates_long_descriptions() {
        assert_eq!(truncate("Groceries", 20), "Groceries");
        assert_eq!(
            truncate("Weekly groceries at the farmers market", 20),
            "Weekly groceries ..."
        );
        assert_eq!(truncate("Weekly groceries ...", 20).chars().count(), 20);
    }

    #[test]
    fn renders_header_and_aligned_rows() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 20).unwrap();
        let expense = Expense::restore(7, date, None, "Lunch", 12.5, Category::Food);
        let rendered = expense_table(&[expense], |amount| format!("${:.2}", amount)).render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID   Date       Category     Description"));
        assert!(lines[0].ends_with("Amount"));
        assert!(lines[1].starts_with("7    2025-06-20 FOOD         Lunch"));
        assert!(lines[1].ends_with("    $12.50"));
        assert_eq!(lines[0].len(), lines[1].len());
    }
}
