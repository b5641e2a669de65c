use reqtab_core::extraction::xlsx::CleanedSheet;
use reqtab_core::model::RequirementsTable;

/// Render an extracted table as width-aligned text.
pub fn format_table(table: &RequirementsTable) -> String {
    let [id_header, name_header] = RequirementsTable::HEADERS;
    let id_width = table
        .rows
        .iter()
        .map(|r| r.identifier.len())
        .chain([id_header.len()])
        .max()
        .unwrap_or(0);
    let name_width = table
        .rows
        .iter()
        .map(|r| r.name.len())
        .chain([name_header.len()])
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{id_header:<id_width$}  {name_header}\n"));
    out.push_str(&format!("{}\n", "-".repeat(id_width + 2 + name_width)));
    for row in &table.rows {
        out.push_str(&format!("{:<id_width$}  {}\n", row.identifier, row.name));
    }
    out
}

/// Render a cleaned sheet as width-aligned text.
pub fn format_sheet(sheet: &CleanedSheet) -> String {
    let columns = sheet
        .rows
        .iter()
        .map(|r| r.len())
        .chain([sheet.headers.len()])
        .max()
        .unwrap_or(0);

    let mut widths = vec![0usize; columns];
    for (i, header) in sheet.headers.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &sheet.rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

    let mut out = String::new();
    out.push_str(&format_row(&sheet.headers, &widths));
    out.push_str(&format!("{}\n", "-".repeat(total)));
    for row in &sheet.rows {
        out.push_str(&format_row(row, &widths));
    }
    out
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, &width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        if i > 0 {
            line.push_str("  ");
        }
        line.push_str(&format!("{cell:<width$}"));
    }
    format!("{}\n", line.trim_end())
}
