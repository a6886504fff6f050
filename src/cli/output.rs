// Plain-text table output for the reporting commands

/// Render rows as fixed-width columns. Widths come from the widest cell per
/// column; headers are underlined with dashes.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  "));
    let underline: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    println!("{}", underline.join("  "));

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  "));
    }
}

/// Section header for board columns and panels
pub fn print_heading(label: &str, count: usize) {
    println!();
    println!("{} ({})", label, count);
}
