//! Text rendering for the fixed order-join preview.

/// One row of the preview join, as returned by the store.
#[derive(Debug, Clone)]
pub struct PreviewRow {
    pub customer_id: i64,
    pub customer_name: String,
    pub order_id: i64,
    pub order_date: String,
    pub product_name: String,
    pub quantity: i64,
    pub line_subtotal: f64,
    pub order_total: f64,
}

const HEADERS: [&str; 8] = [
    "customer_id",
    "customer_name",
    "order_id",
    "order_date",
    "product_name",
    "quantity",
    "line_subtotal",
    "order_total",
];

/// Render rows as a right-aligned text table, header row first.
pub fn render_table(rows: &[PreviewRow]) -> String {
    let cells: Vec<[String; 8]> = rows
        .iter()
        .map(|r| {
            [
                r.customer_id.to_string(),
                r.customer_name.clone(),
                r.order_id.to_string(),
                r.order_date.clone(),
                r.product_name.clone(),
                r.quantity.to_string(),
                format!("{:.2}", r.line_subtotal),
                format!("{:.2}", r.order_total),
            ]
        })
        .collect();

    let mut widths: [usize; 8] = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    render_line(&mut out, &HEADERS.map(str::to_string), &widths);
    for row in &cells {
        render_line(&mut out, row, &widths);
    }
    out
}

fn render_line(out: &mut String, cells: &[String; 8], widths: &[usize; 8]) {
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{cell:>w$}", w = *width));
    }
    out.push('\n');
}
