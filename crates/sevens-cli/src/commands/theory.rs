use comfy_table::{ContentArrangement, Table};

use sevens_core::theoretical_distribution;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Sum", "Ways", "Probability", "Percent"]);

    for (sum, p) in theoretical_distribution() {
        let ways = (p * 36.0).round() as u32;
        table.add_row(vec![
            sum.to_string(),
            ways.to_string(),
            format!("{ways}/36"),
            format!("{:.2}%", p * 100.0),
        ]);
    }

    println!("{table}");
    Ok(())
}
