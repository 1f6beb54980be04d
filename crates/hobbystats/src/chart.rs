//! Console bar chart for computed statistics.
//!
//! Consumes a label → value map plus axis titles and renders a horizontal
//! bar chart to stdout; purely visual, no logic of its own.

use hobby_stats::StatMap;

/// Width of the longest bar, in characters.
const BAR_WIDTH: usize = 40;

/// Draw a horizontal bar chart of `data`.
pub fn draw_bar_chart(data: &StatMap, title: &str, xlabel: &str, ylabel: &str) {
    println!("{}", title);
    println!("{} by {}", ylabel, xlabel);
    println!();

    if data.is_empty() {
        println!("(no data)");
        return;
    }

    let max = data
        .values()
        .map(|v| v.as_f64())
        .fold(f64::MIN, f64::max)
        .max(f64::EPSILON);
    let label_width = data.keys().map(String::len).max().unwrap_or(0);

    for (key, value) in data {
        let v = value.as_f64();
        let filled = ((v / max) * BAR_WIDTH as f64).round() as usize;
        println!(
            "{:<label_width$}  {}{}  {}",
            key,
            "█".repeat(filled),
            " ".repeat(BAR_WIDTH - filled),
            value,
        );
    }
}
