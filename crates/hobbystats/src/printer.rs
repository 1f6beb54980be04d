//! Console renderer for computed statistics.
//!
//! Consumes `(label template, result map)` pairs from the registry and
//! prints them; no computation happens here.

use hobby_core::StatsError;
use hobby_stats::{StatMap, StatValue};

pub struct StatPrinter;

impl StatPrinter {
    /// Print a divider line between stat blocks.
    pub fn print_divider(&self) {
        println!("----------");
    }

    /// Print every key/value pair of a result map through the computation's
    /// label template.
    pub fn print_kv_stats(&self, label: &str, data: &StatMap) {
        self.print_divider();
        for (key, value) in data {
            println!("{}", render_label(label, key, *value));
        }
    }

    /// Report a computation that could not run (violated precondition).
    pub fn print_error(&self, err: &StatsError) {
        self.print_divider();
        println!("Cannot compute: {}", err);
    }
}

/// Substitute the result key and value into a label template with two `{}`
/// placeholders.
fn render_label(template: &str, key: &str, value: StatValue) -> String {
    template
        .replacen("{}", key, 1)
        .replacen("{}", &value.to_string(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_label_substitutes_in_order() {
        let out = render_label("Total trips for {}: {}", "Trail Mtb", StatValue::Count(42));
        assert_eq!(out, "Total trips for Trail Mtb: 42");
    }

    #[test]
    fn test_render_label_amount() {
        let out = render_label(
            "Percent of all trips for {}: {}%",
            "Snowsports",
            StatValue::Amount(33.33),
        );
        assert_eq!(out, "Percent of all trips for Snowsports: 33.33%");
    }
}
