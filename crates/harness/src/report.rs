use crate::runner::BenchmarkResult;

const RULE_WIDTH: usize = 42;
const MAX_BAR_WIDTH: usize = 40;

pub fn render_table(results: &[BenchmarkResult]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str("TIMSORT - EXECUTION TIME COMPARISON (ms)\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(
        "{:<10} {:<15} {:<15}\n",
        "n", "recursive", "iterative"
    ));
    out.push_str(&rule);
    out.push('\n');

    for result in results {
        out.push_str(&format!(
            "{:<10} {:<15.5} {:<15.5}\n",
            result.size, result.recursive_ms, result.iterative_ms
        ));
    }

    out
}

pub fn render_bar_chart(results: &[BenchmarkResult]) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str(&rule);
    out.push('\n');
    out.push_str("TIMSORT - EXECUTION TIME (bars vs slowest)\n");
    out.push_str(&rule);
    out.push('\n');

    let slowest = results
        .iter()
        .map(|r| r.recursive_ms.max(r.iterative_ms))
        .fold(0.0_f64, f64::max);

    for result in results {
        out.push_str(&format!("\nn = {}\n", result.size));
        out.push_str(&format!(
            "recursive: {} {:.2} ms\n",
            bar(result.recursive_ms, slowest),
            result.recursive_ms
        ));
        out.push_str(&format!(
            "iterative: {} {:.2} ms\n",
            bar(result.iterative_ms, slowest),
            result.iterative_ms
        ));
    }

    out
}

fn bar(value_ms: f64, slowest_ms: f64) -> String {
    if slowest_ms <= 0.0 {
        return String::new();
    }
    let width = ((value_ms / slowest_ms) * MAX_BAR_WIDTH as f64).round() as usize;
    "█".repeat(width.min(MAX_BAR_WIDTH))
}
