/// Render a result set as a bracketed, comma separated list, e.g. `[8, -12, 7]`
pub fn format_result_set(values: &[f64]) -> String {
    let rendered: Vec<String> = values.iter().map(|value| value.to_string()).collect();
    format!("[{}]", rendered.join(", "))
}
