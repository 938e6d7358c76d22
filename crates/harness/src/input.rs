// Keeps only the fields that parse as positive integers; everything else is
// dropped so one stray token does not abort the whole run.
pub fn parse_sizes(line: &str) -> Vec<usize> {
    line.split_whitespace()
        .filter_map(|field| field.parse::<usize>().ok())
        .filter(|&size| size > 0)
        .collect()
}
