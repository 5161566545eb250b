#[cfg(test)]
mod tests;

use crate::textio::LINE_ENDING;

/// Byte cost of a line once written, terminator included.
fn line_cost(line: &str) -> u64 {
    (line.len() + LINE_ENDING.len()) as u64
}

/// Greedy byte-budget partition.
///
/// A part is flushed before a line that would push it past `max_bytes`,
/// so every part stays within the budget. The one exception is a single
/// line larger than the whole budget, which still becomes a part of its
/// own rather than being dropped or broken up.
pub fn partition_by_size(lines: Vec<String>, max_bytes: u64) -> Vec<Vec<String>> {
    let mut parts = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_bytes: u64 = 0;

    for line in lines {
        let cost = line_cost(&line);

        if current_bytes + cost > max_bytes && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
            current_bytes = 0;
        }

        current_bytes += cost;
        current.push(line);
    }

    // Flush the remainder.
    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

/// Partition into exactly `file_count` parts of `ceil(len / file_count)`
/// lines each.
///
/// The tail absorbs the remainder, so trailing parts may be shorter or
/// empty when `file_count` exceeds the line count; the caller still gets
/// one part per requested file. `file_count` of zero yields no parts.
pub fn partition_by_count(lines: Vec<String>, file_count: usize) -> Vec<Vec<String>> {
    if file_count == 0 {
        return Vec::new();
    }

    let per_file = lines.len().div_ceil(file_count);
    let mut parts = Vec::with_capacity(file_count);
    let mut iter = lines.into_iter();
    for _ in 0..file_count {
        parts.push(iter.by_ref().take(per_file).collect());
    }

    parts
}
