use super::*;

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn part_bytes(part: &[String]) -> u64 {
    part.iter().map(|l| line_cost(l)).sum()
}

#[test]
fn test_count_even_split() {
    let input = lines(&["a", "b", "c", "d", "e", "f"]);
    let parts = partition_by_count(input, 2);

    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0], lines(&["a", "b", "c"]));
    assert_eq!(parts[1], lines(&["d", "e", "f"]));
}

#[test]
fn test_count_ceiling_division_with_remainder() {
    let input: Vec<String> = (0..10).map(|i| i.to_string()).collect();
    let parts = partition_by_count(input, 3);

    // ceil(10 / 3) = 4 lines per file; the last file takes the remainder.
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0].len(), 4);
    assert_eq!(parts[1].len(), 4);
    assert_eq!(parts[2].len(), 2);
}

#[test]
fn test_count_more_files_than_lines() {
    let input = lines(&["a", "b", "c"]);
    let parts = partition_by_count(input, 5);

    // Every requested file is produced, trailing ones empty.
    assert_eq!(parts.len(), 5);
    assert_eq!(parts[0], lines(&["a"]));
    assert_eq!(parts[2], lines(&["c"]));
    assert!(parts[3].is_empty());
    assert!(parts[4].is_empty());
}

#[test]
fn test_count_is_lossless_and_ordered() {
    let input: Vec<String> = (0..23).map(|i| format!("line {i}")).collect();
    let parts = partition_by_count(input.clone(), 4);

    let rejoined: Vec<String> = parts.into_iter().flatten().collect();
    assert_eq!(rejoined, input);
}

#[test]
fn test_count_zero_files_yields_nothing() {
    assert!(partition_by_count(lines(&["a"]), 0).is_empty());
}

#[test]
fn test_size_respects_byte_budget() {
    let input = vec!["x".repeat(30); 10];
    let max = 100;
    let parts = partition_by_size(input, max);

    assert!(parts.len() > 1);
    for part in &parts {
        assert!(part_bytes(part) <= max, "part over budget: {} bytes", part_bytes(part));
    }
}

#[test]
fn test_size_oversized_line_written_whole() {
    let input = lines(&["short", &"x".repeat(500), "tail"]);
    let parts = partition_by_size(input, 100);

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], lines(&["short"]));
    assert_eq!(parts[1].len(), 1);
    assert_eq!(parts[1][0].len(), 500);
    assert_eq!(parts[2], lines(&["tail"]));
}

#[test]
fn test_size_is_lossless_and_ordered() {
    let input: Vec<String> = (0..50).map(|i| format!("第{i}行内容")).collect();
    let parts = partition_by_size(input.clone(), 64);

    let rejoined: Vec<String> = parts.into_iter().flatten().collect();
    assert_eq!(rejoined, input);
}

#[test]
fn test_size_single_part_when_budget_is_large() {
    let input = lines(&["a", "b", "c"]);
    let parts = partition_by_size(input.clone(), 1024 * 1024);

    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0], input);
}

#[test]
fn test_size_empty_input_yields_nothing() {
    assert!(partition_by_size(Vec::new(), 100).is_empty());
}
