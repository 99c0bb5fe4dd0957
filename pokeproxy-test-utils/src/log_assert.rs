/// Splits a battle log into per-turn blocks, each starting with its turn header.
pub fn turn_blocks(log: &[String]) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    for line in log {
        if line.starts_with("-- Turn ") || blocks.is_empty() {
            blocks.push(Vec::new());
        }
        if let Some(block) = blocks.last_mut() {
            block.push(line.as_str());
        }
    }
    blocks
}

/// Asserts that a battle log is equal to the given lines.
#[track_caller]
pub fn assert_logs_eq(got: &[String], want: &[&str]) {
    let got = got.iter().map(|line| line.as_str()).collect::<Vec<_>>();
    pretty_assertions::assert_eq!(got, want)
}
