//! Reassembly of logical CMake statements from physical lines.

/// Remove everything from the first `#` onward.
///
/// Quoting is not taken into account, so a `#` inside a quoted argument also
/// starts a comment.
pub fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Accumulates stripped physical lines until the parenthesis balance of the
/// buffered text returns to zero.
#[derive(Debug, Default)]
pub struct StatementBuffer {
    buffer: String,
    balance: i64,
}

impl StatementBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one physical line.
    ///
    /// Returns the complete logical statement when this line closes it.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        let stripped = strip_comment(line).trim_start_matches([' ', '\t']);
        if stripped.is_empty() {
            return None;
        }

        self.buffer.push(' ');
        self.buffer.push_str(stripped);

        for c in stripped.chars() {
            match c {
                '(' => self.balance += 1,
                ')' => self.balance -= 1,
                _ => {}
            }
        }

        if self.balance == 0 {
            Some(std::mem::take(&mut self.buffer))
        } else {
            None
        }
    }
}

/// Split text into complete logical statements.
///
/// A trailing statement whose parentheses never close is dropped.
pub fn statements(content: &str) -> Vec<String> {
    let mut buffer = StatementBuffer::new();
    content
        .lines()
        .filter_map(|line| buffer.push_line(line))
        .collect()
}
