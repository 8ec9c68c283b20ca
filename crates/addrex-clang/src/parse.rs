use miette::SourceSpan;

use crate::error::{ClangError, ClangResult};
use crate::node::{Detail, Node};

const TREE_CHARS: &[char] = &['|', '`', '-', ' '];

/// Parses the text of `clang -Xclang -ast-dump` into a node tree.
///
/// Nesting is taken from the width of the tree-drawing prefix, two columns
/// per level. Lines that are blank are ignored.
pub fn parse_ast_dump(dump: &str) -> ClangResult<Node> {
    // Open ancestors of the line being read; index == depth.
    let mut stack: Vec<Node> = Vec::new();
    let mut current_file: Option<String> = None;
    let mut offset = 0;

    for (index, line) in dump.lines().enumerate() {
        let line_start = offset;
        offset += line.len() + 1;
        let line_no = index + 1;
        if line.trim().is_empty() {
            continue;
        }

        let body = line.trim_start_matches(TREE_CHARS);
        let prefix_len = line.len() - body.len();
        let depth = prefix_len / 2;

        let (kind, raw) = match body.split_once(char::is_whitespace) {
            Some((kind, raw)) => (kind, raw.trim()),
            None => (body, ""),
        };
        let file = track_file(raw, &mut current_file);
        let node = Node::new(kind, Detail::classify(kind, raw), file);

        if depth == 0 {
            if !stack.is_empty() {
                return Err(ClangError::MultipleRoots { line: line_no });
            }
            stack.push(node);
            continue;
        }
        if depth > stack.len() {
            return Err(ClangError::Indentation {
                line: line_no,
                src: dump.to_string(),
                span: SourceSpan::new(line_start.into(), prefix_len.max(1)),
            });
        }
        close_to(&mut stack, depth);
        stack.push(node);
    }

    close_to(&mut stack, 1);
    stack.pop().ok_or(ClangError::Empty)
}

/// Pops finished nodes until `stack.len() == depth`, attaching each to its parent.
fn close_to(stack: &mut Vec<Node>, depth: usize) {
    while stack.len() > depth {
        if let Some(done) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.children.push(done);
            }
        }
    }
}

/// Returns the file the declaration on this line starts in and advances
/// `current` to the last file mentioned. clang only spells a file name when
/// it differs from the previous location it printed.
fn track_file(raw: &str, current: &mut Option<String>) -> Option<String> {
    let mut node_file: Option<Option<String>> = None;
    for token in raw.split(|c: char| c.is_whitespace() || c == ',') {
        let token = token.trim_start_matches('<').trim_end_matches('>');
        let Some(location) = location_file(token) else {
            continue;
        };
        if node_file.is_none() {
            node_file = Some(location.map(str::to_string).or_else(|| current.clone()));
        }
        if let Some(path) = location {
            *current = Some(path.to_string());
        }
    }
    node_file.unwrap_or_else(|| current.clone())
}

/// `Some(Some(path))` for `path:line:col`, `Some(None)` for `line:l:c` and
/// `col:c`, `None` for tokens that are not locations.
fn location_file(token: &str) -> Option<Option<&str>> {
    let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if let Some(rest) = token.strip_prefix("col:") {
        return digits(rest).then_some(None);
    }
    if let Some(rest) = token.strip_prefix("line:") {
        return rest.split(':').all(digits).then_some(None);
    }
    let mut parts = token.rsplitn(3, ':');
    let col = parts.next()?;
    let line = parts.next()?;
    let path = parts.next()?;
    if !digits(col) || !digits(line) || path.is_empty() || path.contains(['<', '>', '\'', '(', ')']) {
        return None;
    }
    Some(Some(path))
}
