use crate::node::{Detail, Node};

/// Filters applied before targets are collected.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Declarations from files under these prefixes are dropped.
    pub system_prefixes: Vec<String>,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            system_prefixes: vec!["/usr/".to_string()],
        }
    }
}

const ALLOCATION_FUNCTIONS: &[&str] = &["new", "delete", "new[]", "delete[]"];

/// Drops everything a generated accessor could not or should not reference:
/// `std` and reserved namespaces, reserved and allocation functions,
/// non-public members, enums and typedefs, forward declarations and
/// anything coming from a system header.
pub fn cleanup(node: Node, options: &CleanupOptions) -> Option<Node> {
    if !keep_self(&node, options) {
        return None;
    }

    let Node {
        kind,
        detail,
        file,
        children,
    } = node;

    let mut public = match &detail {
        Detail::Record { tag, .. } => tag.default_public(),
        _ => true,
    };
    let mut kept = Vec::with_capacity(children.len());
    for child in children {
        if child.kind == "AccessSpecDecl" {
            public = child.name() == Some("public");
        }
        if !public {
            continue;
        }
        if let Some(child) = cleanup(child, options) {
            kept.push(child);
        }
    }

    if kind == "LinkageSpecDecl" && kept.is_empty() {
        return None;
    }

    Some(Node {
        kind,
        detail,
        file,
        children: kept,
    })
}

fn keep_self(node: &Node, options: &CleanupOptions) -> bool {
    let name = node.name().unwrap_or_default();
    match node.kind.as_str() {
        "NamespaceDecl" => {
            if matches!(node.detail, Detail::Namespace { name: None, .. }) || name == "std" || name.starts_with('_') {
                return false;
            }
        }
        "FunctionDecl" => {
            if name.starts_with('_') || ALLOCATION_FUNCTIONS.contains(&name) {
                return false;
            }
        }
        "EnumDecl" | "TypedefDecl" => return false,
        "CXXRecordDecl" => {
            if !matches!(node.detail, Detail::Record { .. }) || name.starts_with('_') {
                return false;
            }
        }
        _ => {}
    }

    if let Some(file) = &node.file {
        if options.system_prefixes.iter().any(|prefix| file.starts_with(prefix.as_str())) {
            return false;
        }
    }
    true
}
