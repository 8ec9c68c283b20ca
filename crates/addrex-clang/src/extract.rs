use addrex_naming::{QualifiedName, Target, TargetKind};

use crate::node::{Detail, Node, TEMPLATE_KINDS};

/// Collects every free/namespaced function, followed by every static member
/// function, qualified by the namespaces and records that enclose it.
///
/// Run this on a tree that went through [`crate::cleanup`]; it does not
/// re-check access or reserved names.
pub fn collect_targets(root: &Node) -> Vec<Target> {
    let mut collector = Collector::default();
    collector.walk(root, false);
    collector.functions.extend(collector.methods);
    collector.functions
}

#[derive(Default)]
struct Collector {
    scope: Vec<String>,
    functions: Vec<Target>,
    methods: Vec<Target>,
}

impl Collector {
    fn walk(&mut self, node: &Node, in_record: bool) {
        if TEMPLATE_KINDS.contains(&node.kind.as_str()) || node.kind == "FriendDecl" {
            return;
        }
        match (node.kind.as_str(), &node.detail) {
            ("NamespaceDecl", Detail::Namespace { name: Some(name), .. }) => {
                self.scoped(name, node, false);
            }
            ("CXXRecordDecl", Detail::Record { name, .. }) => {
                self.scoped(name, node, true);
            }
            ("FunctionDecl", Detail::Typed { name, signature, trailing }) => {
                if is_deleted(trailing) {
                    return;
                }
                if let Some(target) = self.target(name, signature, TargetKind::Function) {
                    self.functions.push(target);
                }
            }
            ("CXXMethodDecl", Detail::Typed { name, signature, trailing }) => {
                if !in_record || !has_word(trailing, "static") || is_deleted(trailing) {
                    return;
                }
                if let Some(target) = self.target(name, signature, TargetKind::StaticMethod) {
                    self.methods.push(target);
                }
            }
            _ => {
                for child in &node.children {
                    self.walk(child, false);
                }
            }
        }
    }

    fn scoped(&mut self, name: &str, node: &Node, in_record: bool) {
        self.scope.push(name.to_string());
        for child in &node.children {
            self.walk(child, in_record);
        }
        self.scope.pop();
    }

    fn target(&self, name: &str, signature: &str, kind: TargetKind) -> Option<Target> {
        let segments = self.scope.iter().map(String::as_str).chain(std::iter::once(name));
        match QualifiedName::from_segments(segments) {
            Ok(qualified) => Some(Target::new(qualified, signature, kind)),
            Err(err) => {
                log::warn!("Skipping declaration `{}`: {}", name, err);
                None
            }
        }
    }
}

fn has_word(text: &str, word: &str) -> bool {
    text.split_whitespace().any(|w| w == word)
}

fn is_deleted(trailing: &str) -> bool {
    has_word(trailing, "delete")
}
