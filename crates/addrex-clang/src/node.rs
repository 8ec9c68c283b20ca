use std::fmt;

/// `class`, `struct` or `union` of a record definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordTag {
    Class,
    Struct,
    Union,
}

impl RecordTag {
    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "class" => Some(RecordTag::Class),
            "struct" => Some(RecordTag::Struct),
            "union" => Some(RecordTag::Union),
            _ => None,
        }
    }

    /// Members of a `class` are private until an access specifier says otherwise.
    pub fn default_public(self) -> bool {
        !matches!(self, RecordTag::Class)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordTag::Class => "class",
            RecordTag::Struct => "struct",
            RecordTag::Union => "union",
        }
    }
}

/// The interpreted part of a dump line after the node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail {
    /// Translation unit root.
    Empty,
    /// `NamespaceDecl`; `None` for anonymous namespaces.
    Namespace { name: Option<String>, inline: bool },
    /// Last word of `AccessSpecDecl` / `LinkageSpecDecl`.
    Name(String),
    /// Declarations of the form `name 'type' trailing`.
    Typed {
        name: String,
        signature: String,
        trailing: String,
    },
    /// A record definition.
    Record { tag: RecordTag, name: String },
    /// Declarations that are recognised but not interpreted.
    Opaque,
    /// Anything else, kept verbatim.
    Raw(String),
}

const TYPED_KINDS: &[&str] = &[
    "TypedefDecl",
    "CXXMethodDecl",
    "CXXConstructorDecl",
    "CXXDestructorDecl",
    "ParmVarDecl",
    "TypeAliasDecl",
    "EnumConstantDecl",
    "FunctionDecl",
    "VarDecl",
    "FieldDecl",
    "IndirectFieldDecl",
    "UnresolvedUsingValueDecl",
];

const OPAQUE_KINDS: &[&str] = &[
    "UsingShadowDecl",
    "CXXConversionDecl",
    "NonTypeTemplateParmDecl",
    "UsingDirectiveDecl",
    "FriendDecl",
    "EnumDecl",
    "ClassTemplateDecl",
    "TemplateTypeParmDecl",
    "ClassTemplateSpecializationDecl",
    "TypeAliasTemplateDecl",
    "FunctionTemplateDecl",
    "UsingDecl",
    "ClassTemplatePartialSpecializationDecl",
    "TemplateTemplateParmDecl",
    "StaticAssertDecl",
    "VarTemplateDecl",
];

/// Kinds whose subtrees are templates; their members are not concrete targets.
pub const TEMPLATE_KINDS: &[&str] = &[
    "FunctionTemplateDecl",
    "ClassTemplateDecl",
    "ClassTemplatePartialSpecializationDecl",
];

impl Detail {
    /// Interprets the raw text that follows `kind` on a dump line.
    pub fn classify(kind: &str, raw: &str) -> Detail {
        match kind {
            "TranslationUnitDecl" => Detail::Empty,
            "NamespaceDecl" => classify_namespace(raw),
            "AccessSpecDecl" | "LinkageSpecDecl" => {
                Detail::Name(raw.split_whitespace().last().unwrap_or_default().to_string())
            }
            "CXXRecordDecl" => classify_record(raw),
            k if TYPED_KINDS.contains(&k) => classify_typed(kind, raw),
            k if OPAQUE_KINDS.contains(&k) => Detail::Opaque,
            k => {
                if k.ends_with("Decl") {
                    log::debug!("Uninterpreted declaration kind {}: {}", k, raw);
                }
                Detail::Raw(raw.to_string())
            }
        }
    }
}

fn classify_namespace(raw: &str) -> Detail {
    let mut words: Vec<&str> = raw.split_whitespace().collect();
    let inline = words.last() == Some(&"inline");
    if inline {
        words.pop();
    }
    let name = words
        .last()
        .filter(|w| !w.contains(':') && !w.starts_with('<') && !w.starts_with("0x"))
        .map(|w| w.to_string());
    Detail::Namespace { name, inline }
}

fn classify_record(raw: &str) -> Detail {
    let words: Vec<&str> = raw.split_whitespace().collect();
    if words.last() != Some(&"definition") {
        return Detail::Opaque;
    }
    let tag_at = words.iter().position(|w| RecordTag::from_keyword(w).is_some());
    match tag_at {
        Some(at) if at + 1 < words.len() - 1 => Detail::Record {
            tag: RecordTag::from_keyword(words[at]).unwrap_or(RecordTag::Struct),
            name: words[at + 1..words.len() - 1].join(" "),
        },
        _ => Detail::Opaque,
    }
}

fn classify_typed(kind: &str, raw: &str) -> Detail {
    let (first, last) = match (raw.find('\''), raw.rfind('\'')) {
        (Some(i), Some(j)) if i < j => (i, j),
        _ => {
            log::debug!("{} without a quoted type: {}", kind, raw);
            return Detail::Raw(raw.to_string());
        }
    };
    let name = raw[..first]
        .split_whitespace()
        .last()
        .filter(|w| !w.contains(':') && !w.starts_with('<') && !w.starts_with("0x"))
        .unwrap_or_default()
        .to_string();
    let quoted = &raw[first + 1..];
    let signature = quoted[..quoted.find('\'').unwrap_or(quoted.len())].to_string();
    let trailing = raw[last + 1..].trim().to_string();
    Detail::Typed {
        name,
        signature,
        trailing,
    }
}

impl fmt::Display for Detail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detail::Empty => Ok(()),
            Detail::Namespace { name, inline } => {
                write!(f, "{}", name.as_deref().unwrap_or("(anonymous)"))?;
                if *inline {
                    write!(f, " inline")?;
                }
                Ok(())
            }
            Detail::Name(name) => f.write_str(name),
            Detail::Typed {
                name,
                signature,
                trailing,
            } => {
                write!(f, "{} '{}'", name, signature)?;
                if !trailing.is_empty() {
                    write!(f, " {}", trailing)?;
                }
                Ok(())
            }
            Detail::Record { tag, name } => write!(f, "{} {}", tag.as_str(), name),
            Detail::Opaque => f.write_str("..."),
            Detail::Raw(raw) => f.write_str(raw),
        }
    }
}

/// One line of a clang AST dump together with its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub kind: String,
    pub detail: Detail,
    /// Source file the declaration starts in, if clang reported one so far.
    pub file: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: impl Into<String>, detail: Detail, file: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            detail,
            file,
            children: Vec::new(),
        }
    }

    pub fn is_decl(&self) -> bool {
        self.kind.ends_with("Decl")
    }

    /// Declared name for named declarations.
    pub fn name(&self) -> Option<&str> {
        match &self.detail {
            Detail::Namespace { name, .. } => name.as_deref(),
            Detail::Name(name) => Some(name),
            Detail::Typed { name, .. } => Some(name),
            Detail::Record { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Node::count).sum::<usize>()
    }

    /// Indented `Kind:detail` listing of the declaration nodes.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out, 0);
        out
    }

    fn render_into(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(&self.kind);
        out.push(':');
        out.push_str(&self.detail.to_string());
        out.push('\n');
        for child in self.children.iter().filter(|c| c.is_decl()) {
            child.render_into(out, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn function_detail() {
        let detail = Detail::classify(
            "FunctionDecl",
            "0x55d0c8a4f7a8 <foo.hpp:1:1, col:14> col:5 used foo 'int (int)'",
        );
        assert_eq!(
            detail,
            Detail::Typed {
                name: "foo".into(),
                signature: "int (int)".into(),
                trailing: String::new(),
            }
        );
    }

    #[test]
    fn static_method_detail_keeps_trailing() {
        let detail = Detail::classify(
            "CXXMethodDecl",
            "0x1 <line:10:5, col:20> col:16 fun 'int ()' static",
        );
        match detail {
            Detail::Typed { name, signature, trailing } => {
                assert_eq!(name, "fun");
                assert_eq!(signature, "int ()");
                assert_eq!(trailing, "static");
            }
            other => panic!("unexpected detail {:?}", other),
        }
    }

    #[test]
    fn desugared_type_uses_first_spelling() {
        let detail = Detail::classify("VarDecl", "0x1 <col:1, col:9> col:9 n 'size_t':'unsigned long'");
        assert!(matches!(detail, Detail::Typed { ref signature, .. } if signature == "size_t"));
    }

    #[test]
    fn unnamed_parameter() {
        let detail = Detail::classify("ParmVarDecl", "0x1 <col:9> col:12 'int'");
        assert!(matches!(detail, Detail::Typed { ref name, .. } if name.is_empty()));
    }

    #[test]
    fn namespaces() {
        assert_eq!(
            Detail::classify("NamespaceDecl", "0x1 <line:3:1, line:13:1> line:3:11 ns"),
            Detail::Namespace { name: Some("ns".into()), inline: false }
        );
        assert_eq!(
            Detail::classify("NamespaceDecl", "0x1 <line:3:1, line:5:1> line:3:18 v1 inline"),
            Detail::Namespace { name: Some("v1".into()), inline: true }
        );
        assert_eq!(
            Detail::classify("NamespaceDecl", "0x1 <line:3:1, line:5:1> line:3:11"),
            Detail::Namespace { name: None, inline: false }
        );
    }

    #[test]
    fn records() {
        assert_eq!(
            Detail::classify("CXXRecordDecl", "0x1 <line:8:3, line:12:3> line:8:9 class BarCls definition"),
            Detail::Record { tag: RecordTag::Class, name: "BarCls".into() }
        );
        assert_eq!(
            Detail::classify("CXXRecordDecl", "0x1 <col:3, col:9> col:9 implicit class BarCls"),
            Detail::Opaque
        );
        assert_eq!(
            Detail::classify("CXXRecordDecl", "0x1 <line:2:1, line:4:1> line:2:1 struct definition"),
            Detail::Opaque
        );
    }

    #[test]
    fn render_lists_only_declarations() {
        let mut root = Node::new("TranslationUnitDecl", Detail::Empty, None);
        let mut func = Node::new(
            "FunctionDecl",
            Detail::Typed { name: "foo".into(), signature: "int (int)".into(), trailing: String::new() },
            Some("foo.hpp".into()),
        );
        func.children.push(Node::new("CompoundStmt", Detail::Raw("0x1".into()), None));
        root.children.push(func);
        assert_eq!(root.render(), "TranslationUnitDecl:\n  FunctionDecl:foo 'int (int)'\n");
        assert_eq!(root.count(), 3);
    }
}
