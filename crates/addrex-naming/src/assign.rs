use rustc_hash::{FxHashMap, FxHashSet};

use crate::accessor::{accessor_for_symbol, normalize_signature, tagged_symbol};
use crate::error::{NamingError, NamingResult};
use crate::qualified::{QualifiedName, Target};

/// The name pair of one address binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingName {
    pub target: Target,
    /// Mangled and, for overloads, tagged symbol (`ns__ns2__bar`).
    pub symbol: String,
    /// Exported accessor (`get_ns__ns2__bar_address`).
    pub accessor: String,
}

impl BindingName {
    pub fn is_overload(&self) -> bool {
        self.symbol.contains(crate::accessor::OVERLOAD_SEPARATOR)
    }
}

/// Assigns accessor names to a set of targets.
///
/// Names shared by several signatures are overloads and all members of the
/// group get a signature tag. The result keeps the input order and is checked
/// for injectivity before it is returned.
pub fn assign_names(targets: &[Target]) -> NamingResult<Vec<BindingName>> {
    let mut signatures: FxHashMap<&QualifiedName, FxHashSet<String>> = FxHashMap::default();
    for target in targets {
        let normalized = normalize_signature(&target.signature);
        let seen = signatures.entry(&target.name).or_default();
        if !seen.insert(normalized.clone()) {
            return Err(NamingError::DuplicateTarget {
                name: target.name.cpp_path(),
                signature: normalized,
            });
        }
    }

    let mut bindings = Vec::with_capacity(targets.len());
    for target in targets {
        let overloaded = signatures.get(&target.name).map_or(false, |s| s.len() > 1);
        let symbol = if overloaded {
            tagged_symbol(&target.name, &target.signature)?
        } else {
            target.name.mangled()?
        };
        if overloaded {
            log::debug!("`{}` is overloaded, tagging `{}` as `{}`", target.name, target.signature, symbol);
        }
        bindings.push(BindingName {
            accessor: accessor_for_symbol(&symbol),
            symbol,
            target: target.clone(),
        });
    }

    check_unique(&bindings)?;
    Ok(bindings)
}

/// Fails if two bindings export the same accessor.
pub fn check_unique(bindings: &[BindingName]) -> NamingResult<()> {
    let mut owners: FxHashMap<&str, &Target> = FxHashMap::default();
    for binding in bindings {
        if let Some(first) = owners.insert(binding.accessor.as_str(), &binding.target) {
            return Err(NamingError::Collision {
                accessor: binding.accessor.clone(),
                first: describe(first),
                second: describe(&binding.target),
            });
        }
    }
    Ok(())
}

fn describe(target: &Target) -> String {
    format!("{} `{}`", target.name, target.signature)
}
