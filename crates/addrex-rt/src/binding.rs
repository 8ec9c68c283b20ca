use std::mem;

use addrex_naming::{accessor_name, QualifiedName};
use rustc_hash::FxHashSet;

use crate::error::{ResolveError, ResolveResult};

/// Signature every accessor shares: no arguments, address-width result.
pub type Accessor = extern "C" fn() -> isize;

/// One exported accessor and the target whose address it returns.
#[derive(Debug, Clone, Copy)]
pub struct Binding {
    /// Qualified path of the target, e.g. `ns::ns2::bar`.
    pub target: &'static str,
    /// Signature the caller must assume when invoking the address.
    pub signature: &'static str,
    /// Exported symbol name of the accessor.
    pub accessor: &'static str,
    pub get: Accessor,
}

impl Binding {
    /// Calls the accessor.
    pub fn address(&self) -> isize {
        (self.get)()
    }

    pub fn qualified_name(&self) -> ResolveResult<QualifiedName> {
        Ok(QualifiedName::parse(self.target)?)
    }
}

/// Static, compile-time populated set of bindings.
#[derive(Debug, Clone, Copy)]
pub struct BindingTable {
    bindings: &'static [Binding],
}

impl BindingTable {
    pub const fn new(bindings: &'static [Binding]) -> Self {
        Self { bindings }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Binding> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn by_accessor(&self, accessor: &str) -> Option<&'static Binding> {
        self.bindings.iter().find(|b| b.accessor == accessor)
    }

    pub fn by_target(&self, target: &str) -> Option<&'static Binding> {
        self.bindings.iter().find(|b| b.target == target)
    }

    /// Resolves an accessor by its exported name and returns the target address.
    pub fn address_of(&self, accessor: &str) -> ResolveResult<isize> {
        let binding = self
            .by_accessor(accessor)
            .ok_or_else(|| ResolveError::UnknownAccessor(accessor.to_string()))?;
        let address = binding.address();
        log::trace!("{} -> {:#x}", accessor, address);
        if address == 0 {
            return Err(ResolveError::NullAddress(accessor.to_string()));
        }
        Ok(address)
    }

    /// Address of the target with the given qualified path.
    pub fn address_of_target(&self, target: &str) -> ResolveResult<isize> {
        let binding = self
            .by_target(target)
            .ok_or_else(|| ResolveError::UnknownTarget(target.to_string()))?;
        self.address_of(binding.accessor)
    }

    /// Checks that each accessor is the derived name of its target and that
    /// no accessor is exported twice.
    pub fn validate(&self) -> ResolveResult<()> {
        let mut seen = FxHashSet::default();
        for binding in self.bindings {
            let expected = accessor_name(&binding.qualified_name()?)?;
            if expected != binding.accessor {
                return Err(ResolveError::Mismatch {
                    target: binding.target.to_string(),
                    accessor: binding.accessor.to_string(),
                    expected,
                });
            }
            if !seen.insert(binding.accessor) {
                return Err(ResolveError::DuplicateAccessor(binding.accessor.to_string()));
            }
        }
        log::debug!("Validated {} address bindings", self.bindings.len());
        Ok(())
    }
}

impl IntoIterator for &BindingTable {
    type Item = &'static Binding;
    type IntoIter = std::slice::Iter<'static, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

/// Reinterprets an address returned by an accessor as a function pointer.
///
/// # Safety
///
/// `F` must be the exact `extern "C"` function-pointer type of the target
/// and the module defining the target must still be loaded. Nothing about
/// the address carries type information; a wrong `F` is undefined behaviour.
///
/// # Panics
///
/// If `F` is not pointer-sized or `address` is zero.
pub unsafe fn fn_from_address<F: Copy>(address: isize) -> F {
    assert_eq!(
        mem::size_of::<F>(),
        mem::size_of::<isize>(),
        "function pointer type must be address-sized"
    );
    assert_ne!(address, 0, "null function address");
    mem::transmute_copy::<isize, F>(&address)
}
