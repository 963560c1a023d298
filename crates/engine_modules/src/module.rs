// crates/engine_modules/src/module.rs

use std::any::{type_name, Any, TypeId};

/// A capability another module must already provide before this one can be
/// registered. The capability type of a module is the concrete type it is
/// registered as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dependency {
    id: TypeId,
    name: &'static str,
}

impl Dependency {
    /// Declares a requirement on the capability type `T`.
    pub fn on<T: Module>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// The lifecycle contract every registrable engine subsystem satisfies.
///
/// The registry assumes nothing else about a module: a definition-level
/// dependency list, a load hook it invokes exactly once at registration, and
/// an unload hook it invokes when the module leaves the registry.
pub trait Module: 'static {
    /// Capability types that must already be registered before this module
    /// can be added. A property of the definition, not of instance state.
    /// Checked one hop deep against the live registry.
    fn dependencies() -> Vec<Dependency>
    where
        Self: Sized,
    {
        Vec::new()
    }

    /// Called exactly once, synchronously, when registration succeeds,
    /// before `add` returns.
    fn load(&mut self) {}

    /// Called when the module is removed or the registry is cleared.
    fn unload(&mut self) {}

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
