// crates/engine_modules/src/registry.rs

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use tracing::debug;

use crate::error::ModuleError;
use crate::module::{Dependency, Module};
use crate::resolver;

pub(crate) struct Entry {
    pub(crate) name: &'static str,
    pub(crate) dependencies: Vec<Dependency>,
    pub(crate) module: Box<dyn Module>,
}

/// Keyed collection of active engine modules: at most one instance per
/// capability type, with dependency validation on add and remove.
///
/// Designed for single-threaded use from the engine's setup/teardown path
/// and the frame loop that queries it. All operations are synchronous.
pub struct ModuleRegistry {
    modules: HashMap<TypeId, Entry>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Registers `module` under its concrete type and invokes its load hook.
    ///
    /// Fails with [`ModuleError::MissingRequirements`] when any capability
    /// the module's definition declares is not currently registered; the
    /// registry is left untouched.
    ///
    /// # Panics
    /// Registering a second instance under an occupied capability type is a
    /// programmer error and panics.
    pub fn add<T: Module>(&mut self, mut module: T) -> Result<(), ModuleError> {
        let id = TypeId::of::<T>();
        let name = type_name::<T>();

        if self.modules.contains_key(&id) {
            panic!(
                "Module {} registered twice. \
                 Remove the existing instance before registering another.",
                name,
            );
        }

        let dependencies = T::dependencies();
        let missing = resolver::missing_requirements(&self.modules, &dependencies);
        if !missing.is_empty() {
            return Err(ModuleError::MissingRequirements {
                module: name,
                missing: missing.iter().map(|dep| dep.name()).collect(),
            });
        }

        // Run the hook before the entry becomes visible: if it panics, the
        // unwind leaves the registry exactly as it was.
        module.load();

        self.modules.insert(
            id,
            Entry {
                name,
                dependencies,
                module: Box::new(module),
            },
        );
        debug!(module = name, "module registered");
        Ok(())
    }

    /// Deregisters the module under capability type `T`, invoking its unload
    /// hook. Returns whether anything was actually removed; `Ok(false)` when
    /// no instance was registered under `T`.
    ///
    /// Fails with [`ModuleError::BlockedByDependents`] when another
    /// registered module's declarations still require `T`.
    pub fn remove<T: Module>(&mut self) -> Result<bool, ModuleError> {
        let id = TypeId::of::<T>();

        let dependents = resolver::dependents_of(&self.modules, id);
        if !dependents.is_empty() {
            return Err(ModuleError::BlockedByDependents {
                module: type_name::<T>(),
                dependents,
            });
        }

        match self.modules.remove(&id) {
            Some(mut entry) => {
                entry.module.unload();
                debug!(module = entry.name, "module removed");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn contains<T: Module>(&self) -> bool {
        self.modules.contains_key(&TypeId::of::<T>())
    }

    /// Returns the registered instance of `T`, or a typed not-found error so
    /// calling code can treat a missing optional subsystem gracefully.
    pub fn find<T: Module>(&self) -> Result<&T, ModuleError> {
        self.modules
            .get(&TypeId::of::<T>())
            .and_then(|entry| entry.module.as_any().downcast_ref::<T>())
            .ok_or(ModuleError::NotRegistered {
                module: type_name::<T>(),
            })
    }

    pub fn find_mut<T: Module>(&mut self) -> Result<&mut T, ModuleError> {
        self.modules
            .get_mut(&TypeId::of::<T>())
            .and_then(|entry| entry.module.as_any_mut().downcast_mut::<T>())
            .ok_or(ModuleError::NotRegistered {
                module: type_name::<T>(),
            })
    }

    /// Empties the registry, invoking every module's unload hook in
    /// unspecified order.
    ///
    /// This is a whole-system reset: it skips the dependent check `remove`
    /// performs, so it is only safe once nothing outside the registry still
    /// relies on shutdown ordering.
    pub fn clear(&mut self) {
        for (_, mut entry) in self.modules.drain() {
            entry.module.unload();
            debug!(module = entry.name, "module removed");
        }
    }

    /// Iterates over the registered instances. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Module> {
        self.modules.values().map(|entry| entry.module.as_ref())
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Declared dependencies of `T` that are not currently registered, in
    /// declaration order.
    pub fn missing_requirements<T: Module>(&self) -> Vec<Dependency> {
        resolver::missing_requirements(&self.modules, &T::dependencies())
    }

    /// Names of registered modules whose declarations require `T`.
    pub fn dependents_of<T: Module>(&self) -> Vec<&'static str> {
        resolver::dependents_of(&self.modules, TypeId::of::<T>())
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
