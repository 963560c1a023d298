// crates/engine_modules/src/resolver.rs

use std::any::TypeId;
use std::collections::HashMap;

use crate::module::Dependency;
use crate::registry::Entry;

/// Declared dependencies of a candidate module that are not currently
/// registered, in declaration order. An empty result permits registration.
pub(crate) fn missing_requirements(
    modules: &HashMap<TypeId, Entry>,
    declared: &[Dependency],
) -> Vec<Dependency> {
    declared
        .iter()
        .filter(|dep| !modules.contains_key(&dep.id()))
        .copied()
        .collect()
}

/// Names of registered modules whose declaration list contains `target`,
/// whether or not that declared dependency was ever satisfied. An empty
/// result permits removal.
pub(crate) fn dependents_of(
    modules: &HashMap<TypeId, Entry>,
    target: TypeId,
) -> Vec<&'static str> {
    modules
        .values()
        .filter(|entry| entry.dependencies.iter().any(|dep| dep.id() == target))
        .map(|entry| entry.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::Module;
    use std::any::Any;

    struct WindowStub;
    struct DeviceStub;
    struct MixerStub;

    impl Module for WindowStub {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn entry_for<T: Module>(instance: T, dependencies: Vec<Dependency>) -> (TypeId, Entry) {
        (
            TypeId::of::<T>(),
            Entry {
                name: std::any::type_name::<T>(),
                dependencies,
                module: Box::new(instance),
            },
        )
    }

    impl Module for DeviceStub {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    impl Module for MixerStub {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn missing_requirements_keeps_declaration_order() {
        let mut modules = HashMap::new();
        let (id, entry) = entry_for(WindowStub, Vec::new());
        modules.insert(id, entry);

        let declared = vec![
            Dependency::on::<MixerStub>(),
            Dependency::on::<WindowStub>(),
            Dependency::on::<DeviceStub>(),
        ];
        let missing = missing_requirements(&modules, &declared);

        // WindowStub is present; the two absent requirements survive in the
        // order they were declared.
        assert_eq!(missing.len(), 2);
        assert_eq!(missing[0], Dependency::on::<MixerStub>());
        assert_eq!(missing[1], Dependency::on::<DeviceStub>());
    }

    #[test]
    fn dependents_scan_counts_unsatisfied_declarations() {
        // DeviceStub declares a requirement on WindowStub even though no
        // WindowStub is registered. Removal checks must still see it.
        let mut modules = HashMap::new();
        let (id, entry) = entry_for(DeviceStub, vec![Dependency::on::<WindowStub>()]);
        modules.insert(id, entry);

        let dependents = dependents_of(&modules, TypeId::of::<WindowStub>());
        assert_eq!(dependents, vec![std::any::type_name::<DeviceStub>()]);
    }

    #[test]
    fn dependents_of_unreferenced_capability_is_empty() {
        let mut modules = HashMap::new();
        let (id, entry) = entry_for(WindowStub, Vec::new());
        modules.insert(id, entry);

        assert!(dependents_of(&modules, TypeId::of::<MixerStub>()).is_empty());
    }
}
