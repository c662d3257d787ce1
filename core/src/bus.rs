//! Bus - Typed Resource Injection
//!
//! Screens receive their collaborators (catalog, auth snapshot, colour scheme,
//! preferences) from a `Bus` handed down from the top of the app instead of
//! reaching into global state.
//!
//! The Bus is keyed by type, never by string.

use crate::error::{CoreError, CoreResult};
use std::any::{Any, TypeId};
use std::collections::HashMap;

/// Type-keyed resource container.
#[derive(Default)]
pub struct Bus {
    resources: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Bus {
    pub fn new() -> Self {
        Bus {
            resources: HashMap::new(),
        }
    }

    /// Insert a resource, replacing any previous value of the same type.
    pub fn insert<T: Send + Sync + 'static>(&mut self, resource: T) {
        self.resources.insert(TypeId::of::<T>(), Box::new(resource));
    }

    /// Builder-style [`Bus::insert`].
    pub fn with<T: Send + Sync + 'static>(mut self, resource: T) -> Self {
        self.insert(resource);
        self
    }

    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.resources
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref())
    }

    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.resources
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut())
    }

    /// Like [`Bus::get`] but reports which resource is missing.
    pub fn require<T: 'static>(&self) -> CoreResult<&T> {
        self.get::<T>()
            .ok_or(CoreError::MissingResource(std::any::type_name::<T>()))
    }

    /// Owned copy of a resource, for consumers that must not hold a borrow.
    pub fn snapshot<T: Clone + 'static>(&self) -> CoreResult<T> {
        self.require::<T>().cloned()
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.resources.contains_key(&TypeId::of::<T>())
    }

    pub fn remove<T: 'static>(&mut self) -> Option<T> {
        self.resources
            .remove(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast().ok())
            .map(|boxed| *boxed)
    }
}

impl std::fmt::Debug for Bus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bus")
            .field("resource_count", &self.resources.len())
            .finish()
    }
}

/// Light or dark appearance, read by screens from the bus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    pub fn is_dark(&self) -> bool {
        matches!(self, ColorScheme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthProvider, AuthSnapshot, Role};
    use crate::config::Preferences;
    use crate::listing::Catalog;
    use crate::seed;

    #[test]
    fn test_screen_resources_resolve_by_type() {
        let catalog = seed::catalog();
        let mut auth = AuthProvider::new();
        let mut bus = Bus::new()
            .with(catalog.clone())
            .with(auth.snapshot())
            .with(ColorScheme::default());

        assert_eq!(bus.require::<Catalog>().unwrap().len(), catalog.len());
        assert!(!bus.require::<AuthSnapshot>().unwrap().is_signed_in());
        assert!(!bus.require::<ColorScheme>().unwrap().is_dark());

        bus.insert(auth.sign_in(Role::Seller));
        assert!(bus.get::<AuthSnapshot>().unwrap().is_seller());
        assert!(bus.get::<Preferences>().is_none());
    }

    #[test]
    fn test_require_reports_missing_type() {
        let bus = Bus::new().with(ColorScheme::Dark);
        assert!(bus.require::<ColorScheme>().unwrap().is_dark());

        let err = bus.require::<u64>().unwrap_err();
        assert!(err.to_string().contains("u64"));
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut bus = Bus::new().with(vec![1, 2, 3]);
        let snap = bus.snapshot::<Vec<i32>>().unwrap();

        if let Some(v) = bus.get_mut::<Vec<i32>>() {
            v.push(4);
        }

        assert_eq!(snap, vec![1, 2, 3]);
        assert_eq!(bus.remove::<Vec<i32>>(), Some(vec![1, 2, 3, 4]));
        assert!(!bus.contains::<Vec<i32>>());
    }
}
