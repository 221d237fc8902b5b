//! # Models Module
//!
//! Models are opaque to the core. The facade only stores them by key and
//! drops them; views and controllers recover the concrete type by
//! downcasting.

use std::any::Any;

use super::registry::KeyedRegistry;

/// Key under which a model is registered with the facade
pub type ModelKey = i32;

/// Upcast helper so boxed models can be downcast to their concrete type
pub trait AsAny: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Marker for application data owned by the facade
pub trait Model: AsAny {}

/// Registry of all models owned by a facade
pub type ModelRegistry = KeyedRegistry<Box<dyn Model>>;

impl KeyedRegistry<Box<dyn Model>> {
    /// Model under `key`, if present and of type `T`
    pub fn get_as<T: Model>(&self, key: ModelKey) -> Option<&T> {
        self.get(key)
            .and_then(|model| (**model).as_any().downcast_ref::<T>())
    }

    /// Mutable model under `key`, if present and of type `T`
    pub fn get_as_mut<T: Model>(&mut self, key: ModelKey) -> Option<&mut T> {
        self.get_mut(key)
            .and_then(|model| (**model).as_any_mut().downcast_mut::<T>())
    }
}
