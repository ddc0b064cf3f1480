//! # Schema Registry
//!
//! Maps the runtime type of a domain object to the schema that describes it.

use super::provider::{Schema, SchemaProvider};
use crate::error::EncodeError;
use crate::resource::{runtime_type, Resource};
use std::any::TypeId;
use std::collections::HashMap;
use tracing::debug;

/// Container of schemas, keyed by the `TypeId` of the resource they describe.
#[derive(Default)]
pub struct SchemaRegistry {
    schemas: HashMap<TypeId, Box<dyn SchemaProvider>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `schema` for `S::Resource`, replacing any earlier schema for that type.
    pub fn register<S: Schema>(&mut self, schema: S) -> &mut Self {
        let resource_type = Schema::resource_type(&schema).to_string();
        let replaced = self
            .schemas
            .insert(TypeId::of::<S::Resource>(), Box::new(schema))
            .is_some();
        debug!(resource_type, replaced, "Schema registered");
        self
    }

    /// Builder-style [`register`](Self::register).
    pub fn with<S: Schema>(mut self, schema: S) -> Self {
        self.register(schema);
        self
    }

    /// The schema for the runtime type of `resource`.
    pub fn get(&self, resource: &dyn Resource) -> Result<&dyn SchemaProvider, EncodeError> {
        self.schemas
            .get(&runtime_type(resource))
            .map(|schema| schema.as_ref())
            .ok_or_else(|| EncodeError::SchemaNotFound(resource.type_name()))
    }

    pub fn contains<R: Resource>(&self) -> bool {
        self.schemas.contains_key(&TypeId::of::<R>())
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Planet {
        name: &'static str,
    }
    struct Moon;

    struct PlanetSchema(&'static str);

    impl Schema for PlanetSchema {
        type Resource = Planet;

        fn resource_type(&self) -> &str {
            self.0
        }

        fn id(&self, planet: &Planet) -> String {
            planet.name.to_lowercase()
        }
    }

    #[test]
    fn test_lookup_by_runtime_type() {
        let registry = SchemaRegistry::new().with(PlanetSchema("planets"));
        let mars = Planet { name: "Mars" };

        let schema = registry.get(&mars).unwrap();
        assert_eq!(schema.resource_type(), "planets");
        assert_eq!(schema.id(&mars).unwrap(), "mars");
        assert!(registry.contains::<Planet>());
        assert!(!registry.contains::<Moon>());
    }

    #[test]
    fn test_missing_schema_names_the_type() {
        let registry = SchemaRegistry::new().with(PlanetSchema("planets"));
        match registry.get(&Moon) {
            Err(EncodeError::SchemaNotFound(name)) => assert!(name.ends_with("Moon")),
            Err(other) => panic!("unexpected error {}", other),
            Ok(_) => panic!("Moon has no schema"),
        }
    }

    #[test]
    fn test_register_replaces_existing_schema() {
        let mut registry = SchemaRegistry::new();
        registry.register(PlanetSchema("planets")).register(PlanetSchema("worlds"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&Planet { name: "Venus" }).unwrap().resource_type(), "worlds");
    }
}
