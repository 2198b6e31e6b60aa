use hashbrown::HashMap;
use std::fmt;

use super::{IntoOperation, Operation};

/// Operations available on a receiver type, looked up by name when routes
/// are registered and again when they are invoked.
pub struct OperationTable<R, O> {
    operations: HashMap<Box<str>, Operation<R, O>>,
}

impl<R, O> OperationTable<R, O> {
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    pub fn with<F, M>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: IntoOperation<R, O, M>,
    {
        self.register(name, handler);
        self
    }

    pub fn register<F, M>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        F: IntoOperation<R, O, M>,
    {
        self.insert(Operation::new(name, handler));
        self
    }

    /// Returns the operation previously registered under the same name.
    pub fn insert(&mut self, operation: Operation<R, O>) -> Option<Operation<R, O>> {
        self.operations
            .insert(operation.name().into(), operation)
    }

    pub fn get(&self, name: &str) -> Option<&Operation<R, O>> {
        self.operations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operations.keys().map(|name| &**name)
    }
}

impl<R, O> Default for OperationTable<R, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, O> Clone for OperationTable<R, O> {
    fn clone(&self) -> Self {
        Self {
            operations: self.operations.clone(),
        }
    }
}

impl<R, O> fmt::Debug for OperationTable<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.operations.values()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn later_registration_replaces_earlier() {
        let mut table: OperationTable<(), i32> = OperationTable::new();
        table.register("op", |_: &()| Ok::<_, Infallible>(1));
        let previous = table.insert(Operation::new("op", |_: &(), v: i32| {
            Ok::<_, Infallible>(v)
        }));
        assert!(previous.is_some());
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("op").map(|op| op.signature().len()), Some(1));
    }

    #[test]
    fn lookup_is_by_exact_name() {
        let table: OperationTable<(), ()> =
            OperationTable::new().with("greet", |_: &(), _: String| Ok::<_, Infallible>(()));
        assert!(table.contains("greet"));
        assert!(!table.contains("Greet"));
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["greet"]);
    }
}
