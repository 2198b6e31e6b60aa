use crate::handler::OperationTable;
use crate::readonly::RouterReadOnly;
use crate::router::{Route, RouteMatch, RouterError, RouterOptions, RouterResult};
use crate::types::RouteId;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, OnceLock};

struct RouterState<R, O> {
    routes: Vec<Route>,
    operations: OperationTable<R, O>,
    readonly: OnceLock<Arc<RouterReadOnly<R, O>>>,
}

impl<R, O> RouterState<R, O> {
    fn compile_route(
        &self,
        id: RouteId,
        path: &str,
        operation_name: &str,
        options: &RouterOptions,
    ) -> RouterResult<Route> {
        let operation =
            self.operations
                .get(operation_name)
                .ok_or_else(|| RouterError::UnknownOperation {
                    path: path.to_string(),
                    operation: operation_name.to_string(),
                })?;

        Ok(Route::compile(
            id,
            path,
            operation,
            &options.compile_options(),
        )?)
    }
}

/// Route table for one receiver type.
///
/// Routes are registered while the router is mutable; [`Router::seal`]
/// freezes them into a [`RouterReadOnly`] snapshot that serves lookups and
/// dispatch without locking.
pub struct Router<R, O> {
    inner: RwLock<RouterState<R, O>>,
    options: RouterOptions,
}

impl<R, O> Router<R, O> {
    pub fn new(operations: OperationTable<R, O>, options: Option<RouterOptions>) -> RouterResult<Self> {
        let options = options.unwrap_or_default();
        options.validate()?;

        Ok(Self {
            inner: RwLock::new(RouterState {
                routes: Vec::new(),
                operations,
                readonly: OnceLock::new(),
            }),
            options,
        })
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    /// Registers `path` for the operation named `operation`; ids follow
    /// registration order.
    #[tracing::instrument(level = "debug", skip(self), fields(path=%path, operation=%operation))]
    pub fn add(&self, path: &str, operation: &str) -> RouterResult<RouteId> {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                path: path.to_string(),
            });
        }

        let id = guard.routes.len();
        let route = guard.compile_route(id, path, operation, &self.options)?;
        tracing::debug!(id, pattern = %route.pattern(), "route registered");
        guard.routes.push(route);
        Ok(id)
    }

    /// Registers every entry or none: the first invalid route aborts the batch.
    pub fn add_bulk<I, P, N>(&self, entries: I) -> RouterResult<Vec<RouteId>>
    where
        I: IntoIterator<Item = (P, N)>,
        P: AsRef<str>,
        N: AsRef<str>,
    {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            let count = entries.into_iter().count();
            return Err(RouterError::BulkAddWhileSealed { count });
        }

        let start = guard.routes.len();
        let mut compiled = Vec::new();
        for (offset, (path, operation)) in entries.into_iter().enumerate() {
            let route = guard.compile_route(
                start + offset,
                path.as_ref(),
                operation.as_ref(),
                &self.options,
            )?;
            compiled.push(route);
        }

        let ids: Vec<RouteId> = compiled.iter().map(Route::id).collect();
        tracing::debug!(count = ids.len(), "routes registered in bulk");
        guard.routes.extend(compiled);
        Ok(ids)
    }

    /// Freezes the route table. Sealing again returns the existing snapshot.
    pub fn seal(&self) -> Arc<RouterReadOnly<R, O>> {
        let mut guard = self.inner.write();

        if let Some(existing) = guard.readonly.get() {
            return Arc::clone(existing);
        }

        let routes = std::mem::take(&mut guard.routes);
        let operations = std::mem::take(&mut guard.operations);
        tracing::debug!(routes = routes.len(), "router sealed");

        let snapshot = Arc::new(RouterReadOnly::new(routes, operations, self.options.clone()));
        let _ = guard.readonly.set(Arc::clone(&snapshot));
        snapshot
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().readonly.get().is_some()
    }

    pub fn find(&self, path: &str) -> RouterResult<Option<RouteMatch>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => Ok(ro.find(path)),
            None => Err(RouterError::FindWhileMutable),
        }
    }

    pub fn dispatch(&self, receiver: &R, path: &str) -> RouterResult<O> {
        let ro = self.get_readonly().map_err(|_| RouterError::FindWhileMutable)?;
        Ok(ro.dispatch(receiver, path)?)
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouterReadOnly<R, O>>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => Ok(Arc::clone(ro)),
            None => Err(RouterError::ReadOnlyUnavailable),
        }
    }
}

impl<R, O> fmt::Debug for Router<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.read();
        f.debug_struct("Router")
            .field("routes", &guard.routes)
            .field("operations", &guard.operations)
            .field("sealed", &guard.readonly.get().is_some())
            .field("options", &self.options)
            .finish()
    }
}
