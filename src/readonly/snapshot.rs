use crate::handler::{InvocationResult, OperationTable, invoke_segments};
use crate::path::segments;
use crate::pattern::score_segments;
use crate::router::{Route, RouteMatch, RouterOptions, TieBreak};
use crate::types::RouteId;
use std::fmt;

use super::{ReadOnlyError, ReadOnlyResult};

/// Immutable route table produced by sealing a [`Router`](crate::router::Router).
///
/// All lookups are pure functions of the request path; a snapshot can be
/// shared across threads behind an `Arc`.
pub struct RouterReadOnly<R, O> {
    routes: Vec<Route>,
    operations: OperationTable<R, O>,
    options: RouterOptions,
}

impl<R, O> RouterReadOnly<R, O> {
    pub(crate) fn new(
        routes: Vec<Route>,
        operations: OperationTable<R, O>,
        options: RouterOptions,
    ) -> Self {
        Self {
            routes,
            operations,
            options,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn route(&self, id: RouteId) -> Option<&Route> {
        self.routes.get(id)
    }

    pub fn operations(&self) -> &OperationTable<R, O> {
        &self.operations
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Score of every route, in registration order, including zero scores.
    pub fn score_all(&self, path: &str) -> Vec<RouteMatch> {
        let request = segments(path);
        let score_options = self.options.score_options();
        let too_long = request.len() > self.options.max_segments;

        self.routes
            .iter()
            .map(|route| RouteMatch {
                id: route.id(),
                score: if too_long {
                    0
                } else {
                    score_segments(route.pattern(), &request, &score_options)
                },
            })
            .collect()
    }

    /// Highest-scoring route, or `None` when every score is 0.
    #[tracing::instrument(level = "trace", skip(self), fields(path=%path, routes=self.routes.len() as u64))]
    pub fn find(&self, path: &str) -> Option<RouteMatch> {
        let request = segments(path);
        self.find_segments(&request)
    }

    fn find_segments(&self, request: &[&str]) -> Option<RouteMatch> {
        if request.len() > self.options.max_segments {
            return None;
        }

        let score_options = self.options.score_options();
        let mut best: Option<RouteMatch> = None;

        for route in &self.routes {
            let score = score_segments(route.pattern(), request, &score_options);
            if score == 0 {
                continue;
            }

            let replace = match (best, self.options.tie_break) {
                (None, _) => true,
                (Some(current), TieBreak::FirstRegistered) => score > current.score,
                (Some(current), TieBreak::LastRegistered) => score >= current.score,
            };

            if replace {
                best = Some(RouteMatch {
                    id: route.id(),
                    score,
                });
            }
        }

        if let Some(found) = best {
            tracing::trace!(id = found.id, score = found.score, "route selected");
        }

        best
    }

    /// Selects the best route for `path` and invokes its operation.
    pub fn dispatch(&self, receiver: &R, path: &str) -> ReadOnlyResult<O> {
        let request = segments(path);

        let Some(found) = self.find_segments(&request) else {
            return Err(ReadOnlyError::RouteNotFound {
                path: path.to_string(),
            });
        };

        let route = self
            .route(found.id)
            .ok_or_else(|| ReadOnlyError::RouteNotFound {
                path: path.to_string(),
            })?;

        Ok(invoke_segments(
            route.pattern(),
            route.binding(),
            &self.operations,
            receiver,
            &request,
        )?)
    }

    pub fn invoke(&self, route: &Route, receiver: &R, path: &str) -> InvocationResult<O> {
        let request = segments(path);
        invoke_segments(
            route.pattern(),
            route.binding(),
            &self.operations,
            receiver,
            &request,
        )
    }
}

impl<R, O> fmt::Debug for RouterReadOnly<R, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterReadOnly")
            .field("routes", &self.routes)
            .field("operations", &self.operations)
            .field("options", &self.options)
            .finish()
    }
}
