//! State

use std::sync::Arc;

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use trolley_app::context::AppContext;

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self { app }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }

    /// Pull the injected state back out of a request's depot.
    ///
    /// Only fails when the router was assembled without the state hoop,
    /// which no request can recover from.
    pub(crate) fn from_depot(depot: &Depot) -> Result<&Arc<Self>, StatusError> {
        depot.obtain::<Arc<Self>>().map_err(|_missing| {
            error!("application state missing from depot");

            StatusError::internal_server_error()
        })
    }
}
