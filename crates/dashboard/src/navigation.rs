//! Dashboard routes and the navigation seam.
//!
//! # Route Structure
//!
//! ```text
//! /                                    - Root (opens the store-creation modal)
//! /sign-in                             - Hosted sign-in page
//! /{storeId}                           - Store overview
//! /{storeId}/settings                  - Store settings form
//! /{storeId}/billboards                - Billboard list
//! /{storeId}/billboards/{billboardId}  - Billboard form (edit)
//! ```

use core::fmt;

use storepee_core::{BillboardId, StoreId};

/// A page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardRoute {
    Root,
    SignIn,
    Store(StoreId),
    Settings(StoreId),
    Billboards(StoreId),
    Billboard(StoreId, BillboardId),
}

impl DashboardRoute {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::SignIn => "/sign-in".to_string(),
            Self::Store(store_id) => format!("/{store_id}"),
            Self::Settings(store_id) => format!("/{store_id}/settings"),
            Self::Billboards(store_id) => format!("/{store_id}/billboards"),
            Self::Billboard(store_id, billboard_id) => {
                format!("/{store_id}/billboards/{billboard_id}")
            }
        }
    }
}

impl fmt::Display for DashboardRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Router of the host application.
pub trait Navigator {
    /// Re-fetch the data of the current route.
    fn refresh(&self);

    /// Client-side navigation to `route`.
    fn push(&self, route: &DashboardRoute);

    /// Full page load of `route`, discarding client state.
    fn assign(&self, route: &DashboardRoute);
}

/// Where a controller goes after a successful save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Refresh the current route and stay on it.
    Stay,
    /// Refresh, then push the route.
    Push(DashboardRoute),
    /// Hard navigation to the route.
    Assign(DashboardRoute),
}

impl Navigation {
    /// Carry out this navigation on `navigator`.
    pub fn apply<N: Navigator + ?Sized>(&self, navigator: &N) {
        match self {
            Self::Stay => navigator.refresh(),
            Self::Push(route) => {
                navigator.refresh();
                navigator.push(route);
            }
            Self::Assign(route) => navigator.assign(route),
        }
    }
}
