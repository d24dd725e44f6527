//! Browser driver for the generic resource manager.
//!
//! DESIGN
//! ======
//! The manager decides what to send and how to fold the reply back in; these
//! helpers only move its requests through the gateway on the browser event
//! loop. Mutations re-check the persisted session first and refetch the list
//! after success. A screen whose summary depends on records edited below it
//! provides a [`Revision`]; every successful mutation bumps it.

use content::filters::Query;
use content::manager::{ResourceManager, Submission};
use content::types::RecordId;
use content::{Editable, Resource as _};
use leptos::prelude::*;

use crate::net::api::{gateway, logged, spawn};
use crate::state::auth::{AuthState, BrowserSessionStore, ensure_session};
use crate::util::confirm::confirm;
use crate::util::time::now_ms;

/// Counter of successful mutations under one screen.
#[derive(Clone, Copy, Debug)]
pub struct Revision(RwSignal<u32>);

impl Revision {
    /// Create a revision and provide it to child components.
    pub fn provide() -> Self {
        let revision = Self(RwSignal::new(0));
        provide_context(revision);
        revision
    }

    /// Subscribe the running effect to later bumps.
    pub fn track(self) {
        self.0.track();
    }

    pub fn bump(self) {
        self.0.update(|n| *n = n.wrapping_add(1));
    }
}

fn bump(revision: Option<Revision>) {
    if let Some(revision) = revision {
        revision.bump();
    }
}

/// Re-check the session before a mutation. An expired session signs the
/// user out, and the admin layout then redirects to sign-in.
pub fn require_session(auth: RwSignal<AuthState>) -> bool {
    match ensure_session(&BrowserSessionStore, now_ms()) {
        Ok(()) => true,
        Err(reason) => {
            #[cfg(feature = "hydrate")]
            log::info!("{reason}");
            #[cfg(not(feature = "hydrate"))]
            let _ = reason;
            auth.set(AuthState::default());
            false
        }
    }
}

/// Fetch the list for `query`; stale replies are dropped by the manager.
pub fn load<R: Editable>(manager: RwSignal<ResourceManager<R>>, query: Query) {
    let Some(ticket) = manager.try_update(ResourceManager::begin_load) else {
        return;
    };
    spawn(async move {
        let resp = logged(R::KIND.label(), gateway().list::<R>(&query).await);
        manager.update(|m| {
            m.finish_load(ticket, resp);
        });
    });
}

/// Create or update from the form, per the manager's mode.
pub fn submit<R: Editable>(
    manager: RwSignal<ResourceManager<R>>,
    query: Query,
    auth: RwSignal<AuthState>,
    revision: Option<Revision>,
) {
    if !require_session(auth) {
        return;
    }
    let Some(Some(submission)) = manager.try_update(ResourceManager::prepare_submit) else {
        return;
    };
    spawn(async move {
        let gw = gateway();
        let resp = match submission {
            Submission::Create(draft) => logged("create", gw.create::<R>(&draft).await),
            Submission::Update(id, draft) => logged("update", gw.update::<R>(id, &draft).await),
        };
        if manager.try_update(|m| m.finish_submit(&resp)).unwrap_or(false) {
            load(manager, query);
            bump(revision);
        }
    });
}

/// Confirm, then delete one record.
pub fn delete<R: Editable>(
    manager: RwSignal<ResourceManager<R>>,
    id: RecordId,
    query: Query,
    auth: RwSignal<AuthState>,
    revision: Option<Revision>,
) {
    let title = manager.with(|m| m.record(id).map(|r| r.title())).unwrap_or_else(|| format!("#{id}"));
    if !confirm(&format!("Delete {} \"{title}\"?", R::KIND.singular().to_lowercase())) {
        return;
    }
    if !require_session(auth) {
        return;
    }
    spawn(async move {
        let resp = logged("delete", gateway().delete::<R>(id).await);
        if manager.try_update(|m| m.finish_delete(id, &resp)).unwrap_or(false) {
            load(manager, query);
            bump(revision);
        }
    });
}

/// Load `id` into the form and scroll it into view.
pub fn edit<R: Editable>(manager: RwSignal<ResourceManager<R>>, id: RecordId) {
    manager.update(|m| {
        m.edit(id);
    });
    #[cfg(feature = "hydrate")]
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
