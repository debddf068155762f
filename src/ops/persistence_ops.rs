use std::rc::Rc;

use rusqlite::Connection;

use crate::db::prospect_repo;
use crate::error::ProspectResult;
use crate::store::{ProspectStore, StoreChange, SubscriptionId};

/// Build a store from everything saved so far.
pub fn load_store(conn: &Connection) -> ProspectResult<ProspectStore> {
    let people = prospect_repo::find_all(conn)?;
    tracing::debug!(count = people.len(), "loaded prospects");
    Ok(ProspectStore::with_people(people))
}

/// Write every store change through to `conn`. Write failures are logged;
/// the in-memory store stays authoritative for the session.
pub fn attach_persistence(store: &mut ProspectStore, conn: Rc<Connection>) -> SubscriptionId {
    store.subscribe(move |change| {
        if let Err(e) = save_change(&conn, change) {
            tracing::error!(id = %change.prospect().id, "failed to save prospect: {}", e);
        }
    })
}

pub fn save_change(conn: &Connection, change: &StoreChange) -> ProspectResult<()> {
    match change {
        StoreChange::Added(p) => prospect_repo::insert(conn, p),
        StoreChange::Toggled(p) => {
            if !prospect_repo::set_contacted(conn, p.id, p.is_contacted)? {
                tracing::warn!(id = %p.id, "toggled prospect has no saved row");
            }
            Ok(())
        }
    }
}
