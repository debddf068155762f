use crate::model::{FilterType, Id, Prospect, SortType};
use crate::store::ProspectStore;

/// A gesture offered on a row. Which ones appear depends on the contacted flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    MarkContacted,
    MarkUncontacted,
    RemindMe,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::MarkContacted => "Mark Contacted",
            RowAction::MarkUncontacted => "Mark Uncontacted",
            RowAction::RemindMe => "Remind Me",
        }
    }
}

/// One rendered line of a prospect list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProspectRow {
    pub id: Id<Prospect>,
    pub name: String,
    pub email_address: String,
    pub show_contacted_badge: bool,
    pub actions: Vec<RowAction>,
}

pub fn actions_for(prospect: &Prospect) -> Vec<RowAction> {
    if prospect.is_contacted {
        vec![RowAction::MarkUncontacted]
    } else {
        vec![RowAction::MarkContacted, RowAction::RemindMe]
    }
}

/// Prospects passing `filter`, stably ordered by `sort`.
pub fn visible_prospects(store: &ProspectStore, filter: FilterType, sort: SortType) -> Vec<Prospect> {
    let mut people: Vec<Prospect> = store
        .people()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect();

    match sort {
        SortType::Name => people.sort_by(|a, b| a.name.cmp(&b.name)),
        SortType::CreationDate => people.sort_by(|a, b| a.creation_date.cmp(&b.creation_date)),
    }
    people
}

pub fn rows(store: &ProspectStore, filter: FilterType, sort: SortType) -> Vec<ProspectRow> {
    visible_prospects(store, filter, sort)
        .into_iter()
        .map(|p| ProspectRow {
            id: p.id,
            show_contacted_badge: filter == FilterType::None && p.is_contacted,
            actions: actions_for(&p),
            name: p.name,
            email_address: p.email_address,
        })
        .collect()
}

pub fn count_contacted(store: &ProspectStore) -> (usize, usize) {
    let contacted = store.people().filter(|p| p.is_contacted).count();
    (contacted, store.len() - contacted)
}
