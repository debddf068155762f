//! One prospect list tab: filter, sort state, rows, and the gestures that
//! reach the store or the host capabilities.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::model::{FilterType, Id, Prospect, SortType};
use crate::ops::{reminder_ops, scan_ops};
use crate::platform::{NotificationCenter, ScanResult, Scanner};
use crate::queries::prospect_queries::{self, ProspectRow, RowAction};
use crate::store::{SharedStore, SubscriptionId};

/// Results delivered by a capability, waiting to be applied by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    ScanCompleted(ScanResult),
}

type Mailbox = Rc<RefCell<VecDeque<ViewEvent>>>;

pub struct ProspectsView {
    filter: FilterType,
    sort_by: SortType,
    is_showing_scanner: bool,
    show_sort_dialog: bool,
    store: SharedStore,
    scanner: Box<dyn Scanner>,
    notifications: Rc<dyn NotificationCenter>,
    subscription: SubscriptionId,
    stale: Rc<Cell<bool>>,
    rows: Vec<ProspectRow>,
    mailbox: Mailbox,
}

impl ProspectsView {
    pub fn new(
        filter: FilterType,
        store: SharedStore,
        scanner: Box<dyn Scanner>,
        notifications: Rc<dyn NotificationCenter>,
    ) -> Self {
        let stale = Rc::new(Cell::new(true));
        let flag = Rc::clone(&stale);
        let subscription = store.borrow_mut().subscribe(move |_| flag.set(true));

        Self {
            filter,
            sort_by: SortType::default(),
            is_showing_scanner: false,
            show_sort_dialog: false,
            store,
            scanner,
            notifications,
            subscription,
            stale,
            rows: Vec::new(),
            mailbox: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    pub fn filter(&self) -> FilterType {
        self.filter
    }

    pub fn title(&self) -> &'static str {
        self.filter.title()
    }

    pub fn sort_by(&self) -> SortType {
        self.sort_by
    }

    pub fn is_showing_scanner(&self) -> bool {
        self.is_showing_scanner
    }

    pub fn is_showing_sort_dialog(&self) -> bool {
        self.show_sort_dialog
    }

    /// Current rows, re-derived if the store or the sort changed since last time.
    pub fn rows(&mut self) -> &[ProspectRow] {
        if self.stale.replace(false) {
            self.rows = prospect_queries::rows(&self.store.borrow(), self.filter, self.sort_by);
        }
        &self.rows
    }

    pub fn request_sort(&mut self) {
        self.show_sort_dialog = true;
    }

    pub fn choose_sort(&mut self, sort: SortType) {
        self.show_sort_dialog = false;
        if self.sort_by != sort {
            self.sort_by = sort;
            self.stale.set(true);
        }
    }

    pub fn cancel_sort(&mut self) {
        self.show_sort_dialog = false;
    }

    /// Present the scanner. Its result is queued and applied by
    /// [`process_events`](Self::process_events).
    pub fn start_scan(&mut self) {
        self.is_showing_scanner = true;
        let mailbox = Rc::clone(&self.mailbox);
        self.scanner.present(Box::new(move |result| {
            mailbox.borrow_mut().push_back(ViewEvent::ScanCompleted(result));
        }));
    }

    /// Apply queued capability results in arrival order. Returns how many ran.
    pub fn process_events(&mut self) -> usize {
        let mut handled = 0;
        loop {
            let next = self.mailbox.borrow_mut().pop_front();
            match next {
                Some(ViewEvent::ScanCompleted(result)) => {
                    self.handle_scan(result);
                }
                None => break,
            }
            handled += 1;
        }
        handled
    }

    /// Dismiss the scanner, then turn a decoded name/email pair into a prospect.
    pub fn handle_scan(&mut self, result: ScanResult) -> Option<Prospect> {
        self.is_showing_scanner = false;
        self.scanner.dismiss();
        scan_ops::apply_scan(&mut self.store.borrow_mut(), result)
    }

    /// Run a row gesture. Returns false if the prospect is unknown or the
    /// action is not offered for its current state.
    pub fn perform(&mut self, id: Id<Prospect>, action: RowAction) -> bool {
        let prospect = match self.store.borrow().get(id) {
            Some(p) => p.clone(),
            None => return false,
        };
        if !prospect_queries::actions_for(&prospect).contains(&action) {
            tracing::debug!(%id, ?action, "action not offered for this prospect");
            return false;
        }

        match action {
            RowAction::MarkContacted | RowAction::MarkUncontacted => {
                self.store.borrow_mut().toggle(id);
            }
            RowAction::RemindMe => reminder_ops::add_notification(&self.notifications, &prospect),
        }
        true
    }
}

impl Drop for ProspectsView {
    fn drop(&mut self) {
        match self.store.try_borrow_mut() {
            Ok(mut store) => {
                store.unsubscribe(self.subscription);
            }
            Err(_) => tracing::debug!(
                subscription = ?self.subscription,
                "store busy while dropping view, listener left subscribed"
            ),
        }
    }
}
