#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use prospects::model::{AuthorizationOption, AuthorizationStatus, FilterType, NotificationRequest, Prospect};
use prospects::platform::{
    AuthorizationCompletion, NotificationCenter, NotificationError, ScanCompletion, ScanResult,
    Scanner, StatusCompletion,
};
use prospects::store::{ProspectStore, SharedStore};
use prospects::view::ProspectsView;

pub type EventLog = Rc<RefCell<Vec<String>>>;

/// Replays scripted results. In deferred mode the completion is parked until
/// `finish` is called, like a camera that answers later.
pub struct FakeScanner {
    script: VecDeque<ScanResult>,
    deferred: bool,
    parked: Rc<RefCell<Option<ScanCompletion>>>,
    log: EventLog,
}

impl FakeScanner {
    pub fn immediate(script: Vec<ScanResult>, log: EventLog) -> Self {
        Self {
            script: script.into(),
            deferred: false,
            parked: Rc::new(RefCell::new(None)),
            log,
        }
    }

    pub fn deferred(log: EventLog) -> (Self, Rc<RefCell<Option<ScanCompletion>>>) {
        let parked = Rc::new(RefCell::new(None));
        let scanner = Self {
            script: VecDeque::new(),
            deferred: true,
            parked: Rc::clone(&parked),
            log,
        };
        (scanner, parked)
    }
}

impl Scanner for FakeScanner {
    fn present(&mut self, completion: ScanCompletion) {
        self.log.borrow_mut().push("present".into());
        if self.deferred {
            *self.parked.borrow_mut() = Some(completion);
            return;
        }
        let result = self.script.pop_front().expect("no scripted scan result");
        completion(result);
    }

    fn dismiss(&mut self) {
        self.log.borrow_mut().push("dismiss".into());
    }
}

pub fn finish(parked: &Rc<RefCell<Option<ScanCompletion>>>, result: ScanResult) {
    let completion = parked.borrow_mut().take().expect("scanner was not presented");
    completion(result);
}

/// Records every call; answers authorization requests with `grant`.
pub struct FakeNotificationCenter {
    pub status: Cell<AuthorizationStatus>,
    pub grant: Result<bool, NotificationError>,
    pub authorization_requests: RefCell<Vec<Vec<AuthorizationOption>>>,
    pub added: RefCell<Vec<NotificationRequest>>,
}

impl FakeNotificationCenter {
    pub fn new(status: AuthorizationStatus, grant: Result<bool, NotificationError>) -> Rc<Self> {
        Rc::new(Self {
            status: Cell::new(status),
            grant,
            authorization_requests: RefCell::new(Vec::new()),
            added: RefCell::new(Vec::new()),
        })
    }

    pub fn authorized() -> Rc<Self> {
        Self::new(AuthorizationStatus::Authorized, Ok(true))
    }
}

impl NotificationCenter for FakeNotificationCenter {
    fn authorization_status(&self, completion: StatusCompletion) {
        completion(self.status.get());
    }

    fn request_authorization(&self, options: &[AuthorizationOption], completion: AuthorizationCompletion) {
        self.authorization_requests.borrow_mut().push(options.to_vec());
        if let Ok(true) = self.grant {
            self.status.set(AuthorizationStatus::Authorized);
        }
        completion(self.grant.clone());
    }

    fn add(&self, request: NotificationRequest) {
        self.added.borrow_mut().push(request);
    }
}

pub fn view_with(
    filter: FilterType,
    store: &SharedStore,
    scanner: FakeScanner,
    center: &Rc<FakeNotificationCenter>,
) -> ProspectsView {
    let center: Rc<dyn NotificationCenter> = center.clone();
    ProspectsView::new(filter, Rc::clone(store), Box::new(scanner), center)
}

pub fn empty_store() -> SharedStore {
    ProspectStore::new().shared()
}

pub fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap()
}

pub fn prospect(name: &str, email: &str, created: DateTime<Utc>, contacted: bool) -> Prospect {
    let mut p = Prospect::created_at(created);
    p.name = name.into();
    p.email_address = email.into();
    p.is_contacted = contacted;
    p
}
