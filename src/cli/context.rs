use std::cell::RefCell;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;

use rusqlite::Connection;

use crate::cli::console_scanner::ConsoleScanner;
use crate::cli::local_notifications::LocalNotificationCenter;
use crate::model::FilterType;
use crate::platform::NotificationCenter;
use crate::queries::prospect_queries::ProspectRow;
use crate::store::SharedStore;
use crate::view::ProspectsView;

pub struct CLIContext {
    pub conn: Rc<Connection>,
    pub store: SharedStore,
    /// File the next `scan` reads its decoded text from.
    pub scan_file: Rc<RefCell<Option<PathBuf>>>,
    views: Vec<ProspectsView>,
    active: usize,
}

impl CLIContext {
    pub fn new(conn: Rc<Connection>, store: SharedStore) -> Self {
        let scan_file = Rc::new(RefCell::new(None));
        let notifications: Rc<dyn NotificationCenter> =
            Rc::new(LocalNotificationCenter::new(Rc::clone(&conn)));

        let views = FilterType::ALL
            .iter()
            .map(|&filter| {
                ProspectsView::new(
                    filter,
                    Rc::clone(&store),
                    Box::new(ConsoleScanner::new(Rc::clone(&scan_file))),
                    Rc::clone(&notifications),
                )
            })
            .collect();

        Self {
            conn,
            store,
            scan_file,
            views,
            active: 0,
        }
    }

    pub fn view(&mut self) -> &mut ProspectsView {
        &mut self.views[self.active]
    }

    /// Switch to the tab showing `filter`.
    pub fn select_tab(&mut self, filter: FilterType) {
        if let Some(i) = self.views.iter().position(|v| v.filter() == filter) {
            self.active = i;
        }
    }

    /// Prompt and read a line from stdin. Returns None on EOF.
    pub fn read_line(&self, prompt: &str) -> Option<String> {
        read_line(prompt)
    }

    /// Read a line, trimmed.
    pub fn prompt(&self, prompt: &str) -> Option<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }

    /// Resolve a row of the active tab by its 1-based number or by a name/email
    /// fragment. Prints why when nothing or too much matches.
    pub fn find_row(&mut self, args: &str) -> Option<ProspectRow> {
        let query = args.trim();
        if query.is_empty() {
            return None;
        }

        let rows = self.view().rows().to_vec();
        if let Ok(n) = query.parse::<usize>() {
            return match rows.get(n.wrapping_sub(1)) {
                Some(row) => Some(row.clone()),
                None => {
                    println!("No row {} in this list", n);
                    None
                }
            };
        }

        let lower = query.to_lowercase();
        let matches: Vec<&ProspectRow> = rows
            .iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&lower)
                    || r.email_address.to_lowercase().contains(&lower)
            })
            .collect();

        match matches.len() {
            0 => {
                println!("No prospect found matching '{}'", query);
                None
            }
            1 => Some(matches[0].clone()),
            _ => {
                let exact: Vec<&&ProspectRow> = matches
                    .iter()
                    .filter(|r| r.name.eq_ignore_ascii_case(query))
                    .collect();
                if exact.len() == 1 {
                    return Some((*exact[0]).clone());
                }
                println!("Multiple matches found:");
                for r in &matches {
                    let n = rows.iter().position(|row| row.id == r.id).map(|i| i + 1).unwrap_or(0);
                    println!("  {}. {} <{}>", n, r.name, r.email_address);
                }
                println!("Please be more specific, or use the row number.");
                None
            }
        }
    }

    pub fn print_error(&self, e: &crate::error::ProspectError) {
        println!("Error: {}", e);
    }
}

pub(crate) fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
        Err(_) => None,
    }
}
