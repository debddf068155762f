pub mod context;
pub mod console_scanner;
pub mod local_notifications;
pub mod prospect_commands;
pub mod reminder_commands;

use std::path::Path;
use std::rc::Rc;

use rusqlite::Connection;

use crate::db::schema;
use crate::ops::persistence_ops;
use context::CLIContext;

/// Run the interactive REPL.
pub fn run(db_path: &Path) {
    println!("Hot Prospects");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let conn = match Connection::open(db_path) {
        Ok(c) => Rc::new(c),
        Err(e) => {
            eprintln!("Error opening database: {}", e);
            return;
        }
    };

    if let Err(e) = schema::initialize(&conn) {
        eprintln!("Error initializing database: {}", e);
        return;
    }

    let mut store = match persistence_ops::load_store(&conn) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading prospects: {}", e);
            return;
        }
    };
    persistence_ops::attach_persistence(&mut store, Rc::clone(&conn));
    tracing::info!(path = %db_path.display(), prospects = store.len(), "session started");

    let mut ctx = CLIContext::new(conn, store.shared());
    reminder_commands::announce_due(&ctx);
    repl_loop(&mut ctx);
}

fn repl_loop(ctx: &mut CLIContext) {
    loop {
        let prompt = format!("{}> ", ctx.view().title());
        let input = match ctx.read_line(&prompt) {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            "list" | "ls" => prospect_commands::list(ctx),
            "tab" => prospect_commands::tab(ctx, args),
            "everyone" => prospect_commands::tab(ctx, "everyone"),
            "contacted" => prospect_commands::tab(ctx, "contacted"),
            "uncontacted" => prospect_commands::tab(ctx, "uncontacted"),
            "sort" => prospect_commands::sort(ctx, args),
            "scan" => prospect_commands::scan(ctx, args),

            "contact" | "mark-contacted" => prospect_commands::contact(ctx, args),
            "uncontact" | "mark-uncontacted" => prospect_commands::uncontact(ctx, args),
            "remind" => prospect_commands::remind(ctx, args),
            "reminders" => reminder_commands::list(ctx),

            _ => println!("Unknown command: {}. Type 'help' for commands.", command),
        }
    }
}

fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!(r#"
COMMANDS:

  Lists:
    list                    Show the current tab
    tab <name>              Switch tab: everyone, contacted, uncontacted
    everyone | contacted | uncontacted
                            Shortcuts for 'tab'
    sort [name|date]        Choose the sort order (asks when omitted)

  Prospects:
    scan [file]             Scan a code; reads the decoded text from file,
                            or asks you to paste it
    contact <row|name>      Mark Contacted
    uncontact <row|name>    Mark Uncontacted
    remind <row|name>       Remind Me at 09:00

  Reminders:
    reminders               Show scheduled reminders

  Other:
    help                    Show this help
    exit / quit / q         Exit

TIPS:
  - A scanned code must hold exactly two lines: name, then email
  - Row numbers refer to the current tab as 'list' shows it"#);
}
