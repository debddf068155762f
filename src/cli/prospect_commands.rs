use std::path::PathBuf;

use crate::cli::context::CLIContext;
use crate::model::{FilterType, SortType};
use crate::queries::prospect_queries::{self, RowAction};

pub fn list(ctx: &mut CLIContext) {
    let (contacted, uncontacted) = prospect_queries::count_contacted(&ctx.store.borrow());
    let view = ctx.view();
    let title = view.title();
    let sort = view.sort_by();
    let rows = view.rows().to_vec();

    println!("{} ({}), sorted {}", title, rows.len(), sort.display_name().to_lowercase());
    if rows.is_empty() {
        println!("  Nobody here yet. Use 'scan' to add someone.");
        return;
    }
    println!();
    for (i, row) in rows.iter().enumerate() {
        let badge = if row.show_contacted_badge { "  [contacted]" } else { "" };
        let actions: Vec<&str> = row.actions.iter().map(|a| a.label()).collect();
        println!("  {}. {}{}", i + 1, row.name, badge);
        println!("     {}  ({})", row.email_address, actions.join(" | "));
    }
    println!();
    println!("Total {}: {} contacted, {} uncontacted", contacted + uncontacted, contacted, uncontacted);
}

pub fn tab(ctx: &mut CLIContext, args: &str) {
    match FilterType::from_tab_name(args) {
        Some(filter) => {
            ctx.select_tab(filter);
            println!("Showing {}", filter.title());
        }
        None => println!("Usage: tab <everyone|contacted|uncontacted>"),
    }
}

pub fn sort(ctx: &mut CLIContext, args: &str) {
    ctx.view().request_sort();

    let choice = if !args.is_empty() {
        SortType::from_option_name(args)
    } else {
        println!("Sort By");
        for (i, option) in SortType::ALL.iter().enumerate() {
            println!("  {}. {}", i + 1, option.display_name());
        }
        ctx.prompt("Choice (Enter to cancel): ").and_then(|s| {
            s.parse::<usize>()
                .ok()
                .and_then(|i| SortType::ALL.get(i.wrapping_sub(1)).copied())
                .or_else(|| SortType::from_option_name(&s))
        })
    };

    match choice {
        Some(sort) => {
            ctx.view().choose_sort(sort);
            println!("Sorted {}", sort.display_name().to_lowercase());
        }
        None => {
            ctx.view().cancel_sort();
            if !args.is_empty() {
                println!("Unknown sort '{}'. Use 'name' or 'date'.", args);
            }
        }
    }
}

pub fn scan(ctx: &mut CLIContext, args: &str) {
    if !args.is_empty() {
        *ctx.scan_file.borrow_mut() = Some(PathBuf::from(args));
    }

    let before = ctx.store.borrow().len();
    let view = ctx.view();
    view.start_scan();
    view.process_events();
    let after = ctx.store.borrow().len();

    if after > before {
        let store = ctx.store.borrow();
        if let Some(p) = store.people().last() {
            println!("Added {} <{}>", p.name, p.email_address);
        }
    }
}

pub fn contact(ctx: &mut CLIContext, args: &str) {
    run_action(ctx, args, RowAction::MarkContacted, "contact");
}

pub fn uncontact(ctx: &mut CLIContext, args: &str) {
    run_action(ctx, args, RowAction::MarkUncontacted, "uncontact");
}

pub fn remind(ctx: &mut CLIContext, args: &str) {
    run_action(ctx, args, RowAction::RemindMe, "remind");
}

fn run_action(ctx: &mut CLIContext, args: &str, action: RowAction, command: &str) {
    if args.is_empty() {
        println!("Usage: {} <row number|name>", command);
        return;
    }
    let row = match ctx.find_row(args) {
        Some(r) => r,
        None => return,
    };

    if !ctx.view().perform(row.id, action) {
        let offered: Vec<&str> = row.actions.iter().map(|a| a.label()).collect();
        println!("'{}' isn't available for {}. Try: {}", action.label(), row.name, offered.join(", "));
        return;
    }

    match action {
        RowAction::MarkContacted => println!("Marked {} as contacted", row.name),
        RowAction::MarkUncontacted => println!("Marked {} as uncontacted", row.name),
        RowAction::RemindMe => println!("Reminder requested for {}", row.name),
    }
}
