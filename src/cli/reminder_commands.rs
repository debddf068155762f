use chrono::Local;

use crate::cli::context::CLIContext;
use crate::ops::reminder_ops;
use crate::queries::reminder_queries;

pub fn list(ctx: &mut CLIContext) {
    let pending = match reminder_queries::upcoming_reminders(&ctx.conn) {
        Ok(r) => r,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };

    if pending.is_empty() {
        println!("No reminders scheduled.");
        return;
    }

    println!("Scheduled reminders ({}):", pending.len());
    for r in &pending {
        println!(
            "  {}  {} ({}) {}",
            r.fire_at.format("%Y-%m-%d %H:%M"),
            r.request.content.title,
            r.request.content.subtitle,
            r.request.trigger.describe(),
        );
    }
}

/// Show reminders whose time has come since the last session.
pub fn announce_due(ctx: &CLIContext) {
    let due = match reminder_ops::deliver_due(&ctx.conn, Local::now().naive_local()) {
        Ok(d) => d,
        Err(e) => {
            ctx.print_error(&e);
            return;
        }
    };
    for r in &due {
        println!("Reminder: {} ({})", r.request.content.title, r.request.content.subtitle);
    }
    if !due.is_empty() {
        println!();
    }
}
