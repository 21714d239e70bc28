//! stockdesk — interactive inventory tracker.
//!
//! All state is process-scoped: the store starts empty and nothing survives
//! exit. Diagnostics go to stderr via `RUST_LOG`; the menu owns stdout.

mod actions;
mod menu;
mod terminal;

use std::io;

use stockdesk_inventory::InventoryStore;

use crate::terminal::console::Console;

fn main() -> anyhow::Result<()> {
    stockdesk_observability::init();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let mut store = InventoryStore::new();

    menu::run(&mut store, &mut console)
}
