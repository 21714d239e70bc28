//! Interactive menu loop.

use std::io::{BufRead, Write};

use colored::Colorize;

use stockdesk_inventory::InventoryStore;

use crate::actions::{self, ActionError};
use crate::terminal::console::Console;

const MENU_WIDTH: usize = 50;

/// One operator-facing action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Update,
    Delete,
    View,
    Search,
    Issue,
    Restock,
    Exit,
}

impl MenuAction {
    fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(Self::Add),
            2 => Some(Self::Update),
            3 => Some(Self::Delete),
            4 => Some(Self::View),
            5 => Some(Self::Search),
            6 => Some(Self::Issue),
            7 => Some(Self::Restock),
            0 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Drive the menu until the operator exits or input ends.
///
/// Domain failures are printed as `Error:` lines and the loop continues;
/// IO failures (including exhausted input) end the session.
pub fn run<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    console.line(&"=== INVENTORY MANAGEMENT SYSTEM ===".bold().to_string())?;

    loop {
        show_menu(console)?;
        let choice = console.read_i64("Enter your choice: ")?;

        match MenuAction::from_choice(choice) {
            None => console.line("Invalid choice!")?,
            Some(MenuAction::Exit) => {
                console.line("Thank you for using the system!")?;
                return Ok(());
            }
            Some(action) => match actions::dispatch(action, store, console) {
                Ok(()) => {}
                Err(ActionError::Domain(err)) => console.error(&err)?,
                Err(ActionError::Io(err)) => return Err(err.into()),
            },
        }

        console.pause()?;
    }
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> std::io::Result<()> {
    console.line(&format!("\n{}", "=".repeat(MENU_WIDTH)))?;
    console.line("1. Add Product")?;
    console.line("2. Update Product")?;
    console.line("3. Delete Product")?;
    console.line("4. View Inventory")?;
    console.line("5. Search Product")?;
    console.line("6. Issue Stock")?;
    console.line("7. Restock")?;
    console.line("0. Exit")?;
    console.line(&"=".repeat(MENU_WIDTH))
}
