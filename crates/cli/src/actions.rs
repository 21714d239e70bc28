//! Menu action handlers: prompt, call the store, render the outcome.

use std::io::{self, BufRead, Write};

use colored::Colorize;
use thiserror::Error;
use tracing::debug;

use stockdesk_core::DomainError;
use stockdesk_inventory::{InventoryStore, ProductId, ProductPatch};

use crate::menu::MenuAction;
use crate::terminal::console::Console;
use crate::terminal::table;

/// Failure of one menu action. Domain errors are recoverable and reported to
/// the operator; IO errors end the session.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

type ActionResult = Result<(), ActionError>;

pub fn dispatch<R: BufRead, W: Write>(
    action: MenuAction,
    store: &mut InventoryStore,
    console: &mut Console<R, W>,
) -> ActionResult {
    match action {
        MenuAction::Add => add_product(store, console),
        MenuAction::Update => update_product(store, console),
        MenuAction::Delete => delete_product(store, console),
        MenuAction::View => view_inventory(store, console),
        MenuAction::Search => search_products(store, console),
        MenuAction::Issue => issue_stock(store, console),
        MenuAction::Restock => restock_product(store, console),
        // Exit never reaches dispatch; the loop intercepts it.
        MenuAction::Exit => Ok(()),
    }
}

fn read_id<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<ProductId, ActionError> {
    let raw = console.prompt("Enter Product ID: ")?;
    Ok(raw.parse::<ProductId>()?)
}

fn add_product<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    console: &mut Console<R, W>,
) -> ActionResult {
    let id = read_id(console)?;
    // Report a taken id before dragging the operator through the remaining
    // prompts.
    if store.exists(&id) {
        return Err(DomainError::already_exists(id.as_str()).into());
    }

    let name = console.prompt("Enter Name: ")?;
    let price = console.read_f64("Enter Price: ")?;
    let quantity = console.read_i64("Enter Quantity: ")?;

    let product = store.add(id, name, price, quantity)?;
    debug!(id = %product.id(), "product added");
    console.success("Product added successfully")?;
    Ok(())
}

fn update_product<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    console: &mut Console<R, W>,
) -> ActionResult {
    let id = read_id(console)?;
    let current = store.get(&id).ok_or(DomainError::NotFound)?;
    console.line(&format!("Current: {current}"))?;

    let mut patch = ProductPatch::default();
    if console.confirm("Update name?")? {
        patch.name = Some(console.prompt("Enter new name: ")?);
    }
    if console.confirm("Update price?")? {
        patch.price = Some(console.read_f64("Enter new price: ")?);
    }
    if console.confirm("Update quantity?")? {
        patch.quantity = Some(console.read_i64("Enter new quantity: ")?);
    }

    store.update(&id, patch)?;
    debug!(id = %id, "product updated");
    console.success("Product updated")?;
    Ok(())
}

fn delete_product<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    console: &mut Console<R, W>,
) -> ActionResult {
    let id = read_id(console)?;
    let removed = store.remove(&id)?;
    debug!(id = %removed.id(), "product deleted");
    console.success("Product deleted")?;
    Ok(())
}

fn view_inventory<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    console: &mut Console<R, W>,
) -> ActionResult {
    if store.is_empty() {
        console.line("Inventory is empty")?;
        return Ok(());
    }

    let report = store.list();
    console.line(&table::rule('='))?;
    console.line(&table::header())?;
    console.line(&table::rule('-'))?;
    for line in &report.lines {
        if line.low_stock {
            console.line(&format!("{} {}", line.product, "⚠ LOW STOCK".yellow()))?;
        } else {
            console.line(&line.product.to_string())?;
        }
    }
    console.line(&table::rule('-'))?;
    console.line(&format!("Total Inventory Value: {:.2}", report.total_value))?;
    console.line(&table::rule('='))?;
    Ok(())
}

fn search_products<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    console: &mut Console<R, W>,
) -> ActionResult {
    let query = console.prompt("Enter ID or name: ")?;

    let mut found = false;
    for product in store.search(&query) {
        console.line(&product.to_string())?;
        found = true;
    }
    if !found {
        console.line("No product found")?;
    }
    Ok(())
}

fn issue_stock<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    console: &mut Console<R, W>,
) -> ActionResult {
    let id = read_id(console)?;
    if !store.exists(&id) {
        return Err(DomainError::not_found().into());
    }

    let amount = console.read_i64("Enter quantity to issue: ")?;
    let product = store.issue(&id, amount)?;
    debug!(id = %id, amount, on_hand = product.quantity(), "stock issued");
    console.success("Stock issued")?;
    Ok(())
}

fn restock_product<R: BufRead, W: Write>(
    store: &mut InventoryStore,
    console: &mut Console<R, W>,
) -> ActionResult {
    let id = read_id(console)?;
    if !store.exists(&id) {
        return Err(DomainError::not_found().into());
    }

    let amount = console.read_i64("Enter quantity to add: ")?;
    let product = store.restock(&id, amount)?;
    debug!(id = %id, amount, on_hand = product.quantity(), "product restocked");
    console.success("Product restocked")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(script: &str) -> Console<Cursor<String>, Vec<u8>> {
        colored::control::set_override(false);
        Console::new(Cursor::new(script.to_string()), Vec::new())
    }

    fn seen(console: Console<Cursor<String>, Vec<u8>>) -> String {
        let (_, output) = console.into_inner();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn add_rejects_an_empty_id_before_any_other_prompt() {
        let mut store = InventoryStore::new();
        let mut c = console("   \n");

        let err = add_product(&mut store, &mut c);
        assert!(matches!(err, Err(ActionError::Domain(DomainError::Validation(_)))));
        assert!(store.is_empty());
        // Only the id prompt was shown.
        assert_eq!(seen(c), "Enter Product ID: ");
    }

    #[test]
    fn view_of_an_empty_store_prints_a_notice_instead_of_a_table() {
        let mut store = InventoryStore::new();
        let mut c = console("");

        view_inventory(&mut store, &mut c).unwrap();
        let output = seen(c);
        assert!(output.contains("Inventory is empty"));
        assert!(!output.contains("| ID"));
    }

    #[test]
    fn issue_on_a_missing_id_fails_before_the_amount_prompt() {
        let mut store = InventoryStore::new();
        let mut c = console("ZZ\n");

        let err = issue_stock(&mut store, &mut c);
        assert!(matches!(err, Err(ActionError::Domain(DomainError::NotFound))));
        assert!(!seen(c).contains("Enter quantity"));
    }

    #[test]
    fn update_shows_the_current_row_before_prompting() {
        let mut store = InventoryStore::new();
        store
            .add("U1".parse().unwrap(), "Widget", 9.99, 10)
            .unwrap();
        let mut c = console("u1\nn\nn\nn\n");

        update_product(&mut store, &mut c).unwrap();
        let output = seen(c);
        assert!(output.contains("Current: | U1       | Widget               | 9.99       | 10       |"));
    }

    #[test]
    fn search_prints_every_match() {
        let mut store = InventoryStore::new();
        store.add("A1".parse().unwrap(), "Apple", 10.0, 2).unwrap();
        store.add("B1".parse().unwrap(), "Banana", 5.0, 10).unwrap();
        let mut c = console("an\n");

        search_products(&mut store, &mut c).unwrap();
        let output = seen(c);
        assert!(output.contains("Banana"));
        assert!(!output.contains("Apple"));
        assert!(!output.contains("No product found"));
    }
}
