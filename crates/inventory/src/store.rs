use std::collections::BTreeMap;

use stockdesk_core::{DomainError, DomainResult};

use crate::product::{Product, ProductId};

/// Quantity threshold below which a record is flagged for operator attention.
pub const LOW_STOCK_LIMIT: i64 = 5;

/// Keyed collection of products with existence and uniqueness enforcement.
///
/// Ids are case-normalized by [`ProductId`], so there is at most one entry
/// per normalized id and lookups are case-insensitive. The store is
/// process-scoped (empty at start, nothing survives the process) and never
/// performs IO; callers render its results.
#[derive(Debug, Default)]
pub struct InventoryStore {
    products: BTreeMap<ProductId, Product>,
}

/// Independently optional field changes for [`InventoryStore::update`].
///
/// `quantity` is an absolute overwrite, not a delta.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// One listing row: the product plus its low-stock flag.
#[derive(Debug, Clone, Copy)]
pub struct ReportLine<'a> {
    pub product: &'a Product,
    pub low_stock: bool,
}

/// Snapshot produced by [`InventoryStore::list`]: every product in id order
/// plus the aggregate inventory value.
#[derive(Debug)]
pub struct InventoryReport<'a> {
    pub lines: Vec<ReportLine<'a>>,
    pub total_value: f64,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Construct and insert a new product under a free id.
    ///
    /// Fails with `AlreadyExists` when the id is taken and propagates the
    /// construction `Validation` failure unchanged; the store is untouched in
    /// both cases.
    pub fn add(
        &mut self,
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<&Product> {
        if self.products.contains_key(&id) {
            return Err(DomainError::already_exists(id.as_str()));
        }
        let product = Product::new(id.clone(), name, price, quantity)?;
        Ok(self.products.entry(id).or_insert(product))
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn exists(&self, id: &ProductId) -> bool {
        self.products.contains_key(id)
    }

    /// Apply the patch fields in order: name, price, quantity.
    ///
    /// Fails with `NotFound` for an absent id. A failing field aborts with its
    /// `Validation` error; fields applied before it stay applied (there is no
    /// cross-field rollback).
    pub fn update(&mut self, id: &ProductId, patch: ProductPatch) -> DomainResult<&Product> {
        let product = self.products.get_mut(id).ok_or(DomainError::NotFound)?;
        if let Some(name) = patch.name {
            product.rename(name);
        }
        if let Some(price) = patch.price {
            product.set_price(price)?;
        }
        if let Some(quantity) = patch.quantity {
            product.set_quantity(quantity)?;
        }
        Ok(product)
    }

    /// Delete and return the record. Fails with `NotFound` for an absent id.
    pub fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        self.products.remove(id).ok_or(DomainError::NotFound)
    }

    /// Every product in id order, each flagged when its quantity is below
    /// [`LOW_STOCK_LIMIT`], plus the total value Σ(price × quantity).
    pub fn list(&self) -> InventoryReport<'_> {
        let lines: Vec<ReportLine<'_>> = self
            .products
            .values()
            .map(|product| ReportLine {
                product,
                low_stock: product.quantity() < LOW_STOCK_LIMIT,
            })
            .collect();
        let total_value = lines.iter().map(|line| line.product.line_value()).sum();
        InventoryReport { lines, total_value }
    }

    /// Lazy case-insensitive substring match against id or name.
    pub fn search<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a Product> {
        let needle = query.trim().to_lowercase();
        self.products.values().filter(move |product| {
            product.id().as_str().to_lowercase().contains(&needle)
                || product.name().to_lowercase().contains(&needle)
        })
    }

    /// Remove stock from an existing record.
    ///
    /// Fails with `NotFound` for an absent id; otherwise delegates to
    /// [`Product::decrease_quantity`] and surfaces its error unchanged.
    pub fn issue(&mut self, id: &ProductId, amount: i64) -> DomainResult<&Product> {
        let product = self.products.get_mut(id).ok_or(DomainError::NotFound)?;
        product.decrease_quantity(amount)?;
        Ok(product)
    }

    /// Add stock to an existing record.
    ///
    /// Fails with `NotFound` for an absent id; otherwise delegates to
    /// [`Product::increase_quantity`] and surfaces its error unchanged.
    pub fn restock(&mut self, id: &ProductId, amount: i64) -> DomainResult<&Product> {
        let product = self.products.get_mut(id).ok_or(DomainError::NotFound)?;
        product.increase_quantity(amount)?;
        Ok(product)
    }
}
