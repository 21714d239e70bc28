use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, Entity};

/// Product identifier: operator-chosen, case-insensitive.
///
/// Normalized (trimmed + upper-cased) at construction, so `ab1`, `AB1` and
/// ` Ab1 ` all address the same record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(raw: &str) -> DomainResult<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(DomainError::validation("product id cannot be empty"));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Inventory record: identity plus mutable commercial/stock attributes.
///
/// Construction and every mutator re-validate, so a live `Product` always
/// satisfies `price >= 0` (finite) and `quantity >= 0`. The id never changes
/// after construction; quantity moves only through the increase/decrease/set
/// operations below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    quantity: i64,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Self> {
        validate_price(price)?;
        if quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        Ok(Self {
            id,
            name: name.into(),
            price,
            quantity,
        })
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replace the display name. No constraint on content.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: f64) -> DomainResult<()> {
        validate_price(price)?;
        self.price = price;
        Ok(())
    }

    /// Add stock. The amount must be strictly positive.
    pub fn increase_quantity(&mut self, amount: i64) -> DomainResult<()> {
        if amount <= 0 {
            return Err(DomainError::validation("increase amount must be positive"));
        }
        self.quantity += amount;
        Ok(())
    }

    /// Remove stock. The amount must be strictly positive and covered by the
    /// quantity on hand; a failed call leaves the quantity untouched.
    pub fn decrease_quantity(&mut self, amount: i64) -> DomainResult<()> {
        if amount <= 0 {
            return Err(DomainError::validation("decrease amount must be positive"));
        }
        if amount > self.quantity {
            return Err(DomainError::validation("insufficient stock"));
        }
        self.quantity -= amount;
        Ok(())
    }

    /// Absolute quantity overwrite under the same non-negative invariant.
    pub fn set_quantity(&mut self, quantity: i64) -> DomainResult<()> {
        if quantity < 0 {
            return Err(DomainError::validation("quantity cannot be negative"));
        }
        self.quantity = quantity;
        Ok(())
    }

    /// price × quantity for this record.
    pub fn line_value(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

fn validate_price(price: f64) -> DomainResult<()> {
    // `price < 0.0` alone would wave NaN through.
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::validation("price must be a non-negative number"));
    }
    Ok(())
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Product {
    /// Fixed-width table row: id, name, price to 2 decimals, quantity.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "| {:<8} | {:<20} | {:<10.2} | {:<8} |",
            self.id, self.name, self.price, self.quantity
        )
    }
}
