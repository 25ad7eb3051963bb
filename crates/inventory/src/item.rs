use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{Clock, DomainError, DomainResult, Entity, ItemId, Money};

/// Tag identifying which category variant an item belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKindTag {
    Electronics,
    Perishable,
    Apparel,
}

impl ItemKindTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKindTag::Electronics => "Electronics",
            ItemKindTag::Perishable => "Perishable",
            ItemKindTag::Apparel => "Apparel",
        }
    }
}

impl core::fmt::Display for ItemKindTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for ItemKindTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electronics" => Ok(ItemKindTag::Electronics),
            "perishable" | "grocery" => Ok(ItemKindTag::Perishable),
            "apparel" | "clothing" => Ok(ItemKindTag::Apparel),
            other => Err(DomainError::validation(format!("unknown item kind: {other}"))),
        }
    }
}

/// Garment size.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Size {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
    /// Free-form size label (e.g. "32W", "EU 42").
    Other(String),
}

impl From<String> for Size {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "XS" => Size::XS,
            "S" => Size::S,
            "M" => Size::M,
            "L" => Size::L,
            "XL" => Size::XL,
            "XXL" => Size::XXL,
            _ => Size::Other(value.trim().to_string()),
        }
    }
}

impl From<&str> for Size {
    fn from(value: &str) -> Self {
        Size::from(value.to_string())
    }
}

impl From<Size> for String {
    fn from(value: Size) -> Self {
        value.to_string()
    }
}

impl core::fmt::Display for Size {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Size::XS => f.write_str("XS"),
            Size::S => f.write_str("S"),
            Size::M => f.write_str("M"),
            Size::L => f.write_str("L"),
            Size::XL => f.write_str("XL"),
            Size::XXL => f.write_str("XXL"),
            Size::Other(label) => f.write_str(label),
        }
    }
}

/// Category-specific payload of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ItemKind {
    Electronics { warranty_years: u32, brand: String },
    Perishable { expiry_date: NaiveDate },
    Apparel { size: Size, material: String },
}

impl ItemKind {
    pub fn tag(&self) -> ItemKindTag {
        match self {
            ItemKind::Electronics { .. } => ItemKindTag::Electronics,
            ItemKind::Perishable { .. } => ItemKindTag::Perishable,
            ItemKind::Apparel { .. } => ItemKindTag::Apparel,
        }
    }
}

/// A stocked catalog record.
///
/// Everything except the stock level is fixed at construction. Stock only
/// moves through [`Item::restock`] and [`Item::sell`], which keep it
/// non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: ItemId,
    name: String,
    unit_price: Money,
    quantity_in_stock: u32,
    #[serde(flatten)]
    kind: ItemKind,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        unit_price: Money,
        quantity_in_stock: u32,
        kind: ItemKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            unit_price,
            quantity_in_stock,
            kind,
        }
    }

    pub fn electronics(
        id: ItemId,
        name: impl Into<String>,
        unit_price: Money,
        quantity_in_stock: u32,
        warranty_years: u32,
        brand: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            unit_price,
            quantity_in_stock,
            ItemKind::Electronics {
                warranty_years,
                brand: brand.into(),
            },
        )
    }

    pub fn perishable(
        id: ItemId,
        name: impl Into<String>,
        unit_price: Money,
        quantity_in_stock: u32,
        expiry_date: NaiveDate,
    ) -> Self {
        Self::new(
            id,
            name,
            unit_price,
            quantity_in_stock,
            ItemKind::Perishable { expiry_date },
        )
    }

    pub fn apparel(
        id: ItemId,
        name: impl Into<String>,
        unit_price: Money,
        quantity_in_stock: u32,
        size: Size,
        material: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            name,
            unit_price,
            quantity_in_stock,
            ItemKind::Apparel {
                size,
                material: material.into(),
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity_in_stock(&self) -> u32 {
        self.quantity_in_stock
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    pub fn tag(&self) -> ItemKindTag {
        self.kind.tag()
    }

    /// Add `amount` units. Non-positive amounts are ignored.
    pub fn restock(&mut self, amount: i64) {
        if amount <= 0 {
            return;
        }
        let amount = u32::try_from(amount).unwrap_or(u32::MAX);
        self.quantity_in_stock = self.quantity_in_stock.saturating_add(amount);
    }

    /// Remove `quantity` units, all or nothing.
    pub fn sell(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity > self.quantity_in_stock {
            return Err(DomainError::InsufficientStock {
                id: self.id.clone(),
                requested: quantity,
                available: self.quantity_in_stock,
            });
        }
        self.quantity_in_stock -= quantity;
        Ok(())
    }

    /// `unit_price * quantity_in_stock`.
    pub fn total_value(&self) -> Money {
        self.unit_price.times(self.quantity_in_stock)
    }

    /// Whether a perishable item is past its expiry date on `today`.
    ///
    /// An item is still sellable on its expiry date itself. Non-perishable
    /// items never expire.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        match &self.kind {
            ItemKind::Perishable { expiry_date } => today > *expiry_date,
            ItemKind::Electronics { .. } | ItemKind::Apparel { .. } => false,
        }
    }

    /// Evaluates [`Item::is_expired_on`] against the clock's current date.
    pub fn is_expired(&self, clock: &dyn Clock) -> bool {
        self.is_expired_on(clock.today())
    }

    /// Human-readable one-line summary.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ItemKind::Electronics { brand, .. } => {
                write!(f, "{} - {} ({brand})", self.tag(), self.name)?
            }
            ItemKind::Perishable { .. } | ItemKind::Apparel { .. } => {
                write!(f, "{} - {}", self.tag(), self.name)?
            }
        }
        write!(
            f,
            " | ID: {} | Price: {} | Stock: {}",
            self.id, self.unit_price, self.quantity_in_stock
        )?;
        match &self.kind {
            ItemKind::Electronics { warranty_years, .. } => {
                write!(f, " | Warranty: {warranty_years} years")
            }
            ItemKind::Perishable { expiry_date } => {
                write!(f, " | Expires: {}", expiry_date.format("%Y-%m-%d"))
            }
            ItemKind::Apparel { size, material } => {
                write!(f, " | Size: {size} | Material: {material}")
            }
        }
    }
}
