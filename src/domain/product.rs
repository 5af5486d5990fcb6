use rust_decimal::Decimal;

/// Represents a product in the inventory.
///
/// # Actor Framework
/// This struct implements the [`Entity`](crate::actor_framework::Entity) trait,
/// allowing it to be managed by a [`ResourceActor`](crate::actor_framework::ResourceActor).
///
/// See [`impl Entity for Product`](#impl-Entity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`])
/// - Update parameters ([`ProductPatch`])
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock_quantity: u32,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
        stock_quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock_quantity,
        }
    }
}

/// Payload for creating a new product.
///
/// `stock_quantity` is signed so that negative input can be rejected
/// instead of being unrepresentable.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub stock_quantity: i64,
}

/// Payload for editing an existing product. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub stock_quantity: Option<i64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Which text field a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Category,
}

impl SearchField {
    pub fn select<'a>(&self, product: &'a Product) -> &'a str {
        match self {
            SearchField::Name => &product.name,
            SearchField::Category => &product.category,
        }
    }
}

/// One row of the inventory listing.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryLine {
    pub product: Product,
    pub is_low_stock: bool,
}

/// Result of viewing the inventory.
///
/// An empty catalog is reported as [`InventoryView::Empty`] rather than an
/// empty list.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryView {
    Empty,
    Items(Vec<InventoryLine>),
}

/// Outcome of a successful stock adjustment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAdjustment {
    pub product_name: String,
    pub new_quantity: u32,
    pub low_stock_warning: bool,
}
