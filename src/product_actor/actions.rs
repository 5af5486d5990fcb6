/// Custom actions for Product entities.
///
/// These actions represent domain-specific operations that can be performed
/// on a product beyond standard CRUD operations.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Adds a signed amount to the stock level.
    ///
    /// # Arguments
    /// * `i64` - The change to apply; negative values remove stock
    ///
    /// # Errors
    /// Will fail if the resulting stock level would be negative.
    AdjustStock(i64),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Result from AdjustStock action - returns the product name and new stock level
    AdjustStock { name: String, new_quantity: u32 },
}
