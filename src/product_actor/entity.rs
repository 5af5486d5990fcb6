use rust_decimal::Decimal;

use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{Product, ProductCreate, ProductPatch};
use super::actions::{ProductAction, ProductActionResult};

fn validate_price(price: Decimal) -> Result<Decimal, FrameworkError> {
    if price < Decimal::ZERO {
        return Err(FrameworkError::Validation(format!("price must not be negative, got {price}")));
    }
    Ok(price)
}

fn validate_quantity(quantity: i64) -> Result<u32, FrameworkError> {
    u32::try_from(quantity).map_err(|_| {
        if quantity < 0 {
            FrameworkError::Validation(format!("stock quantity must not be negative, got {quantity}"))
        } else {
            FrameworkError::Validation(format!("stock quantity {quantity} is too large"))
        }
    })
}

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    const KIND: &'static str = "product";

    fn id(&self) -> &String { &self.id }

    /// Creates a new Product from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Caller-chosen unique identifier for the product
    /// * `params` - Name, category, price and initial stock
    ///
    /// # Errors
    /// Rejects a negative price or a negative stock quantity.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, FrameworkError> {
        Ok(Self::new(
            id,
            params.name,
            params.category,
            validate_price(params.price)?,
            validate_quantity(params.stock_quantity)?,
        ))
    }

    /// Applies the supplied fields of `patch`.
    ///
    /// Blank `name` / `category` values count as "keep unchanged". Numeric
    /// fields are applied whenever present, including zero.
    fn on_update(&mut self, patch: ProductPatch) -> Result<(), FrameworkError> {
        if let Some(name) = patch.name.filter(|name| !name.is_empty()) {
            self.name = name;
        }
        if let Some(category) = patch.category.filter(|category| !category.is_empty()) {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = validate_price(price)?;
        }
        if let Some(quantity) = patch.stock_quantity {
            self.stock_quantity = validate_quantity(quantity)?;
        }
        Ok(())
    }

    /// Handles product-specific actions.
    ///
    /// # Errors
    /// Returns an error if the adjustment would take stock below zero.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, FrameworkError> {
        match action {
            ProductAction::AdjustStock(delta) => {
                let current = i64::from(self.stock_quantity);
                let adjusted = current.checked_add(delta).ok_or_else(|| {
                    FrameworkError::Validation(format!("stock adjustment {delta} overflows"))
                })?;
                if adjusted < 0 {
                    return Err(FrameworkError::Validation(format!(
                        "insufficient stock: {current} available, adjustment {delta}"
                    )));
                }
                self.stock_quantity = validate_quantity(adjusted)?;
                Ok(ProductActionResult::AdjustStock {
                    name: self.name.clone(),
                    new_quantity: self.stock_quantity,
                })
            }
        }
    }
}
