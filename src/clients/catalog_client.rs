use rust_decimal::Decimal;
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::auth::authorize;
use crate::domain::{
    InventoryLine, InventoryView, Principal, Product, ProductCreate, ProductPatch, Role, SearchField,
    StockAdjustment,
};
use crate::product_actor::{CatalogError, ProductAction, ProductActionResult};

/// Client for the product catalog actor.
///
/// Every mutating method runs the role guard before a request is sent, so a
/// denied call never reaches the actor and cannot change the catalog.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
    low_stock_threshold: u32,
}

impl_client_methods!(CatalogClient, Product, CatalogError, product);

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>, low_stock_threshold: u32) -> Self {
        Self { inner, low_stock_threshold }
    }

    fn is_low_stock(&self, quantity: u32) -> bool {
        quantity <= self.low_stock_threshold
    }

    #[instrument(skip(self, principal), fields(username = principal.username()))]
    pub async fn add_product(
        &self,
        principal: &Principal,
        id: String,
        name: String,
        category: String,
        price: Decimal,
        stock_quantity: i64,
    ) -> Result<(), CatalogError> {
        authorize(principal, Role::Admin, "add products")?;
        debug!("Sending request");
        let params = ProductCreate { name, category, price, stock_quantity };
        self.inner.create(id, params).await?;
        Ok(())
    }

    #[instrument(skip(self, principal), fields(username = principal.username()))]
    pub async fn edit_product(
        &self,
        principal: &Principal,
        id: String,
        patch: ProductPatch,
    ) -> Result<(), CatalogError> {
        authorize(principal, Role::Admin, "edit products")?;
        debug!(empty_patch = patch.is_empty(), "Sending request");
        self.inner.update(id, patch).await?;
        Ok(())
    }

    #[instrument(skip(self, principal), fields(username = principal.username()))]
    pub async fn delete_product(&self, principal: &Principal, id: String) -> Result<(), CatalogError> {
        authorize(principal, Role::Admin, "delete products")?;
        debug!("Sending request");
        self.inner.delete(id).await?;
        Ok(())
    }

    /// Lists every product in insertion order, flagging low stock.
    #[instrument(skip(self, principal), fields(username = principal.username()))]
    pub async fn view_inventory(&self, principal: &Principal) -> Result<InventoryView, CatalogError> {
        authorize(principal, Role::User, "view inventory")?;
        let products = self.list_products().await?;
        if products.is_empty() {
            return Ok(InventoryView::Empty);
        }
        let lines = products
            .into_iter()
            .map(|product| InventoryLine {
                is_low_stock: self.is_low_stock(product.stock_quantity),
                product,
            })
            .collect();
        Ok(InventoryView::Items(lines))
    }

    /// Case-insensitive substring search over one text field.
    #[instrument(skip(self))]
    pub async fn search_products(&self, term: &str, by: SearchField) -> Result<Vec<Product>, CatalogError> {
        let needle = term.to_lowercase();
        let matches = self
            .list_products()
            .await?
            .into_iter()
            .filter(|product| by.select(product).to_lowercase().contains(&needle))
            .collect::<Vec<_>>();
        debug!(matches = matches.len(), "Search complete");
        Ok(matches)
    }

    #[instrument(skip(self, principal), fields(username = principal.username()))]
    pub async fn adjust_stock(
        &self,
        principal: &Principal,
        id: String,
        delta: i64,
    ) -> Result<StockAdjustment, CatalogError> {
        authorize(principal, Role::Admin, "adjust stock")?;
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::AdjustStock(delta)).await? {
            ProductActionResult::AdjustStock { name, new_quantity } => Ok(StockAdjustment {
                product_name: name,
                new_quantity,
                low_stock_warning: self.is_low_stock(new_quantity),
            }),
        }
    }
}
