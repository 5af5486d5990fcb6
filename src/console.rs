//! Interactive text front end.
//!
//! Prompts for credentials, renders the role-appropriate menu, parses user
//! input and turns catalog outcomes into messages. All rules live in the
//! catalog client; this module only collects arguments and prints results.

use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, instrument, warn};

use crate::auth::AuthStore;
use crate::clients::CatalogClient;
use crate::domain::{InventoryView, Principal, Product, ProductPatch, SearchField};
use crate::product_actor::CatalogError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input ended")]
    EndOfInput,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

enum Flow {
    Continue,
    Logout,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs one login session: authenticate, then serve the menu until logout
    /// or end of input.
    pub async fn run(&mut self, auth: &AuthStore, catalog: &CatalogClient) -> Result<(), ConsoleError> {
        self.say("Welcome to the Inventory Management System!").await?;

        let principal = match self.login(auth).await {
            Ok(principal) => principal,
            Err(ConsoleError::EndOfInput) => return Ok(()),
            Err(e) => return Err(e),
        };

        self.session(&principal, catalog).await
    }

    async fn login(&mut self, auth: &AuthStore) -> Result<Principal, ConsoleError> {
        loop {
            let username = self.prompt("Username: ").await?;
            let password = self.prompt("Password: ").await?;
            match auth.authenticate(&username, &password) {
                Ok(principal) => {
                    info!(username = principal.username(), role = %principal.role(), "Session started");
                    let greeting = format!(
                        "Login successful! Welcome, {} {}.",
                        principal.role(),
                        principal.username()
                    );
                    self.say(&greeting).await?;
                    return Ok(principal);
                }
                Err(e) => {
                    warn!(%username, "Login failed");
                    self.say(&format!("{e}. Please try again.")).await?;
                }
            }
        }
    }

    #[instrument(skip_all, fields(username = principal.username()))]
    async fn session(&mut self, principal: &Principal, catalog: &CatalogClient) -> Result<(), ConsoleError> {
        loop {
            self.show_menu(principal).await?;
            let choice = match self.prompt("Enter choice: ").await {
                Ok(choice) => choice,
                Err(ConsoleError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            match self.dispatch(&choice, principal, catalog).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Logout) => break,
                Err(ConsoleError::EndOfInput) => break,
                Err(ConsoleError::InvalidInput(_)) => {
                    self.say("Invalid input. Please enter valid data.").await?;
                }
                Err(ConsoleError::Catalog(e)) if !matches!(e, CatalogError::ActorCommunicationError(_)) => {
                    self.say(&describe(&e)).await?;
                }
                Err(e) => return Err(e),
            }
        }

        self.say("Logging out...").await?;
        info!("Session ended");
        Ok(())
    }

    async fn show_menu(&mut self, principal: &Principal) -> Result<(), ConsoleError> {
        self.say("\nMain Menu:").await?;
        self.say("1. View Inventory").await?;
        self.say("2. Search Product by Name").await?;
        self.say("3. Search Product by Category").await?;
        if principal.is_admin() {
            self.say("4. Add Product").await?;
            self.say("5. Edit Product").await?;
            self.say("6. Delete Product").await?;
            self.say("7. Adjust Stock").await?;
        }
        self.say("0. Logout").await
    }

    async fn dispatch(
        &mut self,
        choice: &str,
        principal: &Principal,
        catalog: &CatalogClient,
    ) -> Result<Flow, ConsoleError> {
        match (choice.trim(), principal.is_admin()) {
            ("1", _) => self.view_inventory(principal, catalog).await?,
            ("2", _) => self.search(catalog, SearchField::Name).await?,
            ("3", _) => self.search(catalog, SearchField::Category).await?,
            ("4", true) => self.add_product(principal, catalog).await?,
            ("5", true) => self.edit_product(principal, catalog).await?,
            ("6", true) => self.delete_product(principal, catalog).await?,
            ("7", true) => self.adjust_stock(principal, catalog).await?,
            ("0", _) => return Ok(Flow::Logout),
            _ => {
                self.say("Invalid choice or insufficient permissions. Please try again.").await?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn view_inventory(&mut self, principal: &Principal, catalog: &CatalogClient) -> Result<(), ConsoleError> {
        match catalog.view_inventory(principal).await? {
            InventoryView::Empty => self.say("No products in inventory.").await,
            InventoryView::Items(lines) => {
                self.say("\nInventory:").await?;
                for line in lines {
                    let mut row = format_product(&line.product);
                    if line.is_low_stock {
                        row.push_str(" (Low Stock)");
                    }
                    self.say(&row).await?;
                }
                Ok(())
            }
        }
    }

    async fn search(&mut self, catalog: &CatalogClient, by: SearchField) -> Result<(), ConsoleError> {
        let label = match by {
            SearchField::Name => "Enter product name to search: ",
            SearchField::Category => "Enter product category to search: ",
        };
        let term = self.prompt(label).await?;
        let matches = catalog.search_products(&term, by).await?;
        if matches.is_empty() {
            return self.say("No matching products found.").await;
        }
        for product in &matches {
            self.say(&format!("Found - {}", format_product(product))).await?;
        }
        Ok(())
    }

    async fn add_product(&mut self, principal: &Principal, catalog: &CatalogClient) -> Result<(), ConsoleError> {
        let id = self.prompt("Product ID: ").await?;
        let name = self.prompt("Product Name: ").await?;
        let category = self.prompt("Category: ").await?;
        let price: Decimal = self.prompt_parsed("Price: ").await?;
        let stock_quantity: i64 = self.prompt_parsed("Stock Quantity: ").await?;

        catalog
            .add_product(principal, id, name.clone(), category, price, stock_quantity)
            .await?;
        self.say(&format!("Product '{name}' added successfully.")).await
    }

    async fn edit_product(&mut self, principal: &Principal, catalog: &CatalogClient) -> Result<(), ConsoleError> {
        let id = self.prompt("Product ID to edit: ").await?;
        let name = self.prompt("New Product Name (leave blank to keep unchanged): ").await?;
        let category = self.prompt("New Category (leave blank to keep unchanged): ").await?;
        let price = self.prompt_optional("New Price (leave blank to keep unchanged): ").await?;
        let stock_quantity = self
            .prompt_optional("New Stock Quantity (leave blank to keep unchanged): ")
            .await?;

        let patch = ProductPatch {
            name: non_blank(name),
            category: non_blank(category),
            price,
            stock_quantity,
        };
        catalog.edit_product(principal, id.clone(), patch).await?;
        self.say(&format!("Product '{id}' updated successfully.")).await
    }

    async fn delete_product(&mut self, principal: &Principal, catalog: &CatalogClient) -> Result<(), ConsoleError> {
        let id = self.prompt("Product ID to delete: ").await?;
        catalog.delete_product(principal, id.clone()).await?;
        self.say(&format!("Product '{id}' deleted successfully.")).await
    }

    async fn adjust_stock(&mut self, principal: &Principal, catalog: &CatalogClient) -> Result<(), ConsoleError> {
        let id = self.prompt("Product ID to adjust stock: ").await?;
        let delta: i64 = self
            .prompt_parsed("Enter quantity to add (positive) or reduce (negative): ")
            .await?;

        let adjustment = catalog.adjust_stock(principal, id, delta).await?;
        let name = &adjustment.product_name;
        self.say(&format!(
            "Stock for product '{name}' adjusted by {delta}. New stock: {}",
            adjustment.new_quantity
        ))
        .await?;
        if adjustment.low_stock_warning {
            self.say(&format!("Warning: Low stock for product '{name}'! Consider restocking."))
                .await?;
        }
        Ok(())
    }

    // --- Line I/O ---

    async fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn prompt(&mut self, label: &str) -> Result<String, ConsoleError> {
        self.output.write_all(label.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        let stripped = line.strip_suffix('\n').unwrap_or(&line);
        let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);
        Ok(stripped.to_string())
    }

    async fn prompt_parsed<T: FromStr>(&mut self, label: &str) -> Result<T, ConsoleError> {
        let raw = self.prompt(label).await?;
        raw.trim().parse().map_err(|_| ConsoleError::InvalidInput(raw))
    }

    /// Blank input means "absent"; anything else must parse.
    async fn prompt_optional<T: FromStr>(&mut self, label: &str) -> Result<Option<T>, ConsoleError> {
        let raw = self.prompt(label).await?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some).map_err(|_| ConsoleError::InvalidInput(raw.clone()))
    }
}

fn non_blank(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

fn format_product(product: &Product) -> String {
    format!(
        "ID: {}, Name: {}, Category: {}, Price: ${}, Stock: {}",
        product.id, product.name, product.category, product.price, product.stock_quantity
    )
}

fn describe(err: &CatalogError) -> String {
    match err {
        CatalogError::PermissionDenied { operation, .. } => {
            format!("Permission denied: Only Admins can {operation}.")
        }
        CatalogError::NotFound(_) => "Product not found.".to_string(),
        CatalogError::DuplicateId(_) => "Product ID already exists. Use a unique ID.".to_string(),
        CatalogError::InvalidArgument(reason) => format!("Invalid value: {reason}."),
        CatalogError::ActorCommunicationError(reason) => format!("Catalog unavailable: {reason}."),
    }
}
