//! HTTP client for the commerce API

use crate::{ClientConfig, ClientError, ClientResult, ListQuery, SortDir};
use reqwest::Client;
use serde::de::DeserializeOwned;
use shared::cart::Cart;
use shared::models::{
    Catalog, Category, OrderLine, Product, ProductCatalog, SalesOrder, STATUS_ACTIVE,
};
use shared::response::{CartPayload, CartSaved, ListResponse};

/// HTTP client for making network requests to the commerce API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with list query parameters
    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &ListQuery,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.get(&url).query(&query.to_pairs());

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.put(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Any non-success status is one uniform error carrying the status and
    /// the body text; success bodies decode as JSON.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = %status, "request rejected by server");
            return Err(ClientError::Status { status, body: text });
        }

        serde_json::from_str(&text).map_err(Into::into)
    }

    // ========== Order API ==========

    /// Fetch the user's most recent active order, if any.
    pub async fn latest_active_order(&self, user_id: i64) -> ClientResult<Option<SalesOrder>> {
        let query = ListQuery::new()
            .filter("user_id", user_id)
            .filter("status", STATUS_ACTIVE)
            .sort("id", SortDir::Desc)
            .size(1);

        let response: ListResponse<SalesOrder> =
            self.get_query("api/crud6/sales_order", &query).await?;
        Ok(response.into_first())
    }

    /// Fetch the active lines of an order.
    pub async fn active_order_lines(&self, order_id: i64) -> ClientResult<Vec<OrderLine>> {
        let query = ListQuery::new()
            .filter("order_id", order_id)
            .filter("status", STATUS_ACTIVE);

        let response: ListResponse<OrderLine> =
            self.get_query("api/crud6/sales_order_lines", &query).await?;
        Ok(response.rows)
    }

    /// Upsert a cart: POST creates the order, PUT updates one the server
    /// already knows. Returns the identities the server assigned.
    pub async fn save_cart(&self, cart: &Cart) -> ClientResult<CartSaved> {
        let payload = CartPayload::from(cart);
        match cart.order.id {
            Some(order_id) => {
                let path = format!("api/cart/{}/c/{}", cart.order.user_id, order_id);
                self.put(&path, &payload).await
            }
            None => {
                let path = format!("api/cart/{}", cart.order.user_id);
                self.post(&path, &payload).await
            }
        }
    }

    // ========== Catalog API ==========

    /// List products.
    pub async fn products(&self, query: &ListQuery) -> ClientResult<ListResponse<Product>> {
        self.get_query("api/crud6/product", query).await
    }

    /// Fetch a single product.
    pub async fn product(&self, id: i64) -> ClientResult<Product> {
        self.get(&format!("api/crud6/product/{}", id)).await
    }

    /// List product categories.
    pub async fn categories(&self, query: &ListQuery) -> ClientResult<ListResponse<Category>> {
        self.get_query("api/crud6/category", query).await
    }

    /// Fetch a single category.
    pub async fn category(&self, id: i64) -> ClientResult<Category> {
        self.get(&format!("api/crud6/category/{}", id)).await
    }

    /// List catalogs.
    pub async fn catalogs(&self, query: &ListQuery) -> ClientResult<ListResponse<Catalog>> {
        self.get_query("api/crud6/catalog", query).await
    }

    /// Fetch a single catalog.
    pub async fn catalog(&self, id: i64) -> ClientResult<Catalog> {
        self.get(&format!("api/crud6/catalog/{}", id)).await
    }

    /// Fetch the active product listings of a catalog.
    pub async fn catalog_products(&self, catalog_id: i64) -> ClientResult<Vec<ProductCatalog>> {
        let query = ListQuery::new()
            .filter("catalog_id", catalog_id)
            .filter("status", STATUS_ACTIVE);

        let response: ListResponse<ProductCatalog> =
            self.get_query("api/crud6/product_catalog", &query).await?;
        Ok(response.rows)
    }
}
