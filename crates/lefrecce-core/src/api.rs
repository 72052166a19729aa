//! Main LeFrecce API
//!
//! One method per API operation, covering the full booking workflow:
//! location autocomplete, journey search, login, offer selection,
//! passenger submission, payment and ticket download. Each method builds
//! the endpoint URL and delegates to the transport in [`crate::client`];
//! session state travels only through the client's cookie jar.

use std::path::Path;

use serde_json::Value;

use crate::client::{ClientConfig, LefrecceClient};
use crate::error::Result;
use crate::params::travelers::merge_traveler_parameters;
use crate::params::{bool_str, encode_query, format_amount, today, SolutionsQuery, Traveler};
use crate::types::{
    OrderRequest, PassengersRequest, Payment, ReturnFlag, SaleRequest, Selection,
    TravelerRecord, TravelsRequest,
};

/// High-level client for the lefrecce.it booking API
///
/// A typical purchase runs `login` → `solutions` → `travels` → `sales` →
/// `sales_passengers` → `sales_order` → `download_ticket`, all against one
/// `LefrecceApi` value so the session cookies carry through.
///
/// # Example
/// ```no_run
/// use lefrecce_core::{LefrecceApi, SolutionsQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = LefrecceApi::new()?;
///
///     let solutions = api
///         .solutions(&SolutionsQuery::new("Milano Centrale", "Roma Termini"))
///         .await?;
///     println!("{solutions:#}");
///
///     Ok(())
/// }
/// ```
pub struct LefrecceApi {
    client: LefrecceClient,
}

impl LefrecceApi {
    /// Create a new API client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: LefrecceClient::new()?,
        })
    }

    /// Create a new API client with custom configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: LefrecceClient::with_config(config)?,
        })
    }

    /// Create an API client around a pre-configured transport.
    pub fn with_client(client: LefrecceClient) -> Self {
        Self { client }
    }

    /// Get the current interface language.
    pub fn language(&self) -> &str {
        self.client.language()
    }

    /// Set the interface language for subsequent requests.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.client.set_language(language);
    }

    /// Whether a login call has succeeded on this session (informational).
    pub fn logged_in(&self) -> bool {
        self.client.logged_in()
    }

    /// Autocomplete location names.
    pub async fn locations(&self, name: &str) -> Result<Value> {
        let url = self
            .client
            .api_url(&format!("geolocations/locations?name={}", urlencoding::encode(name)));
        self.client.get_json(&url).await
    }

    /// Search journey solutions between two locations.
    pub async fn solutions(&self, query: &SolutionsQuery) -> Result<Value> {
        let url = self
            .client
            .api_url(&format!("solutions?{}", query.to_query_string()));
        self.client.get_json(&url).await
    }

    /// Get the details of a solution.
    pub async fn solution_details(&self, solution_id: &str) -> Result<Value> {
        self.solution_resource(solution_id, "details").await
    }

    /// Get the info block of a solution.
    pub async fn solution_info(&self, solution_id: &str) -> Result<Value> {
        self.solution_resource(solution_id, "info").await
    }

    /// Get the standard offers of a solution.
    pub async fn solution_standard_offers(&self, solution_id: &str) -> Result<Value> {
        self.solution_resource(solution_id, "standardoffers").await
    }

    /// Get the customized offers of a solution.
    pub async fn solution_customized_offers(&self, solution_id: &str) -> Result<Value> {
        self.solution_resource(solution_id, "customizedoffers").await
    }

    async fn solution_resource(&self, solution_id: &str, resource: &str) -> Result<Value> {
        let url = self.client.api_url(&format!(
            "solutions/{}/{}",
            urlencoding::encode(solution_id),
            resource
        ));
        self.client.get_json(&url).await
    }

    /// Log in with the site credentials.
    ///
    /// The site stores passwords uppercased; pass `force_uppercase = true`
    /// (the site default) unless the account predates that rule. Returns
    /// the raw response body; the session itself lives in the cookies.
    pub async fn login(
        &mut self,
        username: &str,
        password: &str,
        force_uppercase: bool,
    ) -> Result<String> {
        let password = if force_uppercase {
            password.to_uppercase()
        } else {
            password.to_string()
        };

        let url = self.client.api_url("login");
        let body = self
            .client
            .post_form(&url, &[("j_username", username), ("j_password", &password)])
            .await?;

        self.client.set_logged_in(true);
        Ok(body)
    }

    /// Log out the current session.
    pub async fn logout(&mut self) -> Result<String> {
        // The logout endpoint is the only one outside the /api namespace
        let url = self.client.site_url("ibm_security_logout");
        let body = self.client.post_form(&url, &[]).await?;

        self.client.set_logged_in(false);
        Ok(body)
    }

    /// Get the profile of the logged-in user.
    pub async fn user_profile(&self) -> Result<Value> {
        let url = self.client.api_url("profile");
        self.client.get_json(&url).await
    }

    /// List the finalized purchases of the logged-in user.
    ///
    /// Dates use the `dd/mm/yyyy` format; `dateto` defaults to today.
    pub async fn user_purchases(
        &self,
        datefrom: &str,
        dateto: Option<&str>,
        searchbydeparture: bool,
    ) -> Result<Value> {
        let query = encode_query(&[
            ("finalized", "true".to_string()),
            ("datefrom", datefrom.to_string()),
            ("dateto", dateto.map(str::to_string).unwrap_or_else(today)),
            ("searchbydeparture", bool_str(searchbydeparture).to_string()),
        ]);

        let url = self.client.api_url(&format!("purchases?{query}"));
        self.client.get_json(&url).await
    }

    /// Get the details of a sale.
    pub async fn sale_details(&self, sale_id: &str) -> Result<Value> {
        let url = self
            .client
            .api_url(&format!("sales/{}", urlencoding::encode(sale_id)));
        self.client.get_json(&url).await
    }

    /// Download a ticket of a sale as raw bytes.
    ///
    /// `ts_id` is 1 for single purchases.
    pub async fn download_ticket(&self, sale_id: &str, ts_id: u32) -> Result<Vec<u8>> {
        let url = self.client.api_url(&format!(
            "sales/{}/travel?lang=it&tsid={}",
            urlencoding::encode(sale_id),
            ts_id
        ));
        self.client.get_bytes(&url).await
    }

    /// Download a ticket and write it byte-for-byte to `path`.
    pub async fn download_ticket_to(
        &self,
        sale_id: &str,
        ts_id: u32,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let content = self.download_ticket(sale_id, ts_id).await?;
        tokio::fs::write(path, &content).await?;
        Ok(())
    }

    /// Turn a solution into travel legs by selecting offers.
    pub async fn travels(&self, solution_id: &str, selections: &[Selection]) -> Result<Value> {
        let url = self.client.api_url("travels");
        let body = TravelsRequest {
            idsolution: solution_id.to_string(),
            selections: selections.to_vec(),
            revalidate: true,
        };
        self.client.post_json(&url, &body).await
    }

    /// Open a sale from one or more travel legs.
    pub async fn sales(&self, travel_ids: &[&str]) -> Result<Value> {
        let url = self.client.api_url("sales");
        let body: Vec<SaleRequest> = travel_ids
            .iter()
            .map(|id| SaleRequest {
                idtravel: (*id).to_string(),
            })
            .collect();
        self.client.post_json(&url, &body).await
    }

    /// Get the traveler detail requirements for an offered service.
    pub async fn sales_travelers(&self, travel_id: &str, offer_id: &str) -> Result<Value> {
        let url = self.client.api_url(&format!(
            "sales/{}/travellers/details?offeredservicelist={}",
            urlencoding::encode(travel_id),
            urlencoding::encode(offer_id)
        ));
        self.client.get_json(&url).await
    }

    /// Submit passenger details for a sale.
    ///
    /// Each traveler's fields are merged against the site's form template
    /// and sent as the positional name/value list the server requires;
    /// traveler ids are the zero-based positions in `travelers`.
    pub async fn sales_passengers(
        &self,
        travel_id: &str,
        arflag: ReturnFlag,
        travelers: &[Traveler],
    ) -> Result<Value> {
        let url = self.client.api_url(&format!(
            "sales/{}/passengers",
            urlencoding::encode(travel_id)
        ));

        let body = PassengersRequest {
            arflag: arflag.as_str().to_string(),
            validate: true,
            travelers: travelers
                .iter()
                .enumerate()
                .map(|(id, traveler)| TravelerRecord {
                    id,
                    traveller_parameters: merge_traveler_parameters(traveler),
                })
                .collect(),
        };

        self.client.put_json(&url, &body).await
    }

    /// List the payment modes available for a sale.
    pub async fn sales_payment_modes(&self, travel_id: &str) -> Result<Value> {
        // The site hardcodes both flags, isInvoice literally as "undefined"
        let url = self.client.api_url(&format!(
            "sales/{}/paymentmodes?isPostoClick=false&isInvoice=undefined",
            urlencoding::encode(travel_id)
        ));
        self.client.get_json(&url).await
    }

    /// Place the order for a sale with a single payment.
    pub async fn sales_order(
        &self,
        travel_id: &str,
        payment_id: &str,
        amount: f64,
        invoice: bool,
    ) -> Result<Value> {
        let url = self.client.api_url(&format!(
            "sales/{}/order",
            urlencoding::encode(travel_id)
        ));

        let body = OrderRequest {
            invoice,
            order_parameter_list: None,
            pin: String::new(),
            payments: vec![Payment {
                paymentid: payment_id.to_string(),
                amount: format_amount(amount),
            }],
        };

        self.client.post_json(&url, &body).await
    }
}
