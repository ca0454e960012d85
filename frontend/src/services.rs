// API service layer for communicating with backend
use gloo_net::http::Request;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

// The one place the backend base URL is resolved. Empty means same-origin
// requests, which the Trunk dev proxy forwards to the local backend.
const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "",
};

// ============================================
// ERROR HANDLING
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub code: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

// ============================================
// HTTP CLIENT
// ============================================

pub struct ApiClient;

impl ApiClient {
    async fn request<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        let url = format!("{}{}", BACKEND_URL, endpoint);

        let response = Request::get(&url).send().await.map_err(|e| ApiError {
            message: e.to_string(),
            code: Some("NETWORK_ERROR".to_string()),
        })?;

        if response.ok() {
            response.json::<T>().await.map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("PARSE_ERROR".to_string()),
            })
        } else {
            Err(ApiError {
                message: format!("HTTP Error: {}", response.status()),
                code: Some(format!("HTTP_{}", response.status())),
            })
        }
    }

    async fn request_with_body<T: DeserializeOwned, B: Serialize>(
        method: &str,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = format!("{}{}", BACKEND_URL, endpoint);

        let req = match method {
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            _ => {
                return Err(ApiError {
                    message: "Invalid method".to_string(),
                    code: None,
                });
            }
        };

        let response = req
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("SERIALIZE_ERROR".to_string()),
            })?
            .send()
            .await
            .map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("NETWORK_ERROR".to_string()),
            })?;

        if response.ok() {
            response.json::<T>().await.map_err(|e| ApiError {
                message: e.to_string(),
                code: Some("PARSE_ERROR".to_string()),
            })
        } else {
            Err(ApiError {
                message: format!("HTTP Error: {}", response.status()),
                code: Some(format!("HTTP_{}", response.status())),
            })
        }
    }

    // GET request
    pub async fn get<T: DeserializeOwned>(endpoint: &str) -> ApiResult<T> {
        Self::request(endpoint).await
    }

    // POST request
    pub async fn post<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        Self::request_with_body("POST", endpoint, body).await
    }

    // PUT request
    pub async fn put<T: DeserializeOwned, B: Serialize>(endpoint: &str, body: &B) -> ApiResult<T> {
        Self::request_with_body("PUT", endpoint, body).await
    }

    // DELETE request; the backend answers 204 with no body, so success is
    // status-only rather than a JSON parse.
    pub async fn delete(endpoint: &str) -> ApiResult<()> {
        let url = format!("{}{}", BACKEND_URL, endpoint);

        let response = Request::delete(&url).send().await.map_err(|e| ApiError {
            message: e.to_string(),
            code: Some("NETWORK_ERROR".to_string()),
        })?;

        if response.ok() {
            Ok(())
        } else {
            Err(ApiError {
                message: format!("HTTP Error: {}", response.status()),
                code: Some(format!("HTTP_{}", response.status())),
            })
        }
    }
}

// ============================================
// INVOICES SERVICE
// ============================================

pub mod invoices {
    use super::*;
    use invoices_shared::{FilterSet, Invoice, InvoiceDetail, InvoicePage, InvoiceUpdate, NewInvoice};

    pub fn list_url(page: u32, filters: &FilterSet) -> String {
        let mut url = format!("/api/invoices/?page={}", page);
        for (key, value) in filters.query_pairs() {
            url.push_str(&format!("&{}={}", key, urlencoding::encode(&value)));
        }
        url
    }

    pub async fn list(page: u32, filters: &FilterSet) -> ApiResult<InvoicePage> {
        ApiClient::get(&list_url(page, filters)).await
    }

    pub async fn create(invoice: &NewInvoice) -> ApiResult<Invoice> {
        ApiClient::post("/api/invoices/", invoice).await
    }

    pub async fn update(invoice: &InvoiceUpdate) -> ApiResult<Invoice> {
        ApiClient::put(&format!("/api/invoices/{}/", invoice.id), invoice).await
    }

    pub async fn delete(id: i64) -> ApiResult<()> {
        ApiClient::delete(&format!("/api/invoices/{}/", id)).await
    }

    pub async fn details(id: i64) -> ApiResult<Vec<InvoiceDetail>> {
        ApiClient::get(&format!("/api/invoices/{}/details/", id)).await
    }
}
