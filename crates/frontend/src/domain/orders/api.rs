use crate::shared::api_utils::api_url;
use contracts::domain::orders::{Order, OrderUpdate};
use gloo_net::http::Request;

/// Fetch the authoritative order list.
///
/// Called once when the orders page mounts and again after every mutating
/// action; the view never patches rows locally.
pub async fn list_orders() -> Result<Vec<Order>, String> {
    let response = Request::get(&api_url("/orders/"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<Order> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Apply a partial update to one order and return the stored result
pub async fn update_order(id: i64, update: &OrderUpdate) -> Result<Order, String> {
    let response = Request::put(&api_url(&format!("/orders/{}", id)))
        .json(update)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Order = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
