//! Route string contracts consumed by the follow-up screens.
//!
//! These strings are part of the application's routing surface and must be
//! reproduced exactly. Order ids and error codes are emitted verbatim;
//! display escaping is the rendering layer's concern.

/// Neutral fallback when the order context cannot be trusted.
pub const HOME: &str = "/";

/// Error token used when the gateway did not supply a response code.
pub const UNKNOWN_ERROR_CODE: &str = "unknown";

/// `/payment/success?orderId=<id-or-empty>`
pub fn payment_success(order_id: Option<&str>) -> String {
    format!("/payment/success?orderId={}", order_id.unwrap_or(""))
}

/// `/payment/failed?orderId=<id-or-empty>&error=<code-or-"unknown">`
pub fn payment_failed(order_id: Option<&str>, code: Option<&str>) -> String {
    format!(
        "/payment/failed?orderId={}&error={}",
        order_id.unwrap_or(""),
        code.unwrap_or(UNKNOWN_ERROR_CODE)
    )
}
