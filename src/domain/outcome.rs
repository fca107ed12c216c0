use rust_decimal::Decimal;
use serde::Serialize;

/// The gateway's response code for a completed transaction.
pub const SUCCESS_CODE: &str = "00";

pub const SUCCESS_MESSAGE: &str = "Payment completed successfully";
pub const GENERIC_FAILURE_MESSAGE: &str = "Transaction failed";
pub const PROCESSING_ERROR_MESSAGE: &str =
    "An error occurred while processing the payment result";

/// The structured result of classifying a gateway redirect.
///
/// This is a pure function of the redirect's query parameters: the same
/// parameters always produce a structurally equal outcome, and missing or
/// malformed fields degrade to a failure with no order id rather than an
/// error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallbackOutcome {
    /// Whether the gateway reports the transaction completed.
    pub success: bool,
    /// The merchant-side order identifier echoed by the gateway, verbatim.
    pub order_id: Option<String>,
    /// Human-readable explanation, shown on the status screen.
    pub message: Option<String>,
    /// The raw response code, retained for the failure redirect.
    pub response_code: Option<String>,
    /// The transaction amount, when the gateway echoed one it could parse.
    pub amount: Option<Decimal>,
}

/// Human-readable text for the gateway response codes the storefront
/// surfaces to shoppers. Unrecognized codes fall back to
/// [`GENERIC_FAILURE_MESSAGE`].
pub fn describe_response_code(code: &str) -> Option<&'static str> {
    let text = match code {
        "07" => "The amount was deducted but the transaction is suspected of fraud",
        "09" => "The card or account is not registered for online banking",
        "10" => "Card or account verification failed more than 3 times",
        "11" => "The payment deadline expired, please retry the transaction",
        "12" => "The card or account is locked",
        "13" => "The transaction password (OTP) was entered incorrectly",
        "24" => "The transaction was cancelled",
        "51" => "The account balance is insufficient for this transaction",
        "65" => "The account has exceeded its daily transaction limit",
        "75" => "The payment bank is under maintenance",
        "79" => "The payment password was entered incorrectly too many times",
        "99" => "An unspecified error occurred at the payment gateway",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_known_codes_have_text() {
        for code in ["07", "09", "10", "11", "12", "13", "24", "51", "65", "75", "79", "99"] {
            assert!(describe_response_code(code).is_some(), "missing text for {code}");
        }
    }

    #[test]
    fn test_unknown_code_has_no_text() {
        assert_eq!(describe_response_code("42"), None);
        assert_eq!(describe_response_code(""), None);
        assert_eq!(describe_response_code("00"), None);
    }

    #[test]
    fn test_outcome_serializes_for_operators() {
        let outcome = CallbackOutcome {
            success: true,
            order_id: Some("ORD123".to_string()),
            message: Some(SUCCESS_MESSAGE.to_string()),
            response_code: Some(SUCCESS_CODE.to_string()),
            amount: Some(dec!(150000.00)),
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["order_id"], "ORD123");
        assert_eq!(json["response_code"], "00");
    }
}
