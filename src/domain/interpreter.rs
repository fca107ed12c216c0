use super::outcome::{
    CallbackOutcome, GENERIC_FAILURE_MESSAGE, SUCCESS_CODE, SUCCESS_MESSAGE,
    describe_response_code,
};
use super::params::CallbackParams;
use super::ports::Interpreter;
use crate::error::Result;
use rust_decimal::Decimal;

/// Query key carrying the gateway's terminal status code.
pub const RESPONSE_CODE_PARAM: &str = "vnp_ResponseCode";
/// Query key carrying the merchant order reference.
pub const ORDER_REF_PARAM: &str = "vnp_TxnRef";
/// Query key carrying the transaction amount, multiplied by 100.
pub const AMOUNT_PARAM: &str = "vnp_Amount";

/// Classifies the redirect parameters of a VNPay-style gateway.
///
/// Only the handful of fields above are consulted; everything else in the
/// redirect is ignored so that gateway-specific key names never leak past
/// this module.
pub fn interpret(params: &CallbackParams) -> CallbackOutcome {
    let response_code = params.get(RESPONSE_CODE_PARAM).map(str::to_owned);
    let order_id = params.get(ORDER_REF_PARAM).map(str::to_owned);
    let amount = params.get(AMOUNT_PARAM).and_then(parse_amount);

    // Fail closed: anything other than the documented success sentinel,
    // including a missing code, is a failure.
    let success = response_code.as_deref() == Some(SUCCESS_CODE);

    let message = if success {
        SUCCESS_MESSAGE.to_owned()
    } else {
        response_code
            .as_deref()
            .and_then(describe_response_code)
            .unwrap_or(GENERIC_FAILURE_MESSAGE)
            .to_owned()
    };

    CallbackOutcome {
        success,
        order_id,
        message: Some(message),
        response_code,
        amount,
    }
}

// The gateway appends the amount multiplied by 100; anything that does not
// parse is dropped rather than failing the outcome.
fn parse_amount(raw: &str) -> Option<Decimal> {
    let value: Decimal = raw.trim().parse().ok()?;
    Some(value / Decimal::ONE_HUNDRED)
}

/// The production [`Interpreter`] port, backed by [`interpret`].
///
/// It never returns `Err`: classification degrades to a failure outcome
/// instead of raising.
#[derive(Debug, Default, Clone, Copy)]
pub struct GatewayInterpreter;

impl GatewayInterpreter {
    pub fn new() -> Self {
        Self
    }
}

impl Interpreter for GatewayInterpreter {
    fn interpret(&self, params: &CallbackParams) -> Result<CallbackOutcome> {
        Ok(interpret(params))
    }
}
