use checkout_return::application::flow::{CallbackFlow, RESULT_DELAY};
use checkout_return::domain::interpreter::{GatewayInterpreter, interpret};
use checkout_return::domain::params::CallbackParams;
use checkout_return::infrastructure::recording::{
    CountingInterpreter, RecordingNavigator, RecordingNotifier,
};
use rand::Rng;
use rand::distributions::Alphanumeric;
use std::sync::Arc;
use std::sync::atomic::Ordering;

#[tokio::test(start_paused = true)]
async fn test_interpreter_runs_exactly_once_across_rerenders() {
    let counting = CountingInterpreter::new(Box::new(GatewayInterpreter::new()));
    let calls = counting.calls();

    let mut flow = CallbackFlow::new(
        Box::new(counting),
        Arc::new(RecordingNavigator::new()),
        Arc::new(RecordingNotifier::new()),
    );

    let params = CallbackParams::from_pairs([("vnp_ResponseCode", "00")]);
    // Simulate the hosting UI re-rendering several times before the first
    // pass completes.
    for _ in 0..10 {
        flow.start(&params);
    }

    tokio::time::sleep(RESULT_DELAY * 2).await;
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

fn random_string(rng: &mut impl Rng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn random_params(rng: &mut impl Rng, max_pairs: usize) -> CallbackParams {
    let mut params = CallbackParams::new();
    for _ in 0..rng.gen_range(0..max_pairs) {
        let key_len = rng.gen_range(1..20);
        let value_len = rng.gen_range(0..30);
        let key = random_string(rng, key_len);
        let value = random_string(rng, value_len);
        // Alphanumeric cannot produce the underscore of the real key, so
        // these never collide with the response-code field.
        params.insert(key, value);
    }
    params
}

#[test]
fn test_random_params_without_code_always_fail_closed() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let params = random_params(&mut rng, 8);

        let outcome = interpret(&params);
        assert!(!outcome.success);
        assert!(!outcome.message.as_deref().unwrap_or("").is_empty());
    }
}

#[test]
fn test_success_sentinel_holds_under_random_noise() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let mut params = CallbackParams::from_pairs([("vnp_ResponseCode", "00")]);
        for (key, value) in random_params(&mut rng, 8).iter() {
            params.insert(key, value);
        }

        assert!(interpret(&params).success);
    }
}

#[test]
fn test_interpretation_is_deterministic_over_random_inputs() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let params = random_params(&mut rng, 10);
        assert_eq!(interpret(&params), interpret(&params));
    }
}
