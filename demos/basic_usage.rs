use status_errors::{
    bad_request, bad_request_with, gateway_timeout, gateway_timeout_with, not_found,
    not_found_with,
};

fn main() {
    println!("--- Basic Usage Example ---\n");

    // Default messages come from the built-in descriptors
    println!("Bad Request Default:      {:?}", bad_request());
    println!("Bad Request Custom:       {:?}", bad_request_with("Overwritten Message"));

    println!("Not Found Default:        {:?}", not_found());
    println!("Not Found Custom:         {:?}", not_found_with("Overwritten Message"));

    println!("Gateway Timeout Default:  {:?}", gateway_timeout());
    println!("Gateway Timeout Custom:   {:?}", gateway_timeout_with("Overwritten Message"));

    // The code is fixed by the descriptor. There is no setter:
    // bad_request().status_code = StatusCode::NotFound;  // does not compile
    println!("\nDisplay form: {}", gateway_timeout_with("Timed out"));

    let err = not_found_with("no order 1234");
    err.with_log(|log| println!("Log line:     {}", log));
}
