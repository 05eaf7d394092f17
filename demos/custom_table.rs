use status_errors::{ErrorDescriptor, ErrorFactoryBuilder, StatusCode, definitions};

fn main() {
    println!("--- Custom Table Example ---\n");

    let table = ErrorFactoryBuilder::new()
        .descriptors(&definitions::BUILTIN)
        .descriptor(ErrorDescriptor::new_static(
            "orderMissing",
            StatusCode::NotFound,
            "Order not found",
        ))
        // Same name as a built-in: this definition replaces it
        .descriptor(ErrorDescriptor::new_static(
            "gatewayTimeout",
            StatusCode::GatewayTimeout,
            "Upstream did not respond",
        ))
        .build();

    for method in &table {
        println!("{:<16} -> {}", method.name(), method.default_error());
    }

    match table.invoke("orderMissing", Some(format!("no order {}", 1234))) {
        Some(err) => println!("\nCustom: {}", err),
        None => println!("\norderMissing is not registered"),
    }

    // Lookups for unregistered names are the caller's to handle
    if table.get("internalError").is_none() {
        println!("internalError is not registered");
    }
}
