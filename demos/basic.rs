//! Basic example demonstrating the Smocker client.
//!
//! Start Smocker first (admin API on 8081, mocks served on 8080):
//! ```
//! docker run -d -p 8080:8080 -p 8081:8081 thiht/smocker
//! cargo run --example basic
//! ```

use smocker_client::mock::{with_call_limit, Definition, RequestBuilder, ResponseBuilder};
use smocker_client::output::PrettyPrint;
use smocker_client::SmockerClient;

#[tokio::main]
async fn main() -> smocker_client::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating Smocker client...");
    let smocker = SmockerClient::from_env()?;
    println!("Admin API: {}", smocker.base_url());

    // Clear any old sessions and mocks
    smocker.reset_all_sessions_and_mocks().await?;

    // Start a new session for the new mocks
    smocker.start_session("SmockerClientSession").await?;

    // Add a healthcheck mock
    let request = RequestBuilder::new("GET", "/healthcheck")
        .add_header("Accept", ["application/json"])
        .build();
    let response = ResponseBuilder::ok()
        .add_json_body(r#"{"status": "OK"}"#)?
        .build();
    let definition = Definition::with_options(request, response, [with_call_limit(1)]);
    smocker.add_mock(&definition).await?;

    // Call the healthcheck mock the way code under test would
    println!("\n--- Calling the mock ---");
    let reply = reqwest::Client::new()
        .get("http://localhost:8080/healthcheck")
        .header("Accept", "application/json")
        .send()
        .await;
    match reply {
        Ok(r) => println!("Mock answered with {}", r.status()),
        Err(e) => println!("Mock call failed: {e}"),
    }

    // Show the report, then enforce it
    println!("\n--- Verification ---");
    let report = smocker.verification_report().await?;
    println!("{}", report.pretty_print());

    smocker.verify_mocks_in_current_session().await?;
    println!("\nAll mocks used, no unexpected calls.");

    Ok(())
}
