use anyhow::Result;

// Print the OpenAPI document for the HTTP API.
fn main() -> Result<()> {
    let spec = sisu::api::openapi();
    println!("{}", serde_json::to_string_pretty(&spec)?);
    Ok(())
}
