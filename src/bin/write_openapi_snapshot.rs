// src/bin/write_openapi_snapshot.rs
use anyhow::Result;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let output_path = catalog_core::presentation::http::openapi::snapshot_path();
    catalog_core::presentation::http::openapi::write_openapi_snapshot(&output_path)?;
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
