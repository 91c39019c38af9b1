//! Ping command - liveness check.

pub async fn run() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(&tripspec_core::ping())?);
    Ok(())
}
