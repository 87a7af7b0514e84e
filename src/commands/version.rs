use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("mac-assist version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
