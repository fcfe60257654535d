use std::error::Error;

use qrforge::{QrBuilder, Version};

fn main() -> Result<(), Box<dyn Error>> {
    let data = "Hello, world! 🌏";

    let qr = QrBuilder::new(data.as_bytes()).version(Version::new(3)?).build()?.to_str(1);
    println!("{qr}");

    Ok(())
}
