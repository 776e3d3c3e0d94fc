use std::error::Error;

use fidu::MarkerBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    let marker = MarkerBuilder::new(20_130_917)
        .division(8)          // Blocks per side - must range from 3 to 8, defaults to 5
        .size(384)            // Total side in pixels - block size becomes 384 / (8 + 4) = 32
        .border(false)        // Transparent outer ring - defaults to true
        .name("configured_marker.png")
        .build()?;

    print!("{}", marker.to_str());
    let path = marker.save()?;

    println!("Saved code to {}", path.display());
    println!("Marker metadata: {}", marker.metadata());

    Ok(())
}
