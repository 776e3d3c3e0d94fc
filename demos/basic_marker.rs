use std::error::Error;

use fidu::MarkerBuilder;

fn main() -> Result<(), Box<dyn Error>> {
    // Simplest usage - provide only the code, all other settings use their defaults
    let marker = MarkerBuilder::new(42).build()?;

    // Save as code-42.png in the working directory
    let path = marker.save()?;

    println!("Saved code to {}", path.display());
    Ok(())
}
