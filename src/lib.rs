//! # fidu
//!
//! A Rust library for generating square 2D fiducial markers, the optical tags used for object
//! tracking on MultiTaction multi-touch displays.
//!
//! ## Features
//!
//! - **Marker Generation**: Encode a 32-bit integer into a `division x division` grid of blocks
//! - **Orientation Corner**: The top left cell is always white, the other three corners always black
//! - **Size Mode**: Give the total side length in pixels and let the block size be derived
//! - **Borderless Markers**: Leave the outermost ring transparent instead of black
//! - **PNG Output**: Save markers as RGBA PNG, named `code-<code>.png` by default
//!
//! ## Quick Start
//!
//! ### Simple Marker Generation
//!
//! ```rust,no_run
//! use fidu::MarkerBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Simplest usage - provide only the code, division 5 and block size 32 are used
//! let marker = MarkerBuilder::new(42).build()?;
//!
//! let path = marker.save()?;  // writes code-42.png
//! println!("Saved code to {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use fidu::MarkerBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let marker = MarkerBuilder::new(1234)
//!     .division(6)          // Blocks per side - must range from 3 to 8, defaults to 5
//!     .block_size(16)       // Pixels per block - must range from 16 to 32, defaults to 32
//!     .border(false)        // Transparent outer ring - defaults to true
//!     .name("tag.png")      // Output file - defaults to code-<code>.png
//!     .build()?;
//!
//! assert_eq!(marker.layout().size(), 160);
//! print!("{}", marker.to_str());
//! # Ok(())
//! # }
//! ```
//!
//! ### Size Mode
//!
//! ```rust
//! use fidu::{MarkerBuilder, MarkerError};
//!
//! // 288 / (5 + 4) = 32 pixels per block
//! let marker = MarkerBuilder::new(7).size(288).build().unwrap();
//! assert_eq!(marker.layout().block_size(), 32);
//!
//! // 290 cannot be split into 9 equal blocks
//! let err = MarkerBuilder::new(7).size(290).build().unwrap_err();
//! assert!(matches!(err, MarkerError::IncorrectProportions { .. }));
//! ```
//!
//! ## Marker Anatomy
//!
//! A marker is `block_size * (division + 4)` pixels wide and made of nested squares:
//!
//! - **Border**: one block wide, black (or transparent)
//! - **White ring**: one block wide
//! - **Code grid**: `division x division` blocks on a black square, white for 1 and black for 0
//!
//! The code is written least significant bit first, row by row, skipping the four corners.
//! Codes longer than `division² - 4` bits are truncated.

pub mod builder;
pub(crate) mod common;

pub use builder::{default_file_name, Marker, MarkerBuilder};
pub use common::canvas::Canvas;
pub use common::error::{MarkerError, MarkerResult};
pub use common::matrix::{BitMatrix, Cell};
pub use common::metadata::{
    Color, Layout, BLOCK_SIZE_RANGE, DEFAULT_BLOCK_SIZE, DEFAULT_DIVISION, DIVISION_RANGE, MAX_SIZE,
};
