//! # qrforge
//!
//! A Rust library for generating QR codes with Reed-Solomon error correction.
//! Payloads are encoded in byte mode at the highest error correction level,
//! and the finished symbol can be rendered as a module grid, a grayscale
//! image or a terminal string.
//!
//! ## Features
//!
//! - **Byte mode encoding**: Any `&[u8]` payload, no alphabet restrictions
//! - **Automatic version selection**: Smallest of versions 1 to 20 that fits the data
//! - **Reed-Solomon Error Correction**: High level protection on every block
//! - **Automatic masking**: All eight mask patterns scored, lowest penalty wins
//! - **Rendering**: Boolean module matrix, grayscale image or terminal output
//!
//! ## Quick Start
//!
//! ```rust
//! use qrforge::generate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Simplest usage - version and mask are chosen automatically
//! let qr = generate("HELLO")?;
//! assert_eq!(qr.width(), 21);
//!
//! let modules = qr.to_modules();
//! assert!(modules[3][3]); // top left finder core is dark
//! # Ok(())
//! # }
//! ```
//!
//! ## Full Configuration
//!
//! ```rust
//! use qrforge::{MaskPattern, QrBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QrBuilder::new(b"Hello, World!")
//!     .version(Version::new(2)?)   // QR version (size) - if not provided, finds smallest version to fit data
//!     .mask(MaskPattern::new(3)?)  // Mask pattern - if not provided, finds best mask based on penalty score
//!     .build()?;
//!
//! let img = qr.to_image(4); // 4x scale factor
//! assert_eq!(img.width(), (25 + 8) * 4);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;

pub use builder::{Module, QrBuilder, QrCode};
pub use common::error::{QrError, QrResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, Version};

/// Encodes `text` as a QR code, choosing the smallest version that fits and
/// the mask pattern with the lowest penalty score.
pub fn generate(text: &str) -> QrResult<QrCode> {
    QrBuilder::new(text.as_bytes()).build()
}
