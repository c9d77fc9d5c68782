//! ImageFlux URL builder
//!
//! Builds canonical, optionally HMAC-signed URLs that tell an ImageFlux
//! image proxy how to transform a source image (resize, crop, reformat,
//! recolor) without contacting any server.
//!
//! # URL Format
//!
//! Transformations travel as a comma-joined token segment in the path:
//!
//! ```text
//! https://example.com/c/w=800,h=600,f=webp:jpeg/photos/cat.jpg
//! ```
//!
//! When the proxy has a signing secret, an HMAC-SHA256 signature over the
//! unsigned path is spliced into the segment:
//!
//! ```text
//! https://example.com/c/sig=1.<base64url>,w=800/photos/cat.jpg
//! ```
//!
//! # Example
//!
//! ```
//! use imageflux::{Config, Image, Proxy};
//!
//! let image = Image::with_config(
//!     "photos/cat.jpg",
//!     Proxy::with_secret("example.com", "mysecret"),
//!     Config {
//!         width: 800,
//!         quality: 80,
//!         ..Default::default()
//!     },
//! );
//! let url = image.signed_url()?;
//! assert!(url.path().starts_with("/c/sig=1."));
//! # Ok::<(), imageflux::Error>(())
//! ```
//!
//! Everything is synchronous and stateless; values are plain data and safe
//! to share across threads.

pub mod color;
pub mod config;
pub mod error;
pub mod image;
pub mod sign;

// Re-export commonly used types
pub use color::Color;
pub use config::{AspectMode, Config, Format, Origin};
pub use error::Error;
pub use image::{Image, Proxy};
pub use sign::sign_path;
