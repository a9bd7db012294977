//! Core library for tempconv
//!
//! This crate implements the **Functional Core** of the tempconv application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The tempconv project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`tempconv_core`** (this crate): Pure transformation functions with zero I/O
//! - **`tempconv`**: CLI, HTTP server and orchestration (the Imperative Shell)
//!
//! All functions in this crate are deterministic and side-effect free, so they
//! can be called from any request handler concurrently without coordination.
//!
//! # Module Organization
//!
//! - [`temperature`]: The unit-less [`Temperature`] value and its literal rendering
//! - [`validate`](mod@validate): Turning untrusted text into a [`Temperature`]
//! - [`convert`](mod@convert): Units, the six conversion selectors, formulas and result formatting
//! - [`api`]: JSON wire models and `/convert` request processing
//! - [`page`]: HTML for the form page and the not-found page
//!
//! # Example Usage
//!
//! ```rust
//! use tempconv_core::convert::convert;
//! use tempconv_core::validate::validate;
//!
//! let value = validate("25").unwrap();
//! let converted = convert(value, "Celcius ke Fahrenheit").unwrap();
//!
//! assert_eq!(converted.result, 77.0);
//! assert_eq!(converted.formatted, "25.0°C = 77.00°F");
//! ```

pub mod api;
pub mod convert;
pub mod page;
pub mod temperature;
pub mod validate;

pub use convert::{convert, ConversionError, ConversionResult, ConversionSelector, TemperatureUnit};
pub use temperature::Temperature;
pub use validate::{validate, ValidationError};
