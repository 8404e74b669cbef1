//! Performance Profile Validator
//!
//! Decides whether a performance profile is internally consistent and works
//! out the labels its machine configuration is published under.
//!
//! ```no_run
//! use performance_profile_types::PerformanceProfile;
//! use performance_profile_validator::{machine_config_label, validate_parameters};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let profile = PerformanceProfile::from_path("profile.yaml")?;
//! validate_parameters(&profile)?;
//! let (key, value) = machine_config_label(&profile)?;
//! println!("{key}={value}");
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

pub mod error;
pub mod labels;
pub mod selector;
pub mod validator;

pub use error::{SizeTarget, ValidationError, ValidationResult};
pub use labels::{machine_config_label, machine_config_pool_selector};
pub use selector::{first_key_and_value, node_selector_role, split_label_key};
pub use validator::validate_parameters;
