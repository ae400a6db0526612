//! Binding a request body to a destination, with hooks.

use tristate_core::codec;

use crate::decode;
use crate::error::{Result, WireError};
use crate::shape::Shape;

const DEFAULT_MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Options for [`bind_json`].
///
/// ```
/// use tristate_wire::BindOptions;
///
/// let opts = BindOptions::new().max_body_bytes(1024).validate(false);
/// assert_eq!(opts.max_body_bytes, 1024);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindOptions {
    /// Largest accepted body, in bytes
    pub max_body_bytes: usize,
    /// Whether to run the validation hooks
    pub validate: bool,
}

impl BindOptions {
    /// Defaults: 4 MiB limit, validation on
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body size limit
    pub fn max_body_bytes(mut self, limit: usize) -> Self {
        self.max_body_bytes = limit;
        self
    }

    /// Enable or skip the validation hooks
    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

impl Default for BindOptions {
    fn default() -> Self {
        BindOptions {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            validate: true,
        }
    }
}

/// A destination that can be bound from a request body.
///
/// Every hook defaults to a no-op; an error from any hook aborts the bind
/// and is returned unchanged.
pub trait Bind: Shape {
    /// Inspect the raw body before decoding
    fn before_decode(body: &[u8]) -> Result<()> {
        let _ = body;
        Ok(())
    }

    /// Adjust the freshly decoded value
    fn after_decode(&mut self) -> Result<()> {
        Ok(())
    }

    /// Prepare for validation
    fn before_validate(&mut self) -> Result<()> {
        Ok(())
    }

    /// Check the decoded value
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Follow-up after successful validation
    fn after_validate(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Bind a JSON body.
///
/// Order: registry install, body checks, `before_decode`, decode,
/// `after_decode`, then `before_validate`, `validate` and `after_validate`
/// when validation is enabled.
pub fn bind_json<T: Bind>(body: &[u8], options: &BindOptions) -> Result<T> {
    codec::install();
    let result = run_bind(body, options);
    if let Err(e) = &result {
        tracing::debug!(
            target: "tristate::wire",
            destination = std::any::type_name::<T>(),
            error = %e,
            "bind failed"
        );
    }
    result
}

fn run_bind<T: Bind>(body: &[u8], options: &BindOptions) -> Result<T> {
    if body.is_empty() {
        return Err(WireError::EmptyBody);
    }
    if body.len() > options.max_body_bytes {
        return Err(WireError::BodyTooLarge {
            limit: options.max_body_bytes,
            actual: body.len(),
        });
    }
    T::before_decode(body)?;
    let mut value: T = decode::from_slice(body)?;
    value.after_decode()?;
    if !options.validate {
        return Ok(value);
    }
    value.before_validate()?;
    value.validate()?;
    value.after_validate()?;
    Ok(value)
}
