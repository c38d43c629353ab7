//! One-shot DAC driver seam
//!
//! The vendor DAC driver hands out a channel handle per configuration;
//! output goes through the handle and the handle must be deleted to free
//! the channel. The trait keeps that lifecycle explicit so callers can be
//! held to it.

/// Errors from DAC driver operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DacError {
    /// Channel number is not a DAC channel on this chip
    InvalidChannel,
    /// Channel already has a live handle
    ChannelInUse,
    /// Output code does not fit the DAC's width
    InvalidValue,
    /// Raw vendor status for anything else
    Driver(i32),
}

/// One-shot DAC driver
///
/// A handle represents exclusive ownership of one configured DAC channel.
/// Handles are affine: every handle from [`new_channel`] must eventually go
/// back through [`delete_channel`].
///
/// [`new_channel`]: DacDriver::new_channel
/// [`delete_channel`]: DacDriver::delete_channel
pub trait DacDriver {
    /// Handle to a configured DAC channel
    type Handle;

    /// Allocate and configure a channel
    fn new_channel(&mut self, channel: u8) -> Result<Self::Handle, DacError>;

    /// Write an output code through the handle
    fn output(&mut self, handle: &mut Self::Handle, value: u8) -> Result<(), DacError>;

    /// Release the channel
    fn delete_channel(&mut self, handle: Self::Handle) -> Result<(), DacError>;
}
