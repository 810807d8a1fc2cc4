//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point and integer
//! domains so that call-sites in the render code stay free of raw
//! `as` casts.

/// Scale a colour channel by a shade factor, saturating into `0..=255`.
///
/// The fractional part is truncated, matching how the box faces have always
/// been tinted.
///
/// # Examples
/// ```
/// use lakitu::numeric::shade_channel;
/// assert_eq!(shade_channel(200, 1.2), 240);
/// assert_eq!(shade_channel(250, 1.2), 255);
/// assert_eq!(shade_channel(100, 0.4), 40);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The product is clamped into the u8 domain before casting."
)]
#[must_use]
pub fn shade_channel(base: u8, factor: f32) -> u8 {
    let scaled = f32::from(base) * factor;
    if !scaled.is_finite() {
        return 0;
    }
    scaled.clamp(0.0, f32::from(u8::MAX)) as u8
}

/// Convert a pixel dimension into `f32` for projection arithmetic.
#[expect(
    clippy::cast_precision_loss,
    reason = "Screen dimensions are far below the 2^24 limit of exact f32 integers."
)]
#[must_use]
pub fn dimension_to_f32(value: u32) -> f32 {
    value as f32
}

/// Convert a frame counter into `f32` for animation phases.
///
/// Precision degrades after about three days of continuous play at 60 FPS,
/// which only affects the smoothness of decorative spins.
#[expect(
    clippy::cast_precision_loss,
    reason = "Animation phases tolerate precision loss on very long runs."
)]
#[must_use]
pub fn frame_to_f32(frame: u64) -> f32 {
    frame as f32
}
