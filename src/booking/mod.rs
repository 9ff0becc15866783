//! Booking flow — the surface that hands a qualified visitor off to the
//! external scheduling widget.

pub mod embed;
pub mod surface;

pub use embed::{Breakpoint, CalendarEmbed, EMBED_ANCHOR};
pub use surface::{BookingSurface, SurfaceEvent};
