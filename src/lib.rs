//! Rotation-aware resize engine for story page elements.
//!
//! Hosts feed gesture start/move/end events for an element (image, text box,
//! etc.) that may be rotated. The engine turns pointer movement into a new
//! size in the element's own frame, clamps it against minimum sizes and
//! unclippable content, and corrects the element's position so its rotated
//! box stays anchored instead of drifting. Results come back as
//! [`controller::ResizeAction`]s; the engine never touches a document tree.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Gesture controller and the actions it emits |
//! | [`gesture`] | Drag context, event payloads, and the gesture state machine |
//! | [`delta`] | Pointer delta to local size delta, drag edges |
//! | [`geometry`] | Anchored offsets and position correction for rotated boxes |
//! | [`units`] | Pixel/percentage and degree/radian conversions |
//! | [`kinds`] | Element kind table mapping kinds to sub-element roles |
//! | [`host`] | Host capability trait and a map-backed host |
//! | [`config`] | JSON configuration |
//! | [`replay`] | Scripted gesture replay |
//! | [`error`] | Error taxonomy |
//! | [`consts`] | Shared numeric constants |

pub mod config;
pub mod consts;
pub mod controller;
pub mod delta;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod kinds;
pub mod replay;
pub mod units;
