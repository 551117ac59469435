//! Placement engine for the room designer.
//!
//! This crate owns the state of a designer session: the room, the furniture
//! placed in it, the current selection, and the drag gesture in progress. It
//! translates discrete input events (pointer drag, keyboard) into clamped
//! transform updates. Rendering, camera orbit, and asset loading belong to
//! the rendering collaborator, which reads the latest committed scene through
//! [`engine::Engine::frame`] on each redraw and reports input back to the
//! engine.
//!
//! Every operation is total and synchronous: invalid indices clear the
//! selection, operations without a selection are no-ops, and nothing here can
//! fail or block.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | The [`engine::Engine`] state container and its transition operations |
//! | [`scene`] | Room dimensions, placed items, and the scene store |
//! | [`input`] | Input event types and the drag gesture state |
//! | [`frame`] | The declarative scene description handed to the renderer |
//! | [`consts`] | Shared numeric constants (wall pad, step sizes, defaults) |

pub mod consts;
pub mod engine;
pub mod frame;
pub mod input;
pub mod scene;
