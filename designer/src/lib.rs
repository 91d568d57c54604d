//! Canvas editing engine for the mobile screen designer.
//!
//! This crate owns everything between raw pointer input and the persisted
//! layout document: the in-memory component model, the pure geometry math for
//! placement/move/resize, the gesture state machine, selection and property
//! sync, and layout (de)serialization plus the save/load session against the
//! persistence service. The host UI layer is responsible only for wiring
//! pointer events to the [`editor::Editor`] and mirroring the returned
//! [`editor::Action`]s into visuals.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`editor`] | The owned editor: store + selection + gesture + actions |
//! | [`model`] | Component types and the insertion-ordered store |
//! | [`geometry`] | Pure placement/move/resize math |
//! | [`input`] | The pointer gesture state machine |
//! | [`hit`] | Hit-testing bodies and corner handles |
//! | [`panel`] | Property panel views and typed edits |
//! | [`layout`] | Layout document serialization (incl. legacy form) |
//! | [`session`] | Save/load/delete orchestration and name validation |
//! | [`store`] | Persistence interface + HTTP implementation |
//! | [`error`] | User-facing validation errors |
//! | [`consts`] | Shared numeric constants (canvas size, minimums, etc.) |

pub mod consts;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod input;
pub mod layout;
pub mod model;
pub mod panel;
pub mod session;
pub mod store;
