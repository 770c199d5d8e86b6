//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Primitives (`button`, `input`) carry typed props for their documented
//! contract; any other attribute valid for the underlying element is passed
//! through with Leptos attribute spreading, e.g.
//! `<Button {..} data-testid="submit">`. `layout` holds the route shells.

pub mod button;
pub mod input;
pub mod layout;
