//! # Introduction
//!
//! rostty is an interactive workbench for a singly linked, record-valued list
//! with an independent active-item cursor.  Every list operation is driven
//! from a terminal UI built with [ratatui](https://docs.rs/ratatui): one
//! keypress per command, a field-by-field entry form for new records, and a
//! live view of the whole chain after each step.
//!
//! ## Command pipeline
//!
//! ```text
//! Keypress → Command → Workbench → CursorList → Panes
//! ```
//!
//! 1. [`list`] — the core ADT: an arena of nodes keyed by stable ids, a head
//!    cursor and an active-item cursor, and splice operations relative to the
//!    active item.
//! 2. [`record`] — the fixed-shape value stored in each node (bounded name
//!    plus age, weight, height), cloned in and out by value.
//! 3. [`workbench`] — maps menu keys to commands, executes them against the
//!    list, and keeps a transcript of outcome lines.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Cursor model
//!
//! The active cursor is independent of the head: it may be unset, deleting
//! the head while it is active unsets it, and advancing off the tail leaves
//! it unset until it is re-armed from the head.  Rendering never touches it;
//! the UI traverses the chain through a read-only iterator.

pub mod list;
pub mod record;
pub mod ui;
pub mod workbench;
