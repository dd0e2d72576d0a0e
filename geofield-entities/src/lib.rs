#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # geofield-entities
//!
//! Reusable, agnostic entities of the geofield widget.
//!
//! The entities only contain generic functionality that does not know
//! anything about the DOM, the map library or timers.

pub mod geo;
pub mod location;
