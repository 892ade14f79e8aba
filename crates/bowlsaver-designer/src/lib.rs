//! # Bowlsaver Designer
//!
//! Cutter pose and feasibility state for the bowl-saver jig.
//!
//! ## Core Components
//!
//! - **Model**: the live cut, committed cut history and workpiece extent
//! - **Jig geometry**: blade and tailstock arcs, kerf width
//! - **Jig state**: applies pose changes and recomputes the derived readout
//!
//! ## Architecture
//!
//! ```text
//! pose change (move / rotate / resize / select)
//!   └── JigState::recompute
//!         ├── dimensions (edge distance, centerline offset)
//!         ├── tailstock arc ∩ centerline  → tailstock_reachable
//!         └── kerf arc ∩ front face       → entry point
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use bowlsaver_core::Vector;
//! use bowlsaver_designer::JigState;
//!
//! let mut state = JigState::default();
//! state.set_radius(90.0);
//! state.move_to(Vector::new(150.0, 20.0));
//! assert!(state.entry_point().is_some());
//! ```

pub mod jig;
pub mod jig_state;
pub mod model;
pub mod readout;

pub use jig::{CutterGeometry, JigGeometry, TailstockGeometry};
pub use jig_state::JigState;
pub use model::{Cut, CutHistory, Workpiece};
pub use readout::{Dimension, EntryPoint, JigReadout};
