//! Plain data for the jig: cutter placements, their history and the
//! workpiece they cut into.

mod cut;
mod history;
mod workpiece;

pub use cut::Cut;
pub use history::CutHistory;
pub use workpiece::Workpiece;
