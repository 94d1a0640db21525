pub mod backends;

pub use backends::memory::MemoryDecisionStore;

pub mod prelude {
    pub use super::backends::memory::MemoryDecisionStore;
    pub use nh_core::{DecisionFilter, DecisionRecord, DecisionStatus, DecisionStore, Result};
}
