//! Domain types shared by every stage of the qualification pipeline.

pub mod group;
pub mod qualifier;
pub mod record;
pub mod team;

pub use group::Group;
pub use qualifier::{GroupTable, IterationResult, PathwayResult, Qualifier};
pub use record::{GroupRecord, Standing};
pub use team::{Confederation, Team};
