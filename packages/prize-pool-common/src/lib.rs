pub mod randomness;
pub mod reward;
pub mod sortition;
pub mod types;

pub use randomness::{CommitReveal, RandomnessError};
pub use reward::{RewardEstimate, RewardError, RewardSplit, SCALE};
pub use sortition::{SortitionError, SortitionTree};
pub use types::{AccountSnapshotResponse, DrawState, ParticipantWeight};
