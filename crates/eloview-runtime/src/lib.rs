pub mod config;
pub mod converter;
pub mod error;
pub mod lease;
pub mod messages;
pub mod queue;
pub mod storage;

pub use config::{Config, resolve_workspace_path};
pub use converter::{ConvertOutcome, Converter};
pub use error::{Error, Result};
pub use lease::{Deadline, Lease, NoDeadline};
pub use messages::{AdvancedStatsIngest, ConvertRequest};
pub use queue::{MemoryQueue, MessageQueue};
pub use storage::{FileStore, LocalFileStore};
