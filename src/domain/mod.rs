pub mod agent;
pub mod record;

pub use agent::{AgentRole, ContactChannel, ContactSet};
pub use record::{Record, RecordMeta, CREATED_ON_COLUMN, FORMAT_COLUMN};
