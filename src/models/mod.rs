pub mod event_status;
pub mod laytime;
pub mod snapshot;
pub mod timeline_event;

pub use event_status::EventStatus;
pub use laytime::LaytimeSummary;
pub use snapshot::{Snapshot, period_label};
pub use timeline_event::TimelineEvent;
