pub mod calendar;
pub mod config;
pub mod orchestration;
pub mod policy;

// Re-export commonly used types for convenience.
pub use calendar::{CalendarLayout, Category, ContentState, FileRecord};
pub use config::{EnvSettings, LayeredSettings, MapSettings, SettingsSource};
pub use orchestration::{CalendarRunner, RunReport};
pub use policy::{CreationDecision, DeletionGate, PolicyEngine, Temporal};
