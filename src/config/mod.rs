pub mod traits;
pub mod table;
pub mod ordering;
pub mod schedule;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use ordering::OrderingConfig;
pub use schedule::ScheduleConfig;
pub use table::TableConfig;
pub use traits::ConfigSection;
