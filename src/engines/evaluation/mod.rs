pub mod model;
pub mod ordering_model;
pub mod schedule_model;

pub use model::ContentionModel;
pub use ordering_model::OrderingModel;
pub use schedule_model::ScheduleModel;
