//! Plain value types shared across the app.

pub mod course;
pub mod job;
pub mod profile;
pub mod task;

pub use course::{Course, CourseLevel};
pub use job::{Job, JobType};
pub use profile::UserProfile;
pub use task::{TaskStatus, TaskType, WorkTask};
