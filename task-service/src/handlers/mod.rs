pub mod health;
pub mod tasks;

pub use health::{health_check, readiness_check};
pub use tasks::{
    complete_task, create_task, delete_all_tasks, delete_task, list_tasks, undo_task,
};
