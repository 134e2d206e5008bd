pub mod catalog;
pub mod clock;
pub mod completion;
pub mod metrics_manager;
pub mod prompts;
