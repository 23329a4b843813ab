//! Command line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{
    load_workflow, run_check_workflow, CheckWorkflowArgs, LoadedWorkflow, WorkflowError,
    WorkflowOutcome, EXIT_FAILURE, EXIT_USAGE,
};
