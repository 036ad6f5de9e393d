pub mod orchestration;

pub use orchestration::{
    calculate, run_align_workflow, settle, AlignOutcome, AlignWorkflowArgs, Calculation,
};
