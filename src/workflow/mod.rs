pub mod submit_flow;

pub use submit_flow::SubmitFlow;
