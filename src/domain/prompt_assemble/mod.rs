pub mod assembler;

pub use assembler::{assemble, assemble_phase, gating_field};
