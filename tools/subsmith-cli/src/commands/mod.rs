pub mod check;
pub mod transcribe;
