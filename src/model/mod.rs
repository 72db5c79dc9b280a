pub mod inputs;
pub mod orders;
pub mod state;
pub mod variates;
