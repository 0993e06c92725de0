pub mod state_vector;
