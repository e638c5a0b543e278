/// worked real-gas processes printed to the terminal
pub mod realgas_examples;
