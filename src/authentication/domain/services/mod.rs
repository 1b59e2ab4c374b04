pub mod authentication_gate;
