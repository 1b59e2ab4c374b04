pub mod authentication_gate_impl;
