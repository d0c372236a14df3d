//! Test doubles for the transport and clock seams.

pub mod manual_clock;
pub mod mock_transport;
