//! Fuzz target: JSON deserialization of `CreateVpcBody`.
//!
//! Verifies that arbitrary byte sequences fed to the request-body parser
//! never cause panics, UB, or unbounded resource consumption.

#![no_main]

use libfuzzer_sys::fuzz_target;
use strato_gateway::routes::CreateVpcBody;

fuzz_target!(|data: &[u8]| {
    // Errors are expected and fine; only panics count.
    let _ = serde_json::from_slice::<CreateVpcBody>(data);
});
