//! Fuzz target: JSON deserialization of `NetworkRecord`.
//!
//! The record store scan decodes collaborator-supplied JSON into
//! `NetworkRecord`s; arbitrary bytes must never panic the decoder.

#![no_main]

use libfuzzer_sys::fuzz_target;
use strato_core::NetworkRecord;

fuzz_target!(|data: &[u8]| {
    let _ = serde_json::from_slice::<Vec<NetworkRecord>>(data);
});
