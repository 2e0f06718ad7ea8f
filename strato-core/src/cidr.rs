//! Address-block defaults and the subnet derivation scheme.

/// Network address block used when the caller does not supply one.
pub const DEFAULT_CIDR_BLOCK: &str = "10.0.0.0/16";

/// Number of subnets created when the caller does not supply a count.
pub const DEFAULT_SUBNET_COUNT: u32 = 2;

/// Derive the address block for the `index`-th subnet of a network.
///
/// Subnets follow a fixed `10.0.{index}.0/24` scheme keyed on the
/// creation loop index. The result is not checked for containment in
/// (or overlap with) the network's own address block; a caller-supplied
/// network block outside `10.0.0.0/16` will yield subnets that the
/// provisioning API may reject.
#[must_use]
pub fn subnet_cidr(index: u32) -> String {
    format!("10.0.{index}.0/24")
}
