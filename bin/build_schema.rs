//! Binary for generating contract schemas from odra modules.
#![doc = "Binary for generating contract schemas from odra modules."]

#[allow(unused_imports)]
use streaming_vault_contracts;

fn main() {
    // Schemas are emitted by odra-build for the contracts listed in Odra.toml
}
