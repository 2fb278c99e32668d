//! Integration tests for the nessus workspace, driven through the public API
//! of `nessus-core` over XML fixtures.

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod host;
