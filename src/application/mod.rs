// SPDX-License-Identifier: MPL-2.0
//! Application layer: ports the core depends on.

pub mod port;
