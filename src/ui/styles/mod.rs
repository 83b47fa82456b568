// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for every home page component.

pub mod button;
pub mod container;
