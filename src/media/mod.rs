// SPDX-License-Identifier: MPL-2.0
//! Poster and backdrop images fetched from the network.

pub mod fetch;
pub mod store;

pub use fetch::{decode_image, ImageLoader};
pub use store::{ImageSlot, ImageStore, ImageView};
