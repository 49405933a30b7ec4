// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: sample and uploaded models, upload and download.

pub mod component;
pub mod view;

pub use component::{Effect, Message, State, StateConfig, Status, ViewEnv};
