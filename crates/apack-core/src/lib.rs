//! Animation Pack Core Types
//!
//! This crate provides the output data model shared by the animation pack
//! parser and any downstream renderer. It includes:
//!
//! - **Tree**: The parsed action tree ([`tree::TreeNode`], [`tree::Action`])
//! - **Duration**: Time units and their millisecond multipliers ([`duration::DurationUnit`])

pub mod duration;
pub mod tree;
