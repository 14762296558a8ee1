// SPDX-License-Identifier: MPL-2.0
//! UI components and shared visual vocabulary.

pub mod bubble;
pub mod design_tokens;
pub mod icons;
pub mod theming;
