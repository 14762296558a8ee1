// SPDX-License-Identifier: MPL-2.0
//! `iced_bubble` is a chat-message bubble screen built with the Iced GUI
//! framework.
//!
//! A long-press on the message opens an animated like/dislike picker;
//! picking a reaction bumps its tally with a pulse animation and dismisses
//! the picker. Tallies live in memory only and reset on relaunch.

#![doc(html_root_url = "https://docs.rs/iced_bubble/0.1.0")]

pub mod animation;
pub mod app;
pub mod domain;
pub mod error;
pub mod ui;
