//! API endpoint modules organized by resource.
//!
//! Each module provides typed methods for one Pushbullet resource group.

pub mod chats;
pub mod devices;
pub mod pushes;
pub mod subscriptions;
