// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core iconset rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`icon`]: Iconset types ([`IconSet`](icon::IconSet), [`IconSpec`](icon::IconSpec),
//!   [`LogicalSize`](icon::LogicalSize), [`DisplayScale`](icon::DisplayScale),
//!   [`ScaleFactor`](icon::ScaleFactor))

pub mod icon;
