// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translation files are embedded at build time from `assets/i18n/`.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Fallback to `en-US` when no requested locale is bundled
//! - Missing keys render as `MISSING: <key>` instead of failing

pub mod fluent;

pub use fluent::I18n;
