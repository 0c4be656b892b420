//! Shared configuration constants for imgmirror
//!
//! This module contains default values and configuration constants used
//! throughout the codebase to ensure consistency and avoid magic numbers.

/// Chrome user agent string sent with image requests
///
/// Several image CDNs refuse requests carrying a default library user agent,
/// so outbound fetches identify as a desktop browser.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Record status eligible for processing
///
/// Only records in this status are listed by the batch driver; drafts and
/// trashed records are never touched.
pub const STATUS_PUBLISHED: &str = "published";
