//! CLI operation mode handlers.
//!
//! This module contains the implementations for different operation modes:
//! - [`university_listing`]: List universities with their logo references
//! - [`result_listing`]: Print one university's results
//! - [`result_detail`]: Print one result with its verdict and discussion
//! - [`comment_posting`]: Post a comment to one result
//! - [`dashboard`]: Interactive terminal dashboard
//!
//! Output formatting utilities are in [`output`].

pub mod comment_posting;
pub mod dashboard;
pub mod output;
pub mod result_detail;
pub mod result_listing;
pub mod university_listing;
