//! Integration tests for the ClientPortal HTTP API.

mod helpers;

mod download_test;
mod portal_test;
