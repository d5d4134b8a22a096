//! Shared test harness modules for the backload CLI.

use super::*;

mod helpers;
