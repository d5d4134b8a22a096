//! Test helpers for writing plan requests into scratch directories.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::plan::{ListingEntry, PlanRequest};
use backload_core::{ListingStatus, Pesos};

/// A scratch directory that lives as long as the returned guard.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}

pub(super) fn write_request(path: &Utf8Path, request: &PlanRequest) {
    let payload = serde_json::to_string_pretty(request).expect("serialise request");
    write_utf8(path, payload.as_bytes());
}

pub(super) fn trip(origin: &str, destination: &str) -> PlanRequest {
    PlanRequest {
        origin: origin.to_owned(),
        destination: destination.to_owned(),
        vehicle: "10W Wing Van (12-15 tons)".to_owned(),
        base_earnings: Pesos(25_000),
        listings: Vec::new(),
    }
}

pub(super) fn open_listing(id: &str, origin: &str, destination: &str, price: i64) -> ListingEntry {
    ListingEntry {
        id: id.to_owned(),
        origin: origin.to_owned(),
        destination: destination.to_owned(),
        asking_price: Pesos(price),
        status: ListingStatus::Open,
        cargo_type: "Dry goods".to_owned(),
        weight_tonnes: 12.0,
    }
}
