use super::test_support::{StubBlobSource, block_on_for_tests};
use super::{BlobPath, BlobSource, DEFAULT_MAX_LEN, DirBlobSource, TransportError};
use rstest::{fixture, rstest};
use std::fs;
use tempfile::TempDir;

#[fixture]
fn blob_dir() -> TempDir {
    TempDir::new().expect("failed to create temporary directory")
}

fn dir_source(dir: &TempDir) -> DirBlobSource {
    let root = dir
        .path()
        .to_str()
        .expect("temporary path should be UTF-8")
        .to_owned();
    DirBlobSource::new(root)
}

#[rstest]
fn dir_source_reads_blob_contents(blob_dir: TempDir) {
    fs::write(blob_dir.path().join("spots.geojson"), b"{\"features\":[]}")
        .expect("failed to write fixture");
    let source = dir_source(&blob_dir);
    let payload = block_on_for_tests(source.fetch(&BlobPath::new("spots.geojson"), DEFAULT_MAX_LEN))
        .expect("fetch should succeed");
    assert_eq!(payload, b"{\"features\":[]}");
}

#[rstest]
fn dir_source_reports_missing_blob(blob_dir: TempDir) {
    let source = dir_source(&blob_dir);
    let outcome =
        block_on_for_tests(source.fetch(&BlobPath::new("absent.geojson"), DEFAULT_MAX_LEN));
    assert!(matches!(outcome, Err(TransportError::Network { .. })));
}

#[rstest]
fn dir_source_rejects_oversized_blob(blob_dir: TempDir) {
    fs::write(blob_dir.path().join("big.geojson"), [0_u8; 64]).expect("failed to write fixture");
    let source = dir_source(&blob_dir);
    let outcome = block_on_for_tests(source.fetch(&BlobPath::new("big.geojson"), 8));
    assert!(matches!(
        outcome,
        Err(TransportError::TooLarge { limit: 8, .. })
    ));
}

#[rstest]
fn empty_blob_is_not_a_transport_error(blob_dir: TempDir) {
    fs::write(blob_dir.path().join("empty.geojson"), b"").expect("failed to write fixture");
    let source = dir_source(&blob_dir);
    let payload = block_on_for_tests(source.fetch(&BlobPath::new("empty.geojson"), DEFAULT_MAX_LEN))
        .expect("fetch should succeed");
    assert!(payload.is_empty());
}

#[rstest]
fn stub_source_honours_the_ceiling() {
    let source = StubBlobSource::new(vec![0; 32]);
    let outcome = block_on_for_tests(source.fetch(&BlobPath::new("spots.geojson"), 16));
    assert!(matches!(
        outcome,
        Err(TransportError::TooLarge { limit: 16, .. })
    ));
    let payload = block_on_for_tests(source.fetch(&BlobPath::new("spots.geojson"), 32))
        .expect("fetch should succeed at the limit");
    assert_eq!(payload.len(), 32);
}

#[rstest]
fn blob_path_round_trips() {
    let path = BlobPath::from("racks.geojson");
    assert_eq!(path.as_ref(), "racks.geojson");
    assert_eq!(path.to_string(), "racks.geojson");
    assert_eq!(path.into_inner(), "racks.geojson");
}
