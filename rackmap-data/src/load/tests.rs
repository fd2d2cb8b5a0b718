use super::{LoadError, LoadOptions, load_spots};
use crate::fetch::test_support::{StubBlobSource, block_on_for_tests};
use crate::fetch::{BlobPath, TransportError};
use rstest::{fixture, rstest};

fn collection_payload(ids: &[&str]) -> Vec<u8> {
    let features: Vec<String> = ids
        .iter()
        .enumerate()
        .map(|(index, id)| {
            format!(
                r#"{{"type":"Feature","geometry":{{"type":"Point","coordinates":[{}.0,{}.0]}},"properties":{{"objectid":"{id}"}}}}"#,
                index, index
            )
        })
        .collect();
    format!(
        r#"{{"type":"FeatureCollection","features":[{}]}}"#,
        features.join(",")
    )
    .into_bytes()
}

#[fixture]
fn path() -> BlobPath {
    BlobPath::new("spots.geojson")
}

#[rstest]
fn loads_and_normalizes_in_order(path: BlobPath) {
    let source = StubBlobSource::new(collection_payload(&["a", "b", "c"]));
    let spots = block_on_for_tests(load_spots(&source, &path, LoadOptions::new()))
        .expect("load should succeed");
    let ids: Vec<&str> = spots.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[rstest]
fn empty_payload_is_its_own_error(path: BlobPath) {
    let source = StubBlobSource::new(Vec::new());
    let outcome = block_on_for_tests(load_spots(&source, &path, LoadOptions::new()));
    assert!(matches!(outcome, Err(LoadError::EmptyPayload { .. })));
}

#[rstest]
fn malformed_payload_is_a_decode_error(path: BlobPath) {
    let source = StubBlobSource::new(b"not json".to_vec());
    let outcome = block_on_for_tests(load_spots(&source, &path, LoadOptions::new()));
    assert!(matches!(outcome, Err(LoadError::Decode(_))));
}

#[rstest]
fn oversized_payload_surfaces_the_transport_error(path: BlobPath) {
    let source = StubBlobSource::new(collection_payload(&["a"]));
    let options = LoadOptions::new().with_max_len(4);
    let outcome = block_on_for_tests(load_spots(&source, &path, options));
    assert!(matches!(
        outcome,
        Err(LoadError::Transport(TransportError::TooLarge {
            limit: 4,
            ..
        }))
    ));
}

#[rstest]
fn cap_keeps_the_first_records(path: BlobPath) {
    let source = StubBlobSource::new(collection_payload(&["a", "b", "c", "d", "e"]));
    let options = LoadOptions::new().with_max_spots(3);
    let spots =
        block_on_for_tests(load_spots(&source, &path, options)).expect("load should succeed");
    let ids: Vec<&str> = spots.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}
