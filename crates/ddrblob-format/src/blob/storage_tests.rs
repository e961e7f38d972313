//! Tests for blob loading.

use std::io::Cursor;

use super::*;

fn sample() -> Vec<u8> {
    let mut builder = BlobBuilder::default();
    builder.structure(StructBuilder::new("Sample", 8).field("value", "UDATA", 0));
    builder.build()
}

#[test]
fn byte_storage_from_vec() {
    let storage = ByteStorage::from_vec(vec![1, 2, 3]);
    assert_eq!(&*storage, &[1, 2, 3]);
    assert_eq!(storage.len(), 3);
}

#[test]
fn byte_storage_from_reader() {
    let storage = ByteStorage::from_reader(Cursor::new(vec![4u8, 5, 6])).unwrap();
    assert_eq!(&*storage, &[4, 5, 6]);
}

#[test]
fn blob_exposes_header_and_regions() {
    let bytes = sample();
    let blob = Blob::from_bytes(bytes.clone()).unwrap();

    assert_eq!(blob.byte_order(), ByteOrder::Native);
    assert_eq!(blob.header().structure_count, 1);
    assert_eq!(blob.bytes(), &bytes[..]);
    assert_eq!(
        blob.strings().len_bytes(),
        blob.header().string_table_data_size as usize
    );
}

#[test]
fn short_body_is_short_read() {
    let mut bytes = sample();
    let full = bytes.len();
    bytes.truncate(full - 3);

    let err = Blob::from_bytes(bytes).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(
        err,
        BlobError::ShortRead { expected, actual } if expected == full as u64 && actual == full - 3
    ));
    assert!(err.to_string().contains(&full.to_string()));
}

#[test]
fn short_header_is_truncated_input() {
    let bytes = sample();
    let err = Blob::from_bytes(bytes[..10].to_vec()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TruncatedInput);
}

#[test]
fn trailing_bytes_are_ignored() {
    let mut bytes = sample();
    let declared = bytes.len();
    bytes.extend_from_slice(&[0xEE; 7]);

    let blob = Blob::from_bytes(bytes).unwrap();
    assert_eq!(blob.bytes().len(), declared);
    assert_eq!(blob.decode_structures().unwrap().len(), 1);
}

#[test]
fn from_decoded_reuses_header() {
    let bytes = sample();
    let decoded = Header::decode(&bytes).unwrap();
    let blob = Blob::from_decoded(ByteStorage::from_vec(bytes), decoded).unwrap();
    assert_eq!(*blob.header(), decoded.header);
}

#[test]
fn from_path_missing_file_is_io_error() {
    let err = Blob::from_path("/nonexistent/ddrblob/test.blob").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(matches!(err, BlobError::Io(_)));
}

#[test]
fn blob_error_display() {
    let err = BlobError::ShortRead {
        expected: 100,
        actual: 50,
    };
    assert_eq!(
        err.to_string(),
        "read blob data returned 50 bytes, expected 100"
    );

    let err = BlobError::StringOffsetOutOfRange {
        offset: 0x40,
        table_size: 16,
    };
    assert_eq!(
        err.to_string(),
        "string offset 0x40 outside string table of 16 bytes"
    );
    assert_eq!(err.kind(), ErrorKind::CorruptBlob);
}
