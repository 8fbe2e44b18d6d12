//! Property-based tests: chunking never changes the digest

use mdhash::prelude::*;
use mdhash::ReaderConfig;
use mdhash_tests::fixtures::TempFile;
use proptest::prelude::*;
use std::io::Cursor;

/// Message bytes plus a list of cut points into them
fn message_and_cuts() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    prop::collection::vec(any::<u8>(), 0..600).prop_flat_map(|data| {
        let len = data.len();
        let cuts = prop::collection::vec(0..=len, 0..12);
        (Just(data), cuts)
    })
}

fn split_at_cuts(data: &[u8], mut cuts: Vec<usize>) -> Vec<&[u8]> {
    cuts.sort_unstable();
    let mut pieces = Vec::with_capacity(cuts.len() + 1);
    let mut start = 0;
    for cut in cuts {
        pieces.push(&data[start..cut]);
        start = cut;
    }
    pieces.push(&data[start..]);
    pieces
}

fn digest_in_pieces<H: HashFunction>(pieces: &[&[u8]]) -> H::Output {
    let mut hasher = H::new();
    for piece in pieces {
        hasher.update(piece).unwrap();
    }
    hasher.finalize()
}

proptest! {
    #[test]
    fn sha1_chunking_invariance((data, cuts) in message_and_cuts()) {
        let pieces = split_at_cuts(&data, cuts);
        prop_assert_eq!(digest_in_pieces::<Sha1>(&pieces), Sha1::digest(&data));
    }

    #[test]
    fn sha512_chunking_invariance((data, cuts) in message_and_cuts()) {
        let pieces = split_at_cuts(&data, cuts);
        prop_assert_eq!(digest_in_pieces::<Sha512>(&pieces), Sha512::digest(&data));
    }

    #[test]
    fn reader_chunk_size_is_irrelevant(
        data in prop::collection::vec(any::<u8>(), 0..2048),
        chunk_size in 1usize..300
    ) {
        let config = ReaderConfig::new(chunk_size).unwrap();

        let sha1 = Sha1Checksum::from_reader_with(Cursor::new(&data), config).unwrap();
        prop_assert_eq!(sha1, Sha1Checksum::from_bytes(&data));

        let sha512 = Sha512Checksum::from_reader_with(Cursor::new(&data), config).unwrap();
        prop_assert_eq!(sha512, Sha512Checksum::from_bytes(&data));
    }

    #[test]
    fn update_chunks_matches_update(data in prop::collection::vec(any::<u8>(), 0..1024)) {
        let chunks = data
            .chunks(37)
            .map(|chunk| Ok::<_, std::io::Error>(chunk.to_vec()));

        let mut hasher = Sha512::new();
        hasher.update_chunks(chunks).unwrap();
        prop_assert_eq!(hasher.finalize(), Sha512::digest(&data));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn file_adapter_matches_buffer(data in prop::collection::vec(any::<u8>(), 0..20_000)) {
        let file = TempFile::with_contents(&data).unwrap();

        let from_file = Sha1Checksum::from_file(file.path()).unwrap();
        prop_assert_eq!(from_file, Sha1Checksum::from_bytes(&data));

        let from_file = Sha512Checksum::from_file(file.path()).unwrap();
        prop_assert_eq!(from_file, Sha512Checksum::from_bytes(&data));
    }
}
