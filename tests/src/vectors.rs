//! Known-answer vectors for SHA-1 and SHA-512
//!
//! Each entry pairs a message with its expected lowercase hex digest under
//! both algorithms. Messages built from repeated `'a'` bytes sit on the
//! padding boundaries of the two block sizes.

/// Source of a vector's message bytes
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Literal bytes
    Literal(&'static [u8]),
    /// `count` repetitions of `byte`
    Repeat { byte: u8, count: usize },
}

impl Message {
    pub fn bytes(&self) -> Vec<u8> {
        match *self {
            Message::Literal(bytes) => bytes.to_vec(),
            Message::Repeat { byte, count } => vec![byte; count],
        }
    }

    pub fn len(&self) -> usize {
        match *self {
            Message::Literal(bytes) => bytes.len(),
            Message::Repeat { count, .. } => count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KnownAnswer {
    pub name: &'static str,
    pub message: Message,
    pub sha1: &'static str,
    pub sha512: &'static str,
}

const fn a(count: usize) -> Message {
    Message::Repeat { byte: b'a', count }
}

pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        message: Message::Literal(b""),
        sha1: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        sha512: "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
    },
    KnownAnswer {
        name: "abc",
        message: Message::Literal(b"abc"),
        sha1: "a9993e364706816aba3e25717850c26c9cd0d89d",
        sha512: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    },
    KnownAnswer {
        name: "quick brown fox",
        message: Message::Literal(b"The quick brown fox jumps over the lazy dog"),
        sha1: "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
        sha512: "07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb642e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6",
    },
    KnownAnswer {
        name: "utf-8 text",
        message: Message::Literal("Hello World!你好世界".as_bytes()),
        sha1: "92cccfb0bcb6b6a99cfdf8b0ed899c657292882d",
        sha512: "cb05378e92ced249fc1dfea151262af57c930f3dc04270f205a9d21be621fc083f24f1b8b687c1d2e5b8cd548cc67b26a803c760bc41223543bf0fa2866ee587",
    },
    KnownAnswer {
        name: "a x 55",
        message: a(55),
        sha1: "c1c8bbdc22796e28c0e15163d20899b65621d65a",
        sha512: "b0220c772cbf6c1822e2cb38a437d0e1d58772417a4bbb21c961364f8b6143e05aa6316dca8d1d7b19e16448419076395f6086cb55101fbd6d5497b148e1745f",
    },
    KnownAnswer {
        name: "a x 56",
        message: a(56),
        sha1: "c2db330f6083854c99d4b5bfb6e8f29f201be699",
        sha512: "962b64aae357d2a4fee3ded8b539bdc9d325081822b0bfc55583133aab44f18bafe11d72a7ae16c79ce2ba620ae2242d5144809161945f1367f41b3972e26e04",
    },
    KnownAnswer {
        name: "a x 63",
        message: a(63),
        sha1: "03f09f5b158a7a8cdad920bddc29b81c18a551f5",
        sha512: "c1b0f5c6d3b03dfe4a2602e67242f54e344090b66e01100a469b129f583f016c7e27dddeaa438393dcc7ec54b0b57c9ba7af007f9b56db5f6fb677d972a31362",
    },
    KnownAnswer {
        name: "a x 64",
        message: a(64),
        sha1: "0098ba824b5c16427bd7a1122a5a442a25ec644d",
        sha512: "01d35c10c6c38c2dcf48f7eebb3235fb5ad74a65ec4cd016e2354c637a8fb49b695ef3c1d6f7ae4cd74d78cc9c9bcac9d4f23a73019998a7f73038a5c9b2dbde",
    },
    KnownAnswer {
        name: "a x 111",
        message: a(111),
        sha1: "ac877859d427d9192054eea8feb3b8a403ef83a5",
        sha512: "fa9121c7b32b9e01733d034cfc78cbf67f926c7ed83e82200ef86818196921760b4beff48404df811b953828274461673c68d04e297b0eb7b2b4d60fc6b566a2",
    },
    KnownAnswer {
        name: "a x 112",
        message: a(112),
        sha1: "689993727ba37386bb032495e9dbdfb4dd1ba744",
        sha512: "c01d080efd492776a1c43bd23dd99d0a2e626d481e16782e75d54c2503b5dc32bd05f0f1ba33e568b88fd2d970929b719ecbb152f58f130a407c8830604b70ca",
    },
    KnownAnswer {
        name: "a x 119",
        message: a(119),
        sha1: "ee971065aaa017e0632a8ca6c77bb3bf8b1dfc56",
        sha512: "130396a75cb483f2eee8c56d8a668bb3d2641f5243212c0bee2bd33da096ad9eb8179fe18f9eaacf76e09fae9de4c3f14ba13341e345be05bf76c182cc3468cb",
    },
    KnownAnswer {
        name: "a x 127",
        message: a(127),
        sha1: "89d95fa32ed44a7c610b7ee38517ddf57e0bb975",
        sha512: "828613968b501dc00a97e08c73b118aa8876c26b8aac93df128502ab360f91bab50a51e088769a5c1eff4782ace147dce3642554199876374291f5d921629502",
    },
    KnownAnswer {
        name: "a x 128",
        message: a(128),
        sha1: "ad5b3fdbcb526778c2839d2f151ea753995e26a0",
        sha512: "b73d1929aa615934e61a871596b3f3b33359f42b8175602e89f7e06e5f658a243667807ed300314b95cacdd579f3e33abdfbe351909519a846d465c59582f321",
    },
    KnownAnswer {
        name: "a x 1000000",
        message: a(1_000_000),
        sha1: "34aa973cd4c4daa4f61eeb2bdbad27316534016f",
        sha512: "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973ebde0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b",
    },
];
