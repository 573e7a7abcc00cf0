//! Codec Tests
//!
//! Tests for value encoding/decoding: payload sizes, sign handling, width
//! checks and record layouts.

use bytes::Bytes;
use memc::codec::{decode, encode};
use memc::{ErrorKind, MemcError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Person {
    name: String,
    age: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Reading {
    sensor: u16,
    celsius: i32,
    tags: Vec<String>,
    raw: Vec<u8>,
    note: Option<String>,
}

memc::record!(Person, Reading);

fn decoding_kind<T: memc::Decode + std::fmt::Debug>(bytes: &[u8]) -> ErrorKind {
    decode::<T>(bytes).unwrap_err().kind()
}

// =============================================================================
// Encoding Size Tests
// =============================================================================

#[test]
fn test_encode_bytes() {
    let b = encode(&vec![2u8, 4, 6, 8]).unwrap();
    assert_eq!(b, vec![2, 4, 6, 8]);

    let b = encode(&[2u8, 4, 6, 8][..]).unwrap();
    assert_eq!(b.len(), 4);
}

#[test]
fn test_encode_string() {
    assert_eq!(encode("foobar").unwrap().len(), 6);
    assert_eq!(encode(&String::from("foobar")).unwrap(), b"foobar");
    // byte length, not char count
    assert_eq!(encode("héllo").unwrap().len(), 6);
}

#[test]
fn test_encode_integer_widths() {
    assert_eq!(encode(&3i8).unwrap().len(), 1);
    assert_eq!(encode(&3u8).unwrap().len(), 1);
    assert_eq!(encode(&i16::MAX).unwrap().len(), 2);
    assert_eq!(encode(&u16::MAX).unwrap().len(), 2);
    assert_eq!(encode(&i32::MAX).unwrap().len(), 4);
    assert_eq!(encode(&u32::MAX).unwrap().len(), 4);
    assert_eq!(encode(&i64::MAX).unwrap().len(), 8);
    assert_eq!(encode(&u64::MAX).unwrap().len(), 8);
    assert_eq!(encode(&isize::MAX).unwrap().len(), 8);
    assert_eq!(encode(&usize::MAX).unwrap().len(), 8);
}

#[test]
fn test_encode_is_little_endian() {
    assert_eq!(encode(&0x0102u16).unwrap(), vec![0x02, 0x01]);
    assert_eq!(encode(&-2i32).unwrap(), vec![0xfe, 0xff, 0xff, 0xff]);
}

#[test]
fn test_encode_record() {
    let p = Person {
        name: "bob".to_string(),
        age: 32,
    };
    // u64 length prefix + "bob" + i64
    assert_eq!(encode(&p).unwrap().len(), 19);
    assert_eq!(encode(&Box::new(p.clone())).unwrap(), encode(&p).unwrap());
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_bytes() {
    let result: Vec<u8> = decode(&[1, 2]).unwrap();
    assert_eq!(result, vec![1, 2]);

    let result: Bytes = decode(&[1, 2]).unwrap();
    assert_eq!(&result[..], &[1, 2]);
}

#[test]
fn test_decode_string() {
    let result: String = decode(b"hello").unwrap();
    assert_eq!(result, "hello");
}

#[test]
fn test_decode_invalid_utf8() {
    assert_eq!(decoding_kind::<String>(&[0xff, 0xfe]), ErrorKind::DecodingFailure);
}

#[test]
fn test_decode_signed_twos_complement() {
    assert_eq!(decode::<i8>(&[0xfe]).unwrap(), -2);
    assert_eq!(decode::<i16>(&[0xfe, 0xff]).unwrap(), -2);
    assert_eq!(decode::<i32>(&[0xfe, 0xff, 0xff, 0xff]).unwrap(), -2);
    assert_eq!(decode::<i64>(&[0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]).unwrap(), -2);
    assert_eq!(decode::<isize>(&[0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]).unwrap(), -2);
}

#[test]
fn test_decode_unsigned_max() {
    assert_eq!(decode::<u8>(&[0xff]).unwrap(), u8::MAX);
    assert_eq!(decode::<u16>(&[0xff; 2]).unwrap(), u16::MAX);
    assert_eq!(decode::<u32>(&[0xff; 4]).unwrap(), u32::MAX);
    assert_eq!(decode::<u64>(&[0xff; 8]).unwrap(), u64::MAX);
    assert_eq!(decode::<usize>(&[0xff; 8]).unwrap() as u64, u64::MAX);
}

#[test]
fn test_decode_wrong_width() {
    assert_eq!(decoding_kind::<i8>(&[]), ErrorKind::DecodingFailure);
    assert_eq!(decoding_kind::<u16>(&[1]), ErrorKind::DecodingFailure);
    assert_eq!(decoding_kind::<u32>(&[1, 2, 3, 4, 5]), ErrorKind::DecodingFailure);
    assert_eq!(decoding_kind::<i64>(&[0; 4]), ErrorKind::DecodingFailure);
    assert_eq!(decoding_kind::<usize>(&[0; 4]), ErrorKind::DecodingFailure);
}

#[test]
fn test_decode_record_pointer() {
    let input = encode(&Box::new(Person {
        name: "bob".to_string(),
        age: 32,
    }))
    .unwrap();

    let result: Box<Person> = decode(&input).unwrap();
    assert_eq!(
        result,
        Box::new(Person {
            name: "bob".to_string(),
            age: 32,
        })
    );
}

#[test]
fn test_decode_record_value() {
    let input = encode(&Person {
        name: "alice".to_string(),
        age: 30,
    })
    .unwrap();

    let result: Person = decode(&input).unwrap();
    assert_eq!(
        result,
        Person {
            name: "alice".to_string(),
            age: 30,
        }
    );
}

#[test]
fn test_decode_record_from_wrong_payload() {
    let err = decode::<Person>(b"not a person").unwrap_err();
    assert!(matches!(err, MemcError::Decoding(_)));
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_integer_extremes_round_trip() {
    for v in [i8::MIN, -1, 0, 1, i8::MAX] {
        assert_eq!(decode::<i8>(&encode(&v).unwrap()).unwrap(), v);
    }
    for v in [i16::MIN, -1, 0, i16::MAX] {
        assert_eq!(decode::<i16>(&encode(&v).unwrap()).unwrap(), v);
    }
    for v in [i32::MIN, -1, 0, i32::MAX] {
        assert_eq!(decode::<i32>(&encode(&v).unwrap()).unwrap(), v);
    }
    for v in [i64::MIN, -1, 0, i64::MAX] {
        assert_eq!(decode::<i64>(&encode(&v).unwrap()).unwrap(), v);
    }
    for v in [u8::MAX, u8::MIN] {
        assert_eq!(decode::<u8>(&encode(&v).unwrap()).unwrap(), v);
    }
    for v in [u16::MIN, u16::MAX] {
        assert_eq!(decode::<u16>(&encode(&v).unwrap()).unwrap(), v);
    }
    assert_eq!(decode::<u32>(&encode(&u32::MAX).unwrap()).unwrap(), u32::MAX);
    assert_eq!(decode::<u64>(&encode(&u64::MAX).unwrap()).unwrap(), u64::MAX);
    assert_eq!(decode::<isize>(&encode(&isize::MIN).unwrap()).unwrap(), isize::MIN);
    assert_eq!(decode::<usize>(&encode(&usize::MAX).unwrap()).unwrap(), usize::MAX);
}

#[test]
fn test_binary_and_empty_values_round_trip() {
    let all: Vec<u8> = (0..=255).collect();
    assert_eq!(decode::<Vec<u8>>(&encode(&all).unwrap()).unwrap(), all);
    assert_eq!(decode::<Vec<u8>>(&encode(&Vec::<u8>::new()).unwrap()).unwrap(), Vec::<u8>::new());
    assert_eq!(decode::<String>(&encode("").unwrap()).unwrap(), "");
}

#[test]
fn test_nested_record_round_trip() {
    let r = Reading {
        sensor: 7,
        celsius: -40,
        tags: vec!["roof".to_string(), "north".to_string()],
        raw: vec![0, 255, 13, 10],
        note: None,
    };
    assert_eq!(decode::<Reading>(&encode(&r).unwrap()).unwrap(), r);

    let r = Reading {
        note: Some("calibrated".to_string()),
        ..r
    };
    assert_eq!(decode::<Reading>(&encode(&r).unwrap()).unwrap(), r);
}
