//! Embedded word lists
//!
//! Generated by the build script from `data/answers.txt` and `data/allowed.txt`.

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
