//! Fuzz target for the vector record line codec.
//!
//! The parser must never panic on arbitrary input, and any line it accepts
//! must re-encode and re-parse to the same record.

#![no_main]

use libfuzzer_sys::fuzz_target;
use vectors::Record;

fuzz_target!(|line: &str| {
  let Ok(record) = Record::parse_line(line, 1) else {
    return;
  };

  let reencoded = record.to_line();
  let reparsed = Record::parse_line(&reencoded, 1).expect("accepted record must re-parse");
  assert_eq!(reparsed, record);
  assert_eq!(reparsed.to_line(), reencoded);
});
